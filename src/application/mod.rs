// Application layer - Use cases and the backend contract
pub mod dashboard_service;
pub mod error;
pub mod kpi_backend;
