// Client-side data-access core for the KPI monitoring dashboard
pub mod application;
pub mod domain;
pub mod infrastructure;
