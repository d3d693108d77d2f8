// Domain layer - KPI monitoring data model
pub mod ai_query;
pub mod alert;
pub mod kpi;
pub mod period;
pub mod user;
