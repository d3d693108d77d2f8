// Backend trait for KPI monitoring data access
use async_trait::async_trait;

use crate::application::error::ApiError;
use crate::domain::ai_query::AiResponse;
use crate::domain::alert::Alert;
use crate::domain::kpi::{KpiDefinition, KpiValueSeries, MachineList};
use crate::domain::period::{AggregationInterval, AggregationOp, DateRange};
use crate::domain::user::UserInfo;

/// Parameters of a values request: date window plus aggregation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuesQuery {
    pub range: DateRange,
    pub op: AggregationOp,
    pub interval: AggregationInterval,
}

#[async_trait]
pub trait KpiBackend: Send + Sync {
    /// Exchange credentials for a bearer credential string. The returned
    /// value is attached verbatim to later requests.
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    /// Invalidate the current credential on the backend side.
    async fn logout(&self) -> Result<(), ApiError>;

    /// Profile of the authenticated user.
    async fn fetch_current_user(&self) -> Result<UserInfo, ApiError>;

    /// All KPI definitions supported by the plant.
    async fn fetch_kpis(&self) -> Result<Vec<KpiDefinition>, ApiError>;

    /// A single KPI definition by id.
    async fn fetch_kpi(&self, kpi_id: &str) -> Result<KpiDefinition, ApiError>;

    /// Machines supporting a KPI, as parallel name/id sequences.
    async fn fetch_machines(&self, kpi_id: &str) -> Result<MachineList, ApiError>;

    /// Aggregated KPI values of one machine over a date window.
    async fn fetch_values(
        &self,
        kpi_id: &str,
        machine_id: i64,
        query: &ValuesQuery,
    ) -> Result<KpiValueSeries, ApiError>;

    /// Alerts raised inside a date window.
    async fn fetch_alerts(&self, range: DateRange) -> Result<Vec<Alert>, ApiError>;

    /// Submit a free-text question to the AI endpoint.
    async fn submit_query(&self, query: &str) -> Result<AiResponse, ApiError>;
}
