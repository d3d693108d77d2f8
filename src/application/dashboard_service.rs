// Dashboard service - Typed facade over the KPI backend
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::application::error::ApiError;
use crate::application::kpi_backend::{KpiBackend, ValuesQuery};
use crate::domain::ai_query::AiResponse;
use crate::domain::alert::Alert;
use crate::domain::kpi::{KpiDefinition, KpiValuePoint, KpiValueSeries, MachineList};
use crate::domain::period::{
    AggregationInterval, AggregationOp, AggregationPeriod, AlertPeriod, HistoryPeriod,
};
use crate::domain::user::UserInfo;
use crate::infrastructure::session::SessionStore;

/// One operation per backend capability. Periods are mapped to concrete
/// date windows here, so callers never deal with wire parameters.
#[derive(Clone)]
pub struct DashboardService {
    backend: Arc<dyn KpiBackend>,
    session: Arc<SessionStore>,
}

impl DashboardService {
    pub fn new(backend: Arc<dyn KpiBackend>, session: Arc<SessionStore>) -> Self {
        Self { backend, session }
    }

    /// Authenticate and persist the returned credential in the session.
    /// On failure nothing is persisted and the error is surfaced like any
    /// other operation's.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let credential = self.backend.login(username, password).await?;
        self.session.set(credential.clone());
        Ok(credential)
    }

    /// Log out on the backend and drop the local credential. The session
    /// is cleared even when the backend call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.backend.logout().await;
        self.session.clear();
        result
    }

    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.backend.fetch_current_user().await
    }

    pub async fn kpis(&self) -> Result<Vec<KpiDefinition>, ApiError> {
        self.backend.fetch_kpis().await
    }

    pub async fn kpi(&self, kpi_id: &str) -> Result<KpiDefinition, ApiError> {
        self.backend.fetch_kpi(kpi_id).await
    }

    pub async fn machines_for_kpi(&self, kpi_id: &str) -> Result<MachineList, ApiError> {
        self.backend.fetch_machines(kpi_id).await
    }

    /// KPI values of one machine over the selected period, aggregated as
    /// daily averages.
    pub async fn value_history(
        &self,
        kpi_id: &str,
        machine_id: i64,
        period: HistoryPeriod,
    ) -> Result<KpiValueSeries, ApiError> {
        let query = ValuesQuery {
            range: period.date_range(Self::today()),
            op: AggregationOp::Avg,
            interval: AggregationInterval::Day,
        };
        self.backend.fetch_values(kpi_id, machine_id, &query).await
    }

    /// Single averaged KPI reading over the selected period. The window
    /// covers one aggregation interval and the first bucket is returned;
    /// an empty series is a defined error, not a panic.
    pub async fn aggregated_value(
        &self,
        kpi_id: &str,
        machine_id: i64,
        period: AggregationPeriod,
    ) -> Result<KpiValuePoint, ApiError> {
        let query = ValuesQuery {
            range: period.date_range(Self::today()),
            op: AggregationOp::Avg,
            interval: period.interval(),
        };
        let series = self.backend.fetch_values(kpi_id, machine_id, &query).await?;
        series
            .values
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::EmptyValueSeries {
                kpi: kpi_id.to_string(),
                machine: machine_id,
            })
    }

    pub async fn alerts(&self, period: AlertPeriod) -> Result<Vec<Alert>, ApiError> {
        self.backend.fetch_alerts(period.date_range(Self::today())).await
    }

    pub async fn submit_query(&self, query: &str) -> Result<AiResponse, ApiError> {
        self.backend.submit_query(query).await
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }
}
