// HTTP backend implementation - shared request/response pipeline
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::application::error::ApiError;
use crate::application::kpi_backend::{KpiBackend, ValuesQuery};
use crate::domain::ai_query::AiResponse;
use crate::domain::alert::Alert;
use crate::domain::kpi::{KpiDefinition, KpiValueSeries, MachineList};
use crate::domain::period::DateRange;
use crate::domain::user::UserInfo;
use crate::infrastructure::config::BackendSettings;
use crate::infrastructure::notifications::{NotificationChannel, REQUEST_FAILED};
use crate::infrastructure::session::SessionStore;

/// One shared `reqwest` client bound to the configured base URL. Every
/// request goes through the same pipeline: credential injection on the way
/// out, payload unwrapping and failure notification on the way back. No
/// retries; a single best-effort attempt per call.
#[derive(Debug, Clone)]
pub struct HttpKpiBackend {
    client: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    notifications: NotificationChannel,
}

impl HttpKpiBackend {
    pub fn new(
        settings: &BackendSettings,
        session: Arc<SessionStore>,
        notifications: NotificationChannel,
    ) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            session,
            notifications,
        })
    }

    /// Build a request against the base URL with the stored credential, if
    /// any, attached verbatim as the Authorization value. The backend
    /// issues credentials already carrying their scheme prefix, so no
    /// normalization happens here.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(credential) = self.session.get() {
            request = request.header(header::AUTHORIZATION, credential);
        }
        request
    }

    /// Send a request and unwrap the payload. Callers only ever see the
    /// deserialized body; transport metadata stops here. All failures are
    /// logged, published on the notification channel, and re-raised.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("request failed: {e}");
                self.notifications.publish(REQUEST_FAILED, e.to_string());
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("backend returned {status}: {body}");
            if status == StatusCode::UNAUTHORIZED {
                self.session.clear();
            }
            self.notifications
                .publish(REQUEST_FAILED, format!("{status}: {body}"));
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        match response.json::<T>().await {
            Ok(payload) => Ok(payload),
            Err(e) => {
                tracing::error!("failed to decode response: {e}");
                self.notifications.publish(REQUEST_FAILED, e.to_string());
                Err(ApiError::Transport(e))
            }
        }
    }
}

#[async_trait]
impl KpiBackend for HttpKpiBackend {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let request = self
            .request(Method::POST, "/user/login")
            .header("username", username)
            .header("password", password);
        self.execute(request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let _ack: String = self.execute(self.request(Method::GET, "/user/logout")).await?;
        Ok(())
    }

    async fn fetch_current_user(&self) -> Result<UserInfo, ApiError> {
        self.execute(self.request(Method::GET, "/user")).await
    }

    async fn fetch_kpis(&self) -> Result<Vec<KpiDefinition>, ApiError> {
        self.execute(self.request(Method::GET, "/KPI")).await
    }

    async fn fetch_kpi(&self, kpi_id: &str) -> Result<KpiDefinition, ApiError> {
        let path = format!("/KPI/{}", urlencoding::encode(kpi_id));
        self.execute(self.request(Method::GET, &path)).await
    }

    async fn fetch_machines(&self, kpi_id: &str) -> Result<MachineList, ApiError> {
        let path = format!("/KPI/{}/machines", urlencoding::encode(kpi_id));
        self.execute(self.request(Method::GET, &path)).await
    }

    async fn fetch_values(
        &self,
        kpi_id: &str,
        machine_id: i64,
        query: &ValuesQuery,
    ) -> Result<KpiValueSeries, ApiError> {
        let path = format!("/KPI/{}/{}/values", urlencoding::encode(kpi_id), machine_id);
        let request = self.request(Method::GET, &path).query(&[
            ("startDate", query.range.start.to_string()),
            ("endDate", query.range.end.to_string()),
            ("aggregationOp", query.op.as_str().to_string()),
            ("aggregationInterval", query.interval.as_str().to_string()),
        ]);
        self.execute(request).await
    }

    async fn fetch_alerts(&self, range: DateRange) -> Result<Vec<Alert>, ApiError> {
        let request = self.request(Method::GET, "/alert").query(&[
            ("startDate", range.start.to_string()),
            ("endDate", range.end.to_string()),
        ]);
        self.execute(request).await
    }

    async fn submit_query(&self, query: &str) -> Result<AiResponse, ApiError> {
        let request = self
            .request(Method::POST, "/ai-query")
            .header("query", query);
        self.execute(request).await
    }
}
