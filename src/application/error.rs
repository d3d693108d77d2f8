// Unified failure taxonomy for every facade operation
use crate::domain::period::InvalidPeriod;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network-level failure: unreachable backend, timeout, or a response
    /// body that does not decode into the declared shape.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Caller input named a period outside the operation's valid set.
    /// Raised before any network activity.
    #[error(transparent)]
    InvalidPeriod(#[from] InvalidPeriod),

    /// The backend returned zero aggregation buckets where exactly one
    /// reading was requested.
    #[error("no aggregated value for KPI {kpi} on machine {machine}")]
    EmptyValueSeries { kpi: String, machine: i64 },

    /// The HTTP client could not be constructed from the configuration.
    #[error("client configuration error: {0}")]
    Config(String),
}
