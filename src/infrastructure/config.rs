use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub backend: BackendSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    /// Backend origin, e.g. "https://kpi.example.com". In development this
    /// is the reverse proxy in front of the real backend.
    pub base_url: String,
    /// Skip TLS certificate verification. Off unless the configuration
    /// explicitly opts in for a dev proxy with self-signed certificates.
    #[serde(default)]
    pub accept_invalid_certs: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

pub fn load_client_config() -> anyhow::Result<ClientConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/backend"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
