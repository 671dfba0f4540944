use serde::Deserialize;
use std::time::Duration;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_REFRESH_SECS: u64 = 300;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub api: ApiSettings,
    pub refresh: RefreshSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    /// Forwarded as `?limit=` on the daily request; the API picks its own default when unset.
    #[serde(default)]
    pub daily_limit: Option<u32>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    pub interval_secs: u64,
}

impl ApiSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Defaults, then `config/dashboard.*` if present, then `AQ_DASHBOARD__*` env vars.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("AQ_DASHBOARD")
                .prefix_separator("__")
                .separator("__"),
        );

    build_config(builder)
}

fn build_config(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<DashboardConfig> {
    let settings = with_defaults(builder)?.build()?;
    let mut config: DashboardConfig = settings.try_deserialize()?;

    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    if config.refresh.interval_secs == 0 {
        anyhow::bail!("refresh.interval_secs must be greater than zero");
    }

    Ok(config)
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(builder
        .set_default("server.listen_addr", DEFAULT_LISTEN_ADDR)?
        .set_default("api.base_url", DEFAULT_API_BASE)?
        .set_default("refresh.interval_secs", DEFAULT_REFRESH_SECS)?)
}
