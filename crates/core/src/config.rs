use crate::models::ClassifierKind;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_INTENT_UPSTREAM: &str = "https://DanishCodes-CVNLAIINTENT.hf.space/predict";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub icons: IconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub intent_upstream_url: String,
    /// `0` disables the timeout.
    pub request_timeout_secs: u64,
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            intent_upstream_url: DEFAULT_INTENT_UPSTREAM.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    pub fn timeout(&self) -> Option<Duration> {
        timeout_from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub endpoints: EndpointConfig,
    /// `0` disables the timeout.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: format!("http://localhost:{DEFAULT_PORT}"),
            endpoints: EndpointConfig::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        timeout_from_secs(self.request_timeout_secs)
    }

    pub fn endpoint_url(&self, kind: ClassifierKind) -> String {
        let path = self.endpoints.path(kind);
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Endpoint paths relative to `ClientConfig::base_url`, or absolute URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub image: String,
    pub intent: String,
    pub emotion: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            image: "/predict/aircraft".to_string(),
            intent: "/api/predict/intent".to_string(),
            emotion: "/predict/emotion".to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn path(&self, kind: ClassifierKind) -> &str {
        match kind {
            ClassifierKind::Image => &self.image,
            ClassifierKind::IntentText => &self.intent,
            ClassifierKind::EmotionText => &self.emotion,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// TOML file replacing the emotion icon rules.
    pub rules_path: Option<String>,
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Loads configuration from an optional file, `GATEWAY_*` variables and `PORT`.
pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    settings = settings.add_source(
        config::Environment::with_prefix("GATEWAY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );
    let cfg = settings.build()?;
    let mut app: AppConfig = cfg.try_deserialize()?;

    if let Ok(port) = std::env::var("PORT") {
        app.server.port = port
            .trim()
            .parse()
            .with_context(|| format!("invalid PORT value {port:?}"))?;
    }
    Ok(app)
}
