use crate::error::StudioResult;
use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `MARKETING_STUDIO__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub studio: StudioConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

/// Dashboard presentation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StudioConfig {
    /// `light` or `dark`; requests may override per page.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// JSON catalog to serve instead of the built-in fixtures.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

// Default functions
fn default_node_id() -> String {
    "studio-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_metrics_enabled() -> bool {
    true
}
fn default_metrics_port() -> u16 {
    9091
}
fn default_theme() -> String {
    "light".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            port: default_metrics_port(),
        }
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            catalog_path: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            studio: StudioConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    /// Variables use the prefix `MARKETING_STUDIO` with `__` as separator.
    /// Example: `MARKETING_STUDIO__API__HTTP_PORT=8080`
    pub fn load() -> StudioResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("MARKETING_STUDIO")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
