use serde::{Deserialize, Serialize};

/// Fallback gateway address when neither the CLI, the environment, nor the
/// config file names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the config file's gateway address.
pub const API_URL_ENV: &str = "ATLAS_API_URL";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Remote data gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
