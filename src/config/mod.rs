mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, GatewayConfig, API_URL_ENV, DEFAULT_BASE_URL};
