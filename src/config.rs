use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Process settings read from the environment (and `.env` when present)
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub redis_url: Option<String>,
    #[serde(default)]
    pub player_catalog_path: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn database_url(&self) -> Option<&str> {
        non_empty(&self.database_url)
    }

    pub fn redis_url(&self) -> Option<&str> {
        non_empty(&self.redis_url)
    }

    pub fn player_catalog_path(&self) -> Option<&str> {
        non_empty(&self.player_catalog_path)
    }

    /// Filter directive for tracing-subscriber when RUST_LOG is unset
    pub fn log_filter(&self) -> String {
        match non_empty(&self.log_level) {
            Some(level) => format!("fut_manager={},tower_http={}", level, level),
            None => "fut_manager=debug,tower_http=debug".to_string(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Loads settings from the process environment
pub fn get_config() -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();
    build_settings(Environment::default().try_parsing(true))
}

fn build_settings(environment: Environment) -> Result<Settings, ConfigError> {
    Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8080)?
        .add_source(environment)
        .build()?
        .try_deserialize::<Settings>()
}
