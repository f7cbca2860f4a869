use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_API_BASE_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|flag| flag.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Base URL of the REST API, without trailing slash
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Maximum log level handed to the console logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
