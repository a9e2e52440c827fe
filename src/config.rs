use serde::{Deserialize, Serialize};
use crate::utils::DEFAULT_TOAST_SECONDS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub graphql_url_development: String,
    pub graphql_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Confirm a stored session with `getAuth` before showing protected pages
    pub revalidate_session: bool,
    pub toast_duration_seconds: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_url_development: "http://localhost:4000/graphql".to_string(),
            graphql_url_production: "https://api.courier.example.com/graphql".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            revalidate_session: true,
            toast_duration_seconds: DEFAULT_TOAST_SECONDS,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            graphql_url_development: option_env!("GRAPHQL_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.graphql_url_development),
            graphql_url_production: option_env!("GRAPHQL_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.graphql_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            revalidate_session: option_env!("REVALIDATE_SESSION")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.revalidate_session),
            toast_duration_seconds: option_env!("TOAST_DURATION_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_seconds),
        }
    }

    /// GraphQL endpoint for the current environment
    pub fn graphql_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.graphql_url_production,
            _ => &self.graphql_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.is_logging_enabled() {
            log::Level::Debug
        } else {
            log::Level::Error
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.graphql_url(), "http://localhost:4000/graphql");

        config.environment = "production".to_string();
        assert_eq!(config.graphql_url(), "https://api.courier.example.com/graphql");

        config.environment = "staging".to_string();
        assert_eq!(config.graphql_url(), config.graphql_url_development);
    }

    #[test]
    fn disabled_logging_keeps_errors_only() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
