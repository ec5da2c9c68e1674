//! Configuration module
//!
//! - `auth` - JWT secret and token lifetime configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server binding configuration

pub mod auth;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::JwtConfig;
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            jwt: JwtConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Production deployments must not run on the built-in development secret
    pub fn has_insecure_secret(&self) -> bool {
        self.environment.is_production() && self.jwt.is_using_default_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.has_insecure_secret());
    }

    #[test]
    fn test_insecure_secret_in_production() {
        let mut config = AppConfig::default();
        config.environment = Environment::Production;
        assert!(config.has_insecure_secret());

        config.jwt = JwtConfig::new("c29tZS1vdGhlci1zZWNyZXQtdGhhdC1pcy1sb25nLWVub3VnaA==");
        assert!(!config.has_insecure_secret());
    }
}
