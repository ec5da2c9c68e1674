//! Configuration for the token provider

use jl_shared::JwtConfig;

use crate::domain::entities::token::DEFAULT_TOKEN_EXPIRY_SECONDS;

/// Configuration for the token provider
#[derive(Debug, Clone)]
pub struct TokenProviderConfig {
    /// Base64-encoded HMAC signing secret
    pub secret: String,
    /// Access token expiry in seconds
    pub access_token_expiry_seconds: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry_seconds: i64,
}

impl TokenProviderConfig {
    /// Creates a configuration with the default 24 hour expiry for both tokens
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
            refresh_token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }

    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry_seconds = seconds;
        self
    }

    pub fn with_refresh_expiry_seconds(mut self, seconds: i64) -> Self {
        self.refresh_token_expiry_seconds = seconds;
        self
    }
}

impl From<&JwtConfig> for TokenProviderConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            access_token_expiry_seconds: config.access_token_expiry,
            refresh_token_expiry_seconds: config.refresh_token_expiry,
        }
    }
}
