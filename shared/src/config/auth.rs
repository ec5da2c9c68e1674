//! JWT authentication configuration

use serde::{Deserialize, Serialize};

/// Development-only secret (base64 of a 46-byte ASCII string)
const DEFAULT_SECRET: &str = "ZGV2ZWxvcG1lbnQtc2VjcmV0LXBsZWFzZS1jaGFuZ2UtaW4tcHJvZHVjdGlvbg==";

/// 24 hours, shared by both token kinds
const DEFAULT_TOKEN_EXPIRY: i64 = 86_400;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Base64-encoded HMAC signing secret
    pub secret: String,

    /// Access token expiry time in seconds
    #[serde(default = "default_token_expiry")]
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    #[serde(default = "default_token_expiry")]
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: DEFAULT_TOKEN_EXPIRY,
            refresh_token_expiry: DEFAULT_TOKEN_EXPIRY,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a base64-encoded secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_SECRET`, `JWT_ACCESS_TOKEN_EXPIRY` and `JWT_REFRESH_TOKEN_EXPIRY`.
    /// Missing or unparsable expiry values fall back to 24 hours.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY);

        Self {
            secret,
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    /// Set access token expiry in hours
    pub fn with_access_expiry_hours(mut self, hours: i64) -> Self {
        self.access_token_expiry = hours.saturating_mul(3600);
        self
    }

    /// Set refresh token expiry in hours
    pub fn with_refresh_expiry_hours(mut self, hours: i64) -> Self {
        self.refresh_token_expiry = hours.saturating_mul(3600);
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_token_expiry() -> i64 {
    DEFAULT_TOKEN_EXPIRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 86_400);
        assert_eq!(config.refresh_token_expiry, 86_400);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("bXktc2VjcmV0")
            .with_access_expiry_hours(1)
            .with_refresh_expiry_hours(24 * 14);

        assert_eq!(config.access_token_expiry, 3600);
        assert_eq!(config.refresh_token_expiry, 1_209_600);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_expiry_hours_saturate() {
        let config = JwtConfig::new("bXktc2VjcmV0")
            .with_access_expiry_hours(i64::MAX)
            .with_refresh_expiry_hours(i64::MIN);

        assert_eq!(config.access_token_expiry, i64::MAX);
        assert_eq!(config.refresh_token_expiry, i64::MIN);
    }

    #[test]
    fn test_jwt_config_deserialize_with_defaults() {
        let config: JwtConfig = serde_json::from_str(r#"{"secret":"c2VjcmV0"}"#).unwrap();
        assert_eq!(config.secret, "c2VjcmV0");
        assert_eq!(config.access_token_expiry, 86_400);
        assert_eq!(config.refresh_token_expiry, 86_400);
    }
}
