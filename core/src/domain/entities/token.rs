//! Token entities for bearer-token authentication.

use serde::{Deserialize, Serialize};

use super::principal::Authority;

/// Grant type label reported alongside every token pair
pub const GRANT_TYPE: &str = "Bearer";

/// Prefix carried by every issued token string
pub const BEARER_PREFIX: &str = "Bearer ";

/// Custom claim holding the comma-joined authorities
pub const AUTHORITIES_CLAIM: &str = "auth";

/// Separator used when joining authorities into the `auth` claim
pub const AUTHORITY_DELIMITER: char = ',';

/// Default lifetime of both access and refresh tokens (24 hours)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Claims structure for the JWT payload
///
/// Access tokens carry `sub`, `auth` and `exp`; refresh tokens carry only `exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Comma-joined authorities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for an access token
    ///
    /// # Arguments
    ///
    /// * `subject` - The principal's identifier, embedded as given
    /// * `authorities` - Authorities joined into the `auth` claim
    /// * `exp` - Expiration timestamp
    pub fn new_access_token(subject: &str, authorities: &[Authority], exp: i64) -> Self {
        Self {
            sub: Some(subject.to_string()),
            auth: Some(join_authorities(authorities)),
            exp,
        }
    }

    /// Creates claims for a refresh token, which carries nothing but its expiry
    pub fn new_refresh_token(exp: i64) -> Self {
        Self {
            sub: None,
            auth: None,
            exp,
        }
    }

    /// Splits the `auth` claim back into authorities
    ///
    /// Returns `None` when the claim is absent. An empty claim yields no
    /// authorities rather than a single empty one.
    pub fn authorities(&self) -> Option<Vec<Authority>> {
        self.auth.as_deref().map(split_authorities)
    }
}

/// Joins authorities into the `auth` claim value
pub fn join_authorities(authorities: &[Authority]) -> String {
    authorities
        .iter()
        .map(Authority::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits an `auth` claim value into authorities
pub fn split_authorities(claim: &str) -> Vec<Authority> {
    if claim.is_empty() {
        return Vec::new();
    }
    claim.split(AUTHORITY_DELIMITER).map(Authority::from).collect()
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Always `"Bearer"`
    pub grant_type: String,

    /// `"Bearer "` followed by the compact access JWT
    pub access_token: String,

    /// `"Bearer "` followed by the compact refresh JWT
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair from two compact JWTs, applying the bearer prefix
    pub fn new(access_jwt: &str, refresh_jwt: &str) -> Self {
        Self {
            grant_type: GRANT_TYPE.to_string(),
            access_token: format!("{}{}", BEARER_PREFIX, access_jwt),
            refresh_token: format!("{}{}", BEARER_PREFIX, refresh_jwt),
        }
    }

    /// The access token without its bearer prefix
    pub fn access_jwt(&self) -> &str {
        strip_bearer_prefix(&self.access_token)
    }

    /// The refresh token without its bearer prefix
    pub fn refresh_jwt(&self) -> &str {
        strip_bearer_prefix(&self.refresh_token)
    }
}

/// Removes a leading `"Bearer "` if present
pub fn strip_bearer_prefix(token: &str) -> &str {
    token.strip_prefix(BEARER_PREFIX).unwrap_or(token)
}
