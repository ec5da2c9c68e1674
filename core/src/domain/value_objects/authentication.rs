//! Authentication context reconstructed from a verified access token.

use serde::Serialize;

use crate::domain::entities::principal::Authority;

/// Principal rebuilt from token claims
///
/// The stored credential is always empty: tokens never carry passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub username: String,
    #[serde(skip)]
    pub password: String,
    pub authorities: Vec<Authority>,
}

/// Authentication context consumed by the request layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticationContext {
    /// The reconstructed principal
    pub principal: AuthenticatedUser,
    /// Credential placeholder, always empty
    #[serde(skip)]
    pub credentials: String,
    /// Same authority set as the principal's
    pub authorities: Vec<Authority>,
}

impl AuthenticationContext {
    /// Creates an authenticated context for `username` with `authorities`
    pub fn new(username: impl Into<String>, authorities: Vec<Authority>) -> Self {
        Self {
            principal: AuthenticatedUser {
                username: username.into(),
                password: String::new(),
                authorities: authorities.clone(),
            },
            credentials: String::new(),
            authorities,
        }
    }

    /// Subject of the token
    pub fn name(&self) -> &str {
        &self.principal.username
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a.as_str() == authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_mirrors_authorities() {
        let context = AuthenticationContext::new("alice", vec![Authority::from("ROLE_USER")]);

        assert_eq!(context.name(), "alice");
        assert_eq!(context.principal.authorities, context.authorities);
        assert!(context.principal.password.is_empty());
        assert!(context.credentials.is_empty());
        assert!(context.has_authority("ROLE_USER"));
        assert!(!context.has_authority("ROLE_ADMIN"));
    }

    #[test]
    fn test_context_serialization_omits_credentials() {
        let context = AuthenticationContext::new("alice", vec![Authority::from("ROLE_USER")]);
        let json = serde_json::to_value(&context).unwrap();

        assert_eq!(json["principal"]["username"], "alice");
        assert!(json.get("credentials").is_none());
        assert!(json["principal"].get("password").is_none());
    }
}
