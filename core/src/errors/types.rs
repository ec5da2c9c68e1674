//! Token-related error types

use thiserror::Error;

/// Errors raised while building keys, issuing tokens, or reading them back
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Unsupported token")]
    UnsupportedToken,

    #[error("Token string is empty")]
    EmptyToken,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Signing secret is not valid base64")]
    InvalidSecretEncoding,

    #[error("Signing key is too weak: {bits} bits, HS256 requires at least 256")]
    WeakKey { bits: usize },

    #[error("Key error: {message}")]
    KeyError { message: String },
}

impl TokenError {
    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::UnsupportedToken => "UNSUPPORTED_TOKEN",
            TokenError::EmptyToken => "EMPTY_TOKEN",
            TokenError::TokenNotYetValid => "TOKEN_NOT_YET_VALID",
            TokenError::MissingClaim { .. } => "MISSING_CLAIM",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
            TokenError::InvalidSecretEncoding => "INVALID_SECRET_ENCODING",
            TokenError::WeakKey { .. } => "WEAK_KEY",
            TokenError::KeyError { .. } => "KEY_ERROR",
        }
    }

    /// Maps a codec failure onto the token error it represents
    pub(crate) fn from_jwt(error: &jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match error.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::ExpiredSignature => TokenError::TokenExpired,
            ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenError::InvalidTokenFormat,
            ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
                claim: claim.clone(),
            },
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => TokenError::UnsupportedToken,
            other => TokenError::KeyError {
                message: format!("{:?}", other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TokenError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(
            TokenError::MissingClaim { claim: "auth".to_string() }.error_code(),
            "MISSING_CLAIM"
        );
        assert_eq!(TokenError::WeakKey { bits: 128 }.error_code(), "WEAK_KEY");
    }

    #[test]
    fn test_error_messages() {
        let error = TokenError::MissingClaim { claim: "auth".to_string() };
        assert_eq!(error.to_string(), "Missing required claim: auth");

        let error = TokenError::WeakKey { bits: 128 };
        assert!(error.to_string().contains("128 bits"));
    }

    #[test]
    fn test_from_jwt_error_kinds() {
        use jsonwebtoken::errors::{Error, ErrorKind};

        let expired: Error = ErrorKind::ExpiredSignature.into();
        assert_eq!(TokenError::from_jwt(&expired), TokenError::TokenExpired);

        let malformed: Error = ErrorKind::InvalidToken.into();
        assert_eq!(TokenError::from_jwt(&malformed), TokenError::InvalidTokenFormat);

        let algorithm: Error = ErrorKind::InvalidAlgorithm.into();
        assert_eq!(TokenError::from_jwt(&algorithm), TokenError::UnsupportedToken);

        let immature: Error = ErrorKind::ImmatureSignature.into();
        assert_eq!(TokenError::from_jwt(&immature), TokenError::TokenNotYetValid);
    }
}
