//! Tagged outcomes of reading a token back.

use crate::domain::entities::token::Claims;
use crate::errors::DomainError;

/// Claims recovered from a token whose signature and structure verified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedClaims {
    /// Signature valid and not yet expired
    Fresh(Claims),
    /// Signature valid but past its expiry; claims are still readable
    Expired(Claims),
}

impl ParsedClaims {
    pub fn claims(&self) -> &Claims {
        match self {
            ParsedClaims::Fresh(claims) | ParsedClaims::Expired(claims) => claims,
        }
    }

    pub fn into_claims(self) -> Claims {
        match self {
            ParsedClaims::Fresh(claims) | ParsedClaims::Expired(claims) => claims,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, ParsedClaims::Expired(_))
    }
}

/// The four reasons an untrusted token is turned away without a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Bad signature or malformed structure
    Invalid,
    /// Past its expiry
    Expired,
    /// Unsupported algorithm or token structure
    Unsupported,
    /// Empty or blank token string
    Empty,
}

impl TokenRejection {
    /// Log line used when a token is rejected
    pub fn message(&self) -> &'static str {
        match self {
            TokenRejection::Invalid => "Invalid JWT token",
            TokenRejection::Expired => "Expired JWT token",
            TokenRejection::Unsupported => "Unsupported JWT token",
            TokenRejection::Empty => "JWT claims string is empty",
        }
    }
}

/// Result of a strict validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    Rejected(TokenRejection),
    /// Anything outside the four rejection classes
    Fault(DomainError),
}
