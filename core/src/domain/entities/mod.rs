//! Domain entities representing core business objects.

pub mod principal;
pub mod token;

// Re-export commonly used types
pub use principal::{Authority, Principal, PrincipalDescriptor};
pub use token::{
    Claims, TokenPair,
    AUTHORITIES_CLAIM, BEARER_PREFIX, DEFAULT_TOKEN_EXPIRY_SECONDS, GRANT_TYPE,
};
