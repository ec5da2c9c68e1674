//! # jwtlogin Core
//!
//! Token lifecycle for bearer-token authentication: issuing signed access and
//! refresh tokens, rebuilding an authentication context from an access token,
//! and validating untrusted token strings.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Authority, Claims, Principal, PrincipalDescriptor, TokenPair};
pub use domain::value_objects::{AuthenticatedUser, AuthenticationContext};
pub use errors::{DomainError, DomainResult, TokenError};
pub use services::token::{
    TokenProvider, TokenProviderConfig, TokenRejection, TokenStatus,
};
