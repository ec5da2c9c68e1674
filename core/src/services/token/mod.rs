//! Token provider module
//!
//! This module handles all bearer-token operations:
//! - Signing access and refresh tokens with HMAC-SHA256
//! - Rebuilding an authentication context from an access token
//! - Validating untrusted token strings

mod config;
mod outcome;
mod provider;

#[cfg(test)]
mod tests;

pub use config::TokenProviderConfig;
pub use outcome::{TokenRejection, TokenStatus};
pub use provider::{TokenProvider, MIN_SECRET_BYTES};
