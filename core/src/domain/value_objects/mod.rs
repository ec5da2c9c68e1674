//! Value objects representing immutable domain concepts.

pub mod authentication;

pub use authentication::{AuthenticatedUser, AuthenticationContext};
