//! Principal descriptors handed to the token provider by user-detail loaders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A granted authority such as `ROLE_USER`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(String);

impl Authority {
    pub fn new(authority: impl Into<String>) -> Self {
        Self(authority.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Authority {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Authority {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can describe an authenticated principal
///
/// Implemented by whatever the user-detail loader produces, so the token
/// provider never depends on how users are stored.
pub trait PrincipalDescriptor {
    /// Subject identifier (username)
    fn username(&self) -> &str;

    /// Authorities in their granted order
    fn authorities(&self) -> &[Authority];
}

/// Plain principal value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub username: String,
    pub authorities: Vec<Authority>,
}

impl Principal {
    /// Creates a principal from a username and authority strings
    pub fn new<I, A>(username: impl Into<String>, authorities: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Authority>,
    {
        Self {
            username: username.into(),
            authorities: authorities.into_iter().map(Into::into).collect(),
        }
    }
}

impl PrincipalDescriptor for Principal {
    fn username(&self) -> &str {
        &self.username
    }

    fn authorities(&self) -> &[Authority] {
        &self.authorities
    }
}
