//! Token provider test suites


use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::services::token::{TokenProvider, TokenProviderConfig};

pub(super) const TEST_SECRET: &[u8] = b"test-secret-key-that-is-long-enough-for-hs256";
pub(super) const FOREIGN_SECRET: &[u8] = b"another-secret-key-that-is-long-enough-too";

pub(super) fn create_test_provider() -> TokenProvider {
    TokenProvider::new(TokenProviderConfig::new(STANDARD.encode(TEST_SECRET)))
        .expect("Failed to create token provider")
}

/// Signs arbitrary claims directly with the codec, bypassing the provider
pub(super) fn sign_with(secret: &[u8], algorithm: Algorithm, claims: &impl Serialize) -> String {
    encode(&Header::new(algorithm), claims, &EncodingKey::from_secret(secret))
        .expect("Failed to sign test token")
}
