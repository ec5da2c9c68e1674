//! Shared configuration types for the jwtlogin server
//!
//! This crate provides the configuration used across all server modules:
//! - JWT signing secret and token lifetimes
//! - Environment detection and logging defaults
//! - HTTP server binding

pub mod config;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, JwtConfig, LoggingConfig, ServerConfig};
