use jl_shared::{AppConfig, Environment};

/// Loads `.env` and the environment-specific `.env.*` file, then reads the
/// application configuration from the process environment.
pub fn load() -> AppConfig {
    dotenvy::dotenv().ok();
    dotenvy::from_filename(Environment::from_env().env_file()).ok();

    AppConfig::from_env()
}
