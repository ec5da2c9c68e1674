use std::sync::Arc;

use actix_web::{middleware::Logger, App, HttpServer};
use jl_api::{app, config};
use jl_core::TokenProvider;
use log::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = config::load();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting jwtlogin API server ({})", config.environment);

    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set, using the development secret");
    }
    if config.has_insecure_secret() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "refusing to start in production with the development JWT secret",
        ));
    }

    // Fail fast on a malformed or weak secret
    let provider = TokenProvider::from_config(&config.jwt)
        .map(Arc::new)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(app::configure(Arc::clone(&provider)))
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
