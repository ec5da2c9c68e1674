//! Route table shared by the server binary and the integration tests

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use jl_core::TokenProvider;

use crate::middleware::auth::JwtAuth;
use crate::routes::{health::health_check, me::me};

/// Registers every route; everything under `/api` requires a bearer token
pub fn configure(provider: Arc<TokenProvider>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.route("/health", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .wrap(JwtAuth::new(provider))
                    .route("/me", web::get().to(me)),
            )
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "not_found",
                    "message": "The requested resource was not found"
                }))
            }));
    }
}
