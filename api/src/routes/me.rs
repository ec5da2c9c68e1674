use actix_web::HttpResponse;
use serde::Serialize;

use crate::middleware::auth::AuthContext;

/// Response body for the authenticated principal
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
    pub authorities: Vec<String>,
}

/// Handler for GET /api/me
///
/// Returns the subject and authorities carried by the caller's access token.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid or expired access token
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        username: auth.name().to_string(),
        authorities: auth.authorities.iter().map(ToString::to_string).collect(),
    })
}
