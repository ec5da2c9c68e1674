//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! validates it with the core `TokenProvider`, rebuilds the authentication
//! context and injects it into the request extensions.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use jl_core::domain::entities::token::BEARER_PREFIX;
use jl_core::{AuthenticationContext, TokenProvider};
use log::{debug, warn};
use serde::Serialize;
use std::{
    future::{ready, Ready},
    ops::Deref,
    rc::Rc,
    sync::Arc,
};

/// Authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext(pub AuthenticationContext);

impl Deref for AuthContext {
    type Target = AuthenticationContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JSON body returned when a request is turned away
#[derive(Debug, Serialize)]
pub struct AuthErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    provider: Arc<TokenProvider>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware backed by `provider`
    pub fn new(provider: Arc<TokenProvider>) -> Self {
        Self { provider }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            provider: Arc::clone(&self.provider),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    provider: Arc<TokenProvider>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let provider = Arc::clone(&self.provider);

        Box::pin(async move {
            let context = match authenticate_request(&req, &provider) {
                Ok(context) => context,
                Err(body) => {
                    let response = HttpResponse::Unauthorized().json(body);
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext(context));

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Runs the validation tier, then the authentication tier
fn authenticate_request(
    req: &ServiceRequest,
    provider: &TokenProvider,
) -> Result<AuthenticationContext, AuthErrorBody> {
    let token = extract_bearer_token(req).ok_or_else(|| AuthErrorBody {
        error: "MISSING_AUTH_HEADER",
        message: "Missing or invalid Authorization header".to_string(),
    })?;

    match provider.is_valid(&token) {
        Ok(true) => {}
        Ok(false) => {
            return Err(AuthErrorBody {
                error: "INVALID_TOKEN",
                message: "Invalid or expired token".to_string(),
            })
        }
        Err(e) => {
            warn!("Token validation fault on {}: {}", req.path(), e);
            return Err(AuthErrorBody {
                error: e.error_code(),
                message: e.to_string(),
            });
        }
    }

    let context = provider.authenticate(&token).map_err(|e| {
        warn!("Token authentication failed on {}: {}", req.path(), e);
        AuthErrorBody {
            error: e.error_code(),
            message: e.to_string(),
        }
    })?;

    debug!("Authenticated {} for {}", context.name(), req.path());
    Ok(context)
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}
