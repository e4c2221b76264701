//! Middleware for protecting authenticated routes.
//!
//! Validates the bearer token on every request it wraps and makes the
//! decoded claims available to downstream handlers. Rejections are uniform:
//! a missing header, a malformed header, and a bad token all produce the
//! same 401 with a `WWW-Authenticate: Bearer` challenge.

use axum::{
    extract::{Extension, Request},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::ServiceError;
use crate::state::AppState;

/// JWT authentication middleware.
///
/// On success the verified [`crate::utils::jwt::Claims`] are inserted into
/// the request extensions.
pub async fn jwt_auth(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| ServiceError::unauthorized("Invalid or expired token"))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header present but not a bearer token");
        ServiceError::unauthorized("Invalid or expired token")
    })?;

    let claims = state.jwt_utils.validate_token(token)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
