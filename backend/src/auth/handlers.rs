//! Handler functions for authentication-related API endpoints.

use axum::{
    extract::{Extension, Query, rejection::QueryRejection},
    response::Json as ResponseJson,
};

use crate::auth::models::{LoginRequest, Token};
use crate::auth::service::AuthService;
use crate::errors::ServiceError;
use crate::state::AppState;

/// Handle user login request.
///
/// Credentials arrive as query parameters, matching the reference API:
/// `POST /auth/login?username=...&password=...`. A missing or malformed
/// query string is a schema violation (422), same as an empty value.
#[axum::debug_handler]
pub async fn login(
    Extension(state): Extension<AppState>,
    payload: Result<Query<LoginRequest>, QueryRejection>,
) -> Result<ResponseJson<Token>, ServiceError> {
    let Query(payload) = payload.map_err(|e| ServiceError::validation(e.body_text()))?;
    let auth_service = AuthService::new(
        state.credentials.clone(),
        state.jwt_utils.clone(),
        state.config.token_ttl_minutes,
    );

    let token = auth_service.login(payload)?;
    Ok(ResponseJson(token))
}
