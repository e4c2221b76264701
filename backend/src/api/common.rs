//! Error handling utilities for API responses.
//!
//! Converts service-layer errors into the HTTP responses the API contract
//! promises:
//! - every failure body is `{"detail": <message>}`
//! - 401 responses carry a `WWW-Authenticate: Bearer` challenge
//! - 500 responses hide the failure detail, which is logged server-side
//!
//! Also provides the helper that flattens `validator` errors into a single
//! human-readable message for 422 responses.

use axum::Json;
use axum::http::{StatusCode, header::WWW_AUTHENTICATE};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Error payload returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ServiceError::Validation { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
            }
            ServiceError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message.clone()),
            ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            ServiceError::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorDetail { detail });
        if status == StatusCode::UNAUTHORIZED {
            (status, [(WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

/// Flattens validator errors into a single message for a 422 response.
pub fn validation_errors_to_message(errors: validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                format!(
                    "{}: {}",
                    field,
                    error.message.as_ref().unwrap_or(&"Invalid value".into())
                )
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_401_with_challenge_header() {
        let response = ServiceError::unauthorized("Invalid or expired token").into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let challenge = response.headers().get(WWW_AUTHENTICATE);
        assert_eq!(challenge.unwrap(), "Bearer");
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ServiceError::not_found("Todo", 7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_422() {
        let response = ServiceError::validation("title: too long").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn internal_maps_to_500_without_detail() {
        let response = ServiceError::internal("secret backend state").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
