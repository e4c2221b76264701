//! Global application error types and handlers.
//!
//! This module defines the error taxonomy shared across the backend. Each
//! variant maps onto exactly one class of HTTP response (see
//! `api::common`): 422 for schema violations, 401 for authentication
//! failures, 404 for missing entities, and 500 for everything unexpected.

use thiserror::Error;

/// Generic service error used across all request paths.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Schema constraint violation on a request payload.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Bad credentials or an invalid/expired token. The message is kept
    /// uniform so responses do not leak which check failed.
    #[error("{message}")]
    Unauthorized { message: String },

    /// Lookup of an entity that does not exist.
    #[error("{entity} with ID {identifier} not found")]
    NotFound { entity: String, identifier: String },

    /// Unexpected failure; full detail is logged server-side only.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
