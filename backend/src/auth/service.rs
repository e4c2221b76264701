//! Core business logic for the authentication system.

use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};
use validator::Validate;

use crate::api::common::validation_errors_to_message;
use crate::auth::credentials::CredentialStore;
use crate::auth::models::{LoginRequest, Token};
use crate::errors::{ServiceError, ServiceResult};
use crate::utils::jwt::JwtUtils;

/// Authentication service handling login and token issuance.
pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    jwt_utils: Arc<JwtUtils>,
    token_ttl: Duration,
}

impl AuthService {
    /// Create a new AuthService instance.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        jwt_utils: Arc<JwtUtils>,
        token_ttl_minutes: i64,
    ) -> Self {
        AuthService {
            credentials,
            jwt_utils,
            token_ttl: Duration::minutes(token_ttl_minutes),
        }
    }

    /// Authenticate the user and issue a bearer token.
    ///
    /// An unknown username and a mismatched password produce the identical
    /// error so the response content cannot be used to enumerate users.
    /// Response timing is not equalized.
    pub fn login(&self, request: LoginRequest) -> ServiceResult<Token> {
        if let Err(validation_errors) = request.validate() {
            return Err(ServiceError::validation(validation_errors_to_message(
                validation_errors,
            )));
        }

        if !self.credentials.verify(&request.username, &request.password) {
            warn!("Failed login attempt for user: {}", request.username);
            return Err(ServiceError::unauthorized("Invalid username or password"));
        }

        let access_token = self
            .jwt_utils
            .generate_token(&request.username, self.token_ttl)?;

        info!("User logged in successfully: {}", request.username);
        Ok(Token::bearer(access_token))
    }
}
