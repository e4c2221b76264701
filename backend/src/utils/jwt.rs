//! JWT token utilities for authentication.
//!
//! Provides token creation and validation for the stateless bearer-token
//! scheme: tokens carry only a subject and an expiry, are signed with the
//! configured shared secret, and are never stored server-side.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};

/// JWT claims carried by every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the authenticated username.
    pub sub: String,
    /// Token expiration timestamp (UTC Unix seconds).
    pub exp: usize,
}

/// JWT token utility for creating and validating tokens.
///
/// Built once at startup from [`Config`] and shared through the application
/// state.
pub struct JwtUtils {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from the application configuration.
    pub fn new(config: &Config) -> ServiceResult<Self> {
        let algorithm = Algorithm::from_str(&config.jwt_algorithm).map_err(|e| {
            ServiceError::internal(format!(
                "Unsupported JWT algorithm '{}': {}",
                config.jwt_algorithm, e
            ))
        })?;

        // Keys are derived from a shared secret, which only works for the
        // HMAC family.
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(ServiceError::internal(format!(
                "JWT algorithm '{}' requires asymmetric keys; only HMAC algorithms are supported",
                config.jwt_algorithm
            )));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        // No clock leeway; validate_token additionally rejects a token at
        // its exact expiry second.
        validation.leeway = 0;

        Ok(JwtUtils {
            algorithm,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Generate a signed token for `subject`, valid for `ttl`.
    pub fn generate_token(&self, subject: &str, ttl: Duration) -> ServiceResult<String> {
        let exp = Utc::now() + ttl;

        let claims = Claims {
            sub: subject.to_string(),
            exp: exp.timestamp() as usize,
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a token, returning its claims.
    ///
    /// All failure modes (bad signature, expired, missing claims, garbage
    /// input) collapse into the same uniform unauthorized error. A token is
    /// already invalid at its expiry instant, not just after it.
    pub fn validate_token(&self, token: &str) -> ServiceResult<Claims> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                warn!("Invalid token: {}", e);
                ServiceError::unauthorized("Invalid or expired token")
            })?;

        // The library's expiry check is exclusive, accepting a token whose
        // exp equals the current second. The contract is inclusive.
        if claims.exp as i64 <= Utc::now().timestamp() {
            warn!("Invalid token: expired at {}", claims.exp);
            return Err(ServiceError::unauthorized("Invalid or expired token"));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            kafka_broker: "localhost:9092".to_string(),
            kafka_topic: "todos".to_string(),
            jwt_secret: "unit-test-secret".to_string(),
            jwt_algorithm: "HS256".to_string(),
            token_ttl_minutes: 30,
            server_port: 0,
            debug: false,
        }
    }

    #[test]
    fn issued_token_verifies_to_subject() {
        let jwt = JwtUtils::new(&test_config()).unwrap();
        let token = jwt.generate_token("admin", Duration::minutes(30)).unwrap();

        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
    }

    #[test]
    fn expired_token_is_rejected() {
        let jwt = JwtUtils::new(&test_config()).unwrap();
        let token = jwt.generate_token("admin", Duration::minutes(-5)).unwrap();

        let result = jwt.validate_token(&token);
        assert!(matches!(result, Err(ServiceError::Unauthorized { .. })));
    }

    #[test]
    fn token_at_its_exact_expiry_instant_is_rejected() {
        let jwt = JwtUtils::new(&test_config()).unwrap();
        let token = jwt.generate_token("admin", Duration::zero()).unwrap();

        let result = jwt.validate_token(&token);
        assert!(matches!(result, Err(ServiceError::Unauthorized { .. })));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let jwt = JwtUtils::new(&test_config()).unwrap();

        let mut other_config = test_config();
        other_config.jwt_secret = "a-different-secret".to_string();
        let other = JwtUtils::new(&other_config).unwrap();

        let token = other
            .generate_token("admin", Duration::minutes(30))
            .unwrap();
        assert!(jwt.validate_token(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = JwtUtils::new(&test_config()).unwrap();
        assert!(jwt.validate_token("not-a-jwt").is_err());
        assert!(jwt.validate_token("").is_err());
    }

    #[test]
    fn token_without_subject_claim_is_rejected() {
        let config = test_config();
        let jwt = JwtUtils::new(&config).unwrap();

        // Sign a payload with `exp` but no `sub`; decoding into Claims
        // must fail.
        #[derive(Serialize)]
        struct NoSubject {
            exp: usize,
        }
        let payload = NoSubject {
            exp: (Utc::now() + Duration::minutes(5)).timestamp() as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert!(jwt.validate_token(&token).is_err());
    }

    #[test]
    fn non_hmac_algorithm_is_refused() {
        let mut config = test_config();
        config.jwt_algorithm = "RS256".to_string();
        assert!(JwtUtils::new(&config).is_err());
    }
}
