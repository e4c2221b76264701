//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the Kafka broker address, JWT signing settings, and the server port.

use anyhow::{Context, Result};
use std::env;

/// Human-readable application name reported by the health endpoint.
pub const APP_NAME: &str = "Todo Backend API with Auth";

/// Application version reported by the health endpoint.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct Config {
    pub kafka_broker: String,
    pub kafka_topic: String,
    pub jwt_secret: String,
    pub jwt_algorithm: String,
    pub token_ttl_minutes: i64,
    pub server_port: u16,
    pub debug: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable is optional and falls back to a development default.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let kafka_broker =
            env::var("KAFKA_BROKER").unwrap_or_else(|_| "localhost:9092".to_string());

        let kafka_topic = env::var("KAFKA_TOPIC").unwrap_or_else(|_| "todos".to_string());

        let jwt_secret = env::var("SECRET_KEY").unwrap_or_else(|_| {
            "your-secret-key-change-in-production-environment-variable".to_string()
        });

        let jwt_algorithm = env::var("ALGORITHM").unwrap_or_else(|_| "HS256".to_string());

        let token_ttl_minutes = env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<i64>()
            .context("ACCESS_TOKEN_EXPIRE_MINUTES must be a valid number")?;

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let debug = env::var("DEBUG")
            .unwrap_or_else(|_| "true".to_string())
            .to_lowercase()
            .parse::<bool>()
            .context("DEBUG must be true or false")?;

        Ok(Config {
            kafka_broker,
            kafka_topic,
            jwt_secret,
            jwt_algorithm,
            token_ttl_minutes,
            server_port,
            debug,
        })
    }
}
