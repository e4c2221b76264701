//! Main entry point for the todo backend.
//!
//! This file initializes tracing, loads configuration, wires the in-memory
//! todo store and the Kafka publisher into the router, and serves HTTP
//! until interrupted.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_backend::auth::credentials::StaticCredentials;
use todo_backend::config::{APP_NAME, APP_VERSION, Config};
use todo_backend::repositories::todo_repository::TodoRepository;
use todo_backend::router::build_router;
use todo_backend::services::event_publisher::{EventPublisher, KafkaEventPublisher};
use todo_backend::state::AppState;
use todo_backend::utils::jwt::JwtUtils;

#[tokio::main]
async fn main() {
    let config = Config::from_env().unwrap();

    let default_level = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let jwt_utils = JwtUtils::new(&config).unwrap();
    let publisher: Arc<dyn EventPublisher> =
        Arc::new(KafkaEventPublisher::new(&config).unwrap());

    let state = AppState {
        jwt_utils: Arc::new(jwt_utils),
        credentials: Arc::new(StaticCredentials::new()),
        todos: Arc::new(TodoRepository::new()),
        publisher: publisher.clone(),
        config: Arc::new(config.clone()),
    };

    let app = build_router(state);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting {} v{} on port {}", APP_NAME, APP_VERSION, config.server_port);
    info!("Kafka broker: {}", config.kafka_broker);
    info!("Kafka topic: {}", config.kafka_topic);
    info!("JWT algorithm: {}", config.jwt_algorithm);
    info!("Token expiry: {} minutes", config.token_ttl_minutes);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Shutting down {}", APP_NAME);
    publisher.close().await;
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
}
