//! Shared helpers for the integration tests.
//!
//! Builds the same router the binary serves, with the Kafka publisher
//! replaced by an in-process recording stub.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_backend::auth::credentials::StaticCredentials;
use todo_backend::config::Config;
use todo_backend::repositories::todo_repository::TodoRepository;
use todo_backend::router::build_router;
use todo_backend::services::event_publisher::{EventPublisher, TodoEvent};
use todo_backend::state::AppState;
use todo_backend::utils::jwt::JwtUtils;

/// Publisher stub that records events instead of talking to a broker.
pub struct RecordingPublisher {
    pub events: Mutex<Vec<TodoEvent>>,
    accept: bool,
}

impl RecordingPublisher {
    /// Stub that accepts every event.
    pub fn accepting() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            accept: true,
        }
    }

    /// Stub that reports local rejection for every event, simulating a
    /// publisher whose local enqueue fails.
    pub fn rejecting() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            accept: false,
        }
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &TodoEvent) -> bool {
        self.events.lock().unwrap().push(event.clone());
        self.accept
    }

    async fn close(&self) {}
}

pub fn test_config() -> Config {
    Config {
        kafka_broker: "localhost:9092".to_string(),
        kafka_topic: "todos".to_string(),
        jwt_secret: "integration-test-secret".to_string(),
        jwt_algorithm: "HS256".to_string(),
        token_ttl_minutes: 30,
        server_port: 0,
        debug: false,
    }
}

pub struct TestApp {
    pub router: Router,
    pub publisher: Arc<RecordingPublisher>,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with(Arc::new(RecordingPublisher::accepting()))
}

pub fn build_test_app_with(publisher: Arc<RecordingPublisher>) -> TestApp {
    let config = test_config();
    let state = AppState {
        jwt_utils: Arc::new(JwtUtils::new(&config).unwrap()),
        credentials: Arc::new(StaticCredentials::new()),
        todos: Arc::new(TodoRepository::new()),
        publisher: publisher.clone(),
        config: Arc::new(config),
    };

    TestApp {
        router: build_router(state),
        publisher,
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

/// POST /auth/login with credentials in the query string.
pub async fn login(router: &Router, username: &str, password: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(format!("/auth/login?username={username}&password={password}"))
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

/// Log in as the demo admin and return the bearer token.
pub async fn bearer_token(router: &Router) -> String {
    let response = login(router, "admin", "admin123").await;
    assert_eq!(response.status(), 200, "admin login must succeed");
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Send an authenticated request with an optional JSON body.
pub async fn authed_request(
    router: &Router,
    method: &str,
    uri: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    router.clone().oneshot(request).await.unwrap()
}
