//! Shared application state.

use std::sync::Arc;

use crate::auth::credentials::CredentialStore;
use crate::config::Config;
use crate::repositories::todo_repository::TodoRepository;
use crate::services::event_publisher::EventPublisher;
use crate::utils::jwt::JwtUtils;

/// State handed to every handler via `Extension`.
///
/// Cheaply cloneable; all owned data sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub jwt_utils: Arc<JwtUtils>,
    pub credentials: Arc<dyn CredentialStore>,
    pub todos: Arc<TodoRepository>,
    pub publisher: Arc<dyn EventPublisher>,
}
