//! Handler functions for todo CRUD endpoints.
//!
//! Every handler runs behind the JWT middleware; the authenticated subject
//! arrives through request extensions and is attached to published events.
//! Event publishing is best-effort: the in-memory mutation is authoritative
//! and a publish failure never fails the HTTP response.

use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use tracing::info;
use validator::Validate;

use crate::api::common::validation_errors_to_message;
use crate::api::todo::models::{Todo, TodoCreate};
use crate::errors::{ServiceError, ServiceResult};
use crate::services::event_publisher::TodoEvent;
use crate::state::AppState;
use crate::utils::jwt::Claims;

/// Create a new todo and emit a `todo_created` event.
#[axum::debug_handler]
pub async fn create_todo(
    Extension(state): Extension<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<TodoCreate>,
) -> ServiceResult<(StatusCode, Json<Todo>)> {
    payload
        .validate()
        .map_err(|e| ServiceError::validation(validation_errors_to_message(e)))?;

    let todo = state.todos.create(payload);
    state
        .publisher
        .publish(&TodoEvent::created(&todo, &claims.sub))
        .await;

    info!("Todo created with ID: {} by user: {}", todo.id, claims.sub);
    Ok((StatusCode::CREATED, Json(todo)))
}

/// List all todos.
#[axum::debug_handler]
pub async fn list_todos(
    Extension(state): Extension<AppState>,
    Extension(claims): Extension<Claims>,
) -> ServiceResult<Json<Vec<Todo>>> {
    let todos = state.todos.list();
    info!("Retrieved {} todos for user: {}", todos.len(), claims.sub);
    Ok(Json(todos))
}

/// Get a specific todo by id.
#[axum::debug_handler]
pub async fn get_todo(
    Extension(state): Extension<AppState>,
    Extension(claims): Extension<Claims>,
    Path(todo_id): Path<u64>,
) -> ServiceResult<Json<Todo>> {
    let todo = state
        .todos
        .get(todo_id)
        .ok_or_else(|| ServiceError::not_found("Todo", todo_id))?;

    info!("Retrieved todo {} for user: {}", todo_id, claims.sub);
    Ok(Json(todo))
}

/// Replace a todo's mutable fields and emit a `todo_updated` event.
#[axum::debug_handler]
pub async fn update_todo(
    Extension(state): Extension<AppState>,
    Extension(claims): Extension<Claims>,
    Path(todo_id): Path<u64>,
    Json(payload): Json<TodoCreate>,
) -> ServiceResult<Json<Todo>> {
    payload
        .validate()
        .map_err(|e| ServiceError::validation(validation_errors_to_message(e)))?;

    let todo = state
        .todos
        .update(todo_id, payload)
        .ok_or_else(|| ServiceError::not_found("Todo", todo_id))?;

    state
        .publisher
        .publish(&TodoEvent::updated(&todo, &claims.sub))
        .await;

    info!("Todo {} updated by user: {}", todo_id, claims.sub);
    Ok(Json(todo))
}

/// Delete a todo and emit a `todo_deleted` event.
#[axum::debug_handler]
pub async fn delete_todo(
    Extension(state): Extension<AppState>,
    Extension(claims): Extension<Claims>,
    Path(todo_id): Path<u64>,
) -> ServiceResult<StatusCode> {
    let deleted = state
        .todos
        .delete(todo_id)
        .ok_or_else(|| ServiceError::not_found("Todo", todo_id))?;

    state
        .publisher
        .publish(&TodoEvent::deleted(deleted.id, &claims.sub))
        .await;

    info!("Todo {} deleted by user: {}", todo_id, claims.sub);
    Ok(StatusCode::NO_CONTENT)
}
