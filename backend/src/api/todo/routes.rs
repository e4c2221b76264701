//! Defines the HTTP routes for the todo resource.
//!
//! Every route here requires a valid bearer token; the JWT middleware wraps
//! the whole router.

use super::handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get, routing::post};

pub fn todo_router() -> Router {
    Router::new()
        .route("/", post(create_todo).get(list_todos))
        .route(
            "/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(middleware::from_fn(jwt_auth))
}
