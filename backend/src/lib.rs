//! Authenticated todo CRUD service backed by in-memory storage, with
//! best-effort publishing of todo-change events to Kafka.
//!
//! The crate is a library so integration tests can drive the same router
//! the production binary serves.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod repositories;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
