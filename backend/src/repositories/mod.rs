//! Data access layer.
//!
//! Storage here is in-memory and lives only for the process lifetime; there
//! is no durability. The repository object is owned by the application
//! state and injected into handlers.

pub mod todo_repository;
