//! Module for user authentication logic.
//!
//! Contains the credential store, login service, request models, route
//! definitions, and the bearer-token middleware protecting the todo API.

pub mod credentials;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
