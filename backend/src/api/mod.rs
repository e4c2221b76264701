//! Central module for organizing the application's main API endpoints.
//!
//! Holds the todo resource and shared response/error plumbing; core
//! authentication routes live under `auth` and are mounted separately.

pub mod common;
pub mod todo;
