//! Collection of general utility modules.
//!
//! Currently holds the JWT token service used by the login flow and the
//! authentication middleware.

pub mod jwt;
