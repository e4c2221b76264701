//! Credential lookup for the login flow.
//!
//! The store is a trait so the compiled-in demo table can later be replaced
//! by a hashed-credential backend without touching the authentication
//! contract.

use std::collections::HashMap;

/// Lookup-by-username interface used by the login service.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored password for `username`, if the user exists.
    fn password_for(&self, username: &str) -> Option<&str>;

    /// Checks a username/password pair against the store.
    ///
    /// An unknown username and a wrong password are indistinguishable to
    /// the caller.
    fn verify(&self, username: &str, password: &str) -> bool {
        self.password_for(username)
            .is_some_and(|stored| stored == password)
    }
}

/// Demo users compiled into the process (plaintext, dev only -- NOT for
/// production).
pub struct StaticCredentials {
    users: HashMap<&'static str, &'static str>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        let users = HashMap::from([
            ("admin", "admin123"),
            ("user", "user123"),
            ("demo", "demo123"),
        ]);
        Self { users }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for StaticCredentials {
    fn password_for(&self, username: &str) -> Option<&str> {
        self.users.get(username).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pairs_verify() {
        let store = StaticCredentials::new();
        assert!(store.verify("admin", "admin123"));
        assert!(store.verify("user", "user123"));
        assert!(store.verify("demo", "demo123"));
    }

    #[test]
    fn unknown_user_and_wrong_password_both_fail() {
        let store = StaticCredentials::new();
        assert!(!store.verify("nobody", "admin123"));
        assert!(!store.verify("admin", "wrong"));
        assert!(!store.verify("admin", ""));
    }
}
