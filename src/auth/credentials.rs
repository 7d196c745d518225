//! Credential types and the store interface
//!
//! Comparison is exact string equality on plaintext passwords: no hashing,
//! no normalization, no constant-time compare.

use serde::Deserialize;
use std::collections::HashMap;

/// A stored username/password pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Read-only credential lookup used by the login screen.
pub trait CredentialStore {
    /// Returns `true` only if a stored credential matches both fields exactly.
    ///
    /// Empty strings are accepted and simply never match a stored record.
    /// Implementations must not surface errors here; an unreadable store
    /// answers `false`.
    fn verify(&self, username: &str, password: &str) -> bool;
}

impl<S: CredentialStore + ?Sized> CredentialStore for Box<S> {
    fn verify(&self, username: &str, password: &str) -> bool {
        (**self).verify(username, password)
    }
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    fn verify(&self, username: &str, password: &str) -> bool {
        (**self).verify(username, password)
    }
}

/// Credentials held in a map keyed by username.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCredentialStore {
    credentials: HashMap<String, String>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a credential; an existing username keeps its first password.
    pub fn insert(&mut self, credential: Credential) -> bool {
        if self.credentials.contains_key(&credential.username) {
            return false;
        }
        self.credentials
            .insert(credential.username, credential.password);
        true
    }
}

impl FromIterator<Credential> for InMemoryCredentialStore {
    fn from_iter<I: IntoIterator<Item = Credential>>(iter: I) -> Self {
        let mut store = Self::new();
        for credential in iter {
            store.insert(credential);
        }
        store
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn verify(&self, username: &str, password: &str) -> bool {
        matches!(self.credentials.get(username), Some(stored) if stored == password)
    }
}

/// Stand-in for a store that could not be opened. Never matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl CredentialStore for UnavailableStore {
    fn verify(&self, _username: &str, _password: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryCredentialStore {
        [
            Credential::new("Alice", "secret"),
            Credential::new("bob", "pw123"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_exact_match() {
        assert!(store().verify("Alice", "secret"));
        assert!(store().verify("bob", "pw123"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!store().verify("alice", "secret"));
        assert!(!store().verify("Alice", "SECRET"));
    }

    #[test]
    fn test_no_partial_match() {
        assert!(!store().verify("bob", "pw124"));
        assert!(!store().verify("bob", "pw12"));
        assert!(!store().verify("bob ", "pw123"));
    }

    #[test]
    fn test_unknown_user_and_empty_inputs() {
        let store = store();
        assert!(!store.verify("carol", "secret"));
        assert!(!store.verify("", ""));
        assert!(!InMemoryCredentialStore::new().verify("Alice", "secret"));
    }

    #[test]
    fn test_duplicate_username_keeps_first() {
        let mut store = store();
        assert!(!store.insert(Credential::new("bob", "other")));
        assert!(store.verify("bob", "pw123"));
        assert!(!store.verify("bob", "other"));
        assert!(store.verify("Alice", "secret"));
    }

    #[test]
    fn test_unavailable_store_never_matches() {
        assert!(!UnavailableStore.verify("Alice", "secret"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let boxed: Box<dyn CredentialStore> = Box::new(store());
        assert!(boxed.verify("Alice", "secret"));
        assert!(!boxed.verify("Alice", "nope"));
    }
}
