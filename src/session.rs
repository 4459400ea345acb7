//! Session gates
//!
//! Two passphrase checks guarding the hidden dashboard and the admin
//! console. These are UI gates, nothing more: the secrets are fixed
//! strings compared in plaintext and the "session" is a flag in local
//! storage. Do not mistake either for an access-control boundary.

use crate::storage::Storage;

/// Storage key for the hidden-area flag.
pub const AUTH_FLAG_KEY: &str = "ronin-auth";
/// Storage key for the admin console flag.
pub const ADMIN_FLAG_KEY: &str = "admin-session";

const RONIN_PASSPHRASE: &str = "vagabond2024";
const ADMIN_USERNAME: &str = "sensei";

fn read_flag(backend: &dyn Storage, key: &str) -> bool {
    match backend.get_item(key) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(err) => {
            tracing::warn!(key, %err, "auth flag unreadable, treating as logged out");
            false
        }
    }
}

fn write_flag(backend: &dyn Storage, key: &str) {
    if let Err(err) = backend.set_item(key, "true") {
        tracing::warn!(key, %err, "failed to persist auth flag");
    }
}

fn clear_flag(backend: &dyn Storage, key: &str) {
    if let Err(err) = backend.remove_item(key) {
        tracing::warn!(key, %err, "failed to clear auth flag");
    }
}

/// Gate for the hidden area. The flag persists across sessions: the stored
/// value is the literal string `"true"`, anything else means logged out.
pub struct SessionGate {
    backend: Box<dyn Storage>,
    authenticated: bool,
}

impl SessionGate {
    pub fn new(backend: Box<dyn Storage>) -> Self {
        let authenticated = read_flag(backend.as_ref(), AUTH_FLAG_KEY);
        Self { backend, authenticated }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Compare `passphrase` against the fixed secret. On a match the gate
    /// opens and the flag is persisted; on a mismatch nothing changes.
    pub fn login(&mut self, passphrase: &str) -> bool {
        if passphrase == RONIN_PASSPHRASE {
            self.authenticated = true;
            write_flag(self.backend.as_ref(), AUTH_FLAG_KEY);
            true
        } else {
            false
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        clear_flag(self.backend.as_ref(), AUTH_FLAG_KEY);
    }
}

/// Gate for the admin console. Takes a username as well; scope is whatever
/// the backend gives it, so passing a `MemoryStorage` reproduces the
/// original per-session behavior.
pub struct AdminGate {
    backend: Box<dyn Storage>,
    authenticated: bool,
}

impl AdminGate {
    pub fn new(backend: Box<dyn Storage>) -> Self {
        let authenticated = read_flag(backend.as_ref(), ADMIN_FLAG_KEY);
        Self { backend, authenticated }
    }

    pub fn is_admin(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if username == ADMIN_USERNAME && password == RONIN_PASSPHRASE {
            self.authenticated = true;
            write_flag(self.backend.as_ref(), ADMIN_FLAG_KEY);
            true
        } else {
            false
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        clear_flag(self.backend.as_ref(), ADMIN_FLAG_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DisabledStorage, MemoryStorage};

    #[test]
    fn test_wrong_passphrase_is_rejected() {
        let mut gate = SessionGate::new(Box::new(MemoryStorage::new()));
        assert!(!gate.login("wrong-pass"));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_login_logout_round_trip() {
        let backend = MemoryStorage::new();
        let mut gate = SessionGate::new(Box::new(backend.clone()));
        assert!(gate.login("vagabond2024"));
        assert!(gate.is_authenticated());
        assert_eq!(
            backend.get_item(AUTH_FLAG_KEY).unwrap().as_deref(),
            Some("true")
        );

        gate.logout();
        assert!(!gate.is_authenticated());
        assert_eq!(backend.get_item(AUTH_FLAG_KEY).unwrap(), None);
    }

    #[test]
    fn test_flag_survives_reconstruction() {
        let backend = MemoryStorage::new();
        let mut gate = SessionGate::new(Box::new(backend.clone()));
        assert!(gate.login("vagabond2024"));
        drop(gate);

        let reopened = SessionGate::new(Box::new(backend));
        assert!(reopened.is_authenticated());
    }

    #[test]
    fn test_garbage_flag_means_logged_out() {
        let backend = MemoryStorage::new();
        backend.set_item(AUTH_FLAG_KEY, "yes please").unwrap();
        let gate = SessionGate::new(Box::new(backend));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_gate_works_without_storage() {
        let mut gate = SessionGate::new(Box::new(DisabledStorage));
        assert!(gate.login("vagabond2024"));
        assert!(gate.is_authenticated());
        gate.logout();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_admin_gate_needs_both_credentials() {
        let mut gate = AdminGate::new(Box::new(MemoryStorage::new()));
        assert!(!gate.login("sensei", "wrong"));
        assert!(!gate.login("student", "vagabond2024"));
        assert!(!gate.is_admin());
        assert!(gate.login("sensei", "vagabond2024"));
        assert!(gate.is_admin());
        gate.logout();
        assert!(!gate.is_admin());
    }
}
