use types::SessionState;

use crate::storage::Storage;

/// Read-only view of the persisted credential.
///
/// Presence of a non-empty token is the whole authentication signal. The
/// guard never writes; see [`crate::Credentials`] for that.
pub struct SessionGuard<S> {
    storage: S,
    token_key: String,
}

impl<S: Storage> SessionGuard<S> {
    pub fn new(storage: S, token_key: impl Into<String>) -> Self {
        Self {
            storage,
            token_key: token_key.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        match self.storage.get(&self.token_key) {
            Ok(Some(token)) => !token.is_empty(),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("treating session as logged out: {e}");
                false
            }
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState::from(self.is_authenticated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn guard(storage: &MemoryStorage) -> SessionGuard<&MemoryStorage> {
        SessionGuard::new(storage, "token")
    }

    #[test]
    fn absent_token_is_logged_out() {
        let storage = MemoryStorage::new();
        assert!(!guard(&storage).is_authenticated());
        assert_eq!(guard(&storage).state(), SessionState::LoggedOut);
    }

    #[test]
    fn any_non_empty_token_is_logged_in() {
        let storage = MemoryStorage::new();
        for token in ["123", "expired", "not-a-jwt", " "] {
            storage.set("token", token).unwrap();
            assert!(guard(&storage).is_authenticated(), "token {token:?}");
        }
    }

    #[test]
    fn empty_token_is_logged_out() {
        let storage = MemoryStorage::new();
        storage.set("token", "").unwrap();
        assert!(!guard(&storage).is_authenticated());
    }

    #[test]
    fn other_keys_do_not_count() {
        let storage = MemoryStorage::new();
        storage.set("sidebarCollapsed", "true").unwrap();
        assert!(!guard(&storage).is_authenticated());
    }

    #[test]
    fn unavailable_storage_fails_closed() {
        let storage = MemoryStorage::new();
        storage.set("token", "123").unwrap();
        storage.set_available(false);
        assert_eq!(guard(&storage).state(), SessionState::LoggedOut);
    }

    #[test]
    fn cleared_storage_is_seen_on_next_check() {
        let storage = MemoryStorage::new();
        let guard = guard(&storage);
        storage.set("token", "123").unwrap();
        assert!(guard.is_authenticated());

        storage.remove("token").unwrap();
        assert!(!guard.is_authenticated());
    }
}
