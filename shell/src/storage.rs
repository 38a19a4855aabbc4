use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use types::{Result, err};

#[cfg(feature = "web")]
pub use local::LocalStorage;

#[cfg(feature = "web")]
mod local;

/// Durable string key-value store.
///
/// Single-threaded: implementations are shared through `Rc` and never cross
/// threads. Readers treat any error as "no value".
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Storage handle injected into the session guard and the navigation shell.
pub type SharedStorage = Rc<dyn Storage>;

impl<T: Storage + ?Sized> Storage for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: Storage + ?Sized> Storage for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory store. Clones share the same entries, so a clone outliving a
/// guard or shell behaves like storage surviving a reload.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    available: Rc<Cell<bool>>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Rc::default(),
            available: Rc::new(Cell::new(true)),
        }
    }

    /// A store whose every operation fails, like a browser with storage disabled.
    pub fn unavailable() -> Self {
        let storage = Self::new();
        storage.set_available(false);
        storage
    }

    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    fn check(&self) -> Result<()> {
        if self.available.get() {
            Ok(())
        } else {
            Err(err!("storage unavailable"))
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser local storage when built for the web, otherwise a fresh in-memory store.
pub fn default_storage() -> SharedStorage {
    #[cfg(feature = "web")]
    {
        match LocalStorage::open() {
            Ok(storage) => return Rc::new(storage),
            Err(e) => tracing::warn!("local storage unavailable, using memory: {e}"),
        }
    }

    Rc::new(MemoryStorage::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.set("token", "abc").unwrap();
        assert_eq!(other.get("token").unwrap().as_deref(), Some("abc"));

        other.remove("token").unwrap();
        assert_eq!(storage.get("token").unwrap(), None);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let storage = MemoryStorage::new();
        storage.set("sidebarCollapsed", "true").unwrap();
        storage.set("sidebarCollapsed", "false").unwrap();
        assert_eq!(
            storage.get("sidebarCollapsed").unwrap().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn unavailable_storage_fails_every_operation() {
        let storage = MemoryStorage::unavailable();
        assert!(storage.get("token").is_err());
        assert!(storage.set("token", "abc").is_err());
        assert!(storage.remove("token").is_err());
    }

    #[test]
    fn shared_handle_forwards_to_inner_store() {
        let memory = MemoryStorage::new();
        let shared: SharedStorage = Rc::new(memory.clone());

        shared.set("token", "abc").unwrap();
        assert_eq!(memory.get("token").unwrap().as_deref(), Some("abc"));
    }
}
