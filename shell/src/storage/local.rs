use types::{Result, err};

use super::Storage;

/// `window.localStorage` of the current origin.
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| err!("no window in this context"))?;
        let inner = window
            .local_storage()
            .map_err(|e| err!("local storage access denied: {e:?}"))?
            .ok_or_else(|| err!("local storage not supported"))?;

        Ok(Self { inner })
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| err!("failed to read '{key}': {e:?}"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| err!("failed to write '{key}': {e:?}"))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| err!("failed to remove '{key}': {e:?}"))
    }
}
