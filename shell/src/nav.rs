//! Collapse state of the side panel.

use types::Orientation;

use crate::storage::Storage;

/// Toggle arrow direction for a given collapse state.
pub fn indicator_orientation(collapsed: bool) -> Orientation {
    if collapsed {
        Orientation::Forward
    } else {
        Orientation::Back
    }
}

/// UI state owned by the navigation shell, mirrored to storage as a JSON boolean.
pub struct NavShell<S> {
    storage: S,
    key: String,
    collapsed: bool,
}

impl<S: Storage> NavShell<S> {
    /// Reads the persisted state once. Missing, unreadable or malformed
    /// values all start the panel expanded.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let collapsed = match storage.get(&key) {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed '{key}' value {raw:?}: {e}");
                false
            }),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("failed to read '{key}', starting expanded: {e}");
                false
            }
        };

        Self {
            storage,
            key,
            collapsed,
        }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn orientation(&self) -> Orientation {
        indicator_orientation(self.collapsed)
    }

    /// Flips the panel and writes the new value through before returning it.
    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.persist();
        tracing::debug!(collapsed = self.collapsed, "sidebar toggled");
        self.collapsed
    }

    fn persist(&self) {
        // The in-memory value stays authoritative when the write fails.
        let result = serde_json::to_string(&self.collapsed)
            .map_err(types::Error::from)
            .and_then(|value| self.storage.set(&self.key, &value));
        if let Err(e) = result {
            tracing::warn!("failed to persist '{}': {e}", self.key);
        }
    }
}
