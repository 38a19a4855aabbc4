//! Exact-match resolution of locations against the route table.

use std::collections::HashSet;

use types::{MenuItem, Result, err};

/// A navigable route: its menu entry plus whatever the caller mounts for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry<S> {
    pub item: MenuItem,
    pub screen: S,
}

impl<S> RouteEntry<S> {
    pub fn new(item: MenuItem, screen: S) -> Self {
        Self { item, screen }
    }

    pub fn path(&self) -> &str {
        &self.item.path
    }
}

/// Ordered, immutable set of routes with unique paths.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable<S> {
    entries: Vec<RouteEntry<S>>,
}

impl<S> Default for RouteTable<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> RouteTable<S> {
    pub fn new(entries: Vec<RouteEntry<S>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.path()) {
                return Err(err!("duplicate route path '{}'", entry.path()));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RouteEntry<S>] {
        &self.entries
    }

    pub fn menu_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.entries.iter().map(|entry| &entry.item)
    }

    /// The entry whose path equals `path` exactly. No prefix or wildcard matching.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<S>> {
        let entry = self.entries.iter().find(|entry| entry.path() == path);
        if entry.is_none() {
            tracing::debug!(path, "no route matched");
        }
        entry
    }

    /// Menu key to highlight for `path`, if any entry matches.
    pub fn selected_key(&self, path: &str) -> Option<&str> {
        self.resolve(path).map(|entry| entry.item.key())
    }

    /// Screen registered for `path`. Lookup only; mounting is up to the caller.
    pub fn screen(&self, path: &str) -> Option<&S> {
        self.resolve(path).map(|entry| &entry.screen)
    }
}
