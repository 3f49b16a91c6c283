//! Per-config-entry hub storage.
//!
//! The integration's entry setup connects a hub and stores it here; each
//! platform setup later fetches it by `(domain, entry_id)`.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use aliste_domain::error::{AlisteError, NotFoundError};
use aliste_domain::id::ConfigEntryId;

/// Hubs keyed by integration domain, then config entry.
pub struct HubStore<H> {
    hubs: RwLock<HashMap<String, HashMap<ConfigEntryId, Arc<H>>>>,
}

impl<H> Default for HubStore<H> {
    fn default() -> Self {
        Self {
            hubs: RwLock::new(HashMap::new()),
        }
    }
}

impl<H> HubStore<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `hub` for `entry_id`, returning the hub it replaces.
    pub fn insert(&self, domain: &str, entry_id: ConfigEntryId, hub: Arc<H>) -> Option<Arc<H>> {
        let mut hubs = self.hubs.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(domain, %entry_id, "hub stored");
        hubs.entry(domain.to_string())
            .or_default()
            .insert(entry_id, hub)
    }

    /// Fetch the hub stored for `entry_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AlisteError::NotFound`] when no hub is stored for the entry.
    pub fn get(&self, domain: &str, entry_id: ConfigEntryId) -> Result<Arc<H>, AlisteError> {
        let hubs = self.hubs.read().unwrap_or_else(PoisonError::into_inner);
        hubs.get(domain)
            .and_then(|entries| entries.get(&entry_id))
            .cloned()
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Hub",
                    id: format!("{domain}/{entry_id}"),
                }
                .into()
            })
    }

    /// Drop the hub stored for `entry_id`, e.g. when the entry is unloaded.
    pub fn remove(&self, domain: &str, entry_id: ConfigEntryId) -> Option<Arc<H>> {
        let mut hubs = self.hubs.write().unwrap_or_else(PoisonError::into_inner);
        let removed = hubs.get_mut(domain)?.remove(&entry_id);
        if hubs.get(domain).is_some_and(HashMap::is_empty) {
            hubs.remove(domain);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_stored_hub() {
        let store = HubStore::new();
        let entry = ConfigEntryId::new();
        store.insert("aliste", entry, Arc::new("hub-a"));

        assert_eq!(*store.get("aliste", entry).unwrap(), "hub-a");
    }

    #[test]
    fn should_return_not_found_for_unknown_entry() {
        let store: HubStore<&str> = HubStore::new();
        let result = store.get("aliste", ConfigEntryId::new());
        assert!(matches!(result, Err(AlisteError::NotFound(_))));
    }

    #[test]
    fn should_keep_domains_apart() {
        let store = HubStore::new();
        let entry = ConfigEntryId::new();
        store.insert("aliste", entry, Arc::new("hub-a"));

        assert!(store.get("other", entry).is_err());
    }

    #[test]
    fn should_replace_hub_for_same_entry() {
        let store = HubStore::new();
        let entry = ConfigEntryId::new();
        assert!(store.insert("aliste", entry, Arc::new("old")).is_none());

        let previous = store.insert("aliste", entry, Arc::new("new"));
        assert_eq!(previous.as_deref(), Some(&"old"));
        assert_eq!(*store.get("aliste", entry).unwrap(), "new");
    }

    #[test]
    fn should_forget_removed_hub() {
        let store = HubStore::new();
        let entry = ConfigEntryId::new();
        store.insert("aliste", entry, Arc::new("hub-a"));

        assert!(store.remove("aliste", entry).is_some());
        assert!(store.get("aliste", entry).is_err());
        assert!(store.remove("aliste", entry).is_none());
    }
}
