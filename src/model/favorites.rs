//! Favorite events, mirrored to the key-value store

use crate::error::StoreError;
use crate::services::store::{KeyValueStore, FAVORITES_KEY};
use std::collections::BTreeSet;

/// The set of favorited event ids
///
/// Every mutation rewrites the whole set to the store as a JSON array in
/// ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<u32>,
}

impl Favorites {
    /// Read the persisted set. Missing or malformed data yields an empty set.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                tracing::warn!("Could not read favorites: {}", e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Vec<u32>>(&raw) {
            Ok(ids) => Self {
                ids: ids.into_iter().collect(),
            },
            Err(e) => {
                tracing::warn!("Ignoring malformed favorites payload: {}", e);
                Self::default()
            }
        }
    }

    pub fn contains(&self, event_id: u32) -> bool {
        self.ids.contains(&event_id)
    }

    pub fn ids(&self) -> &BTreeSet<u32> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Serialized form as written to the store
    pub fn to_json(&self) -> String {
        let ids: Vec<u32> = self.ids.iter().copied().collect();
        // A Vec<u32> always serializes
        serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Flip membership and persist. The in-memory set keeps the new value
    /// even when the write fails. Returns whether the event is now a favorite.
    pub fn toggle(
        &mut self,
        event_id: u32,
        store: &mut dyn KeyValueStore,
    ) -> Result<bool, StoreError> {
        let added = if self.ids.remove(&event_id) {
            false
        } else {
            self.ids.insert(event_id);
            true
        };

        tracing::info!(event_id, added, "Favorite toggled");
        store.set(FAVORITES_KEY, &self.to_json())?;
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::{JsonFileStore, MemoryStore};
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(Favorites::load(&store).is_empty());
    }

    #[test]
    fn test_load_malformed_payload_is_empty() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, "{not an array").unwrap();
        assert!(Favorites::load(&store).is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_set_and_payload() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, "[3,7]").unwrap();
        let mut favorites = Favorites::load(&store);
        let before = favorites.clone();

        assert!(favorites.toggle(5, &mut store).unwrap());
        assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[3,5,7]"));

        assert!(!favorites.toggle(5, &mut store).unwrap());
        assert_eq!(favorites, before);
        assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some("[3,7]"));
    }

    #[test]
    fn test_toggle_persists_across_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = JsonFileStore::new(&path);
        let mut favorites = Favorites::load(&store);
        favorites.toggle(12, &mut store).unwrap();
        favorites.toggle(2, &mut store).unwrap();

        let reloaded = Favorites::load(&JsonFileStore::new(&path));
        assert!(reloaded.contains(2));
        assert!(reloaded.contains(12));
        assert_eq!(reloaded.to_json(), "[2,12]");
    }
}
