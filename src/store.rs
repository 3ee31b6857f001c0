// store.rs
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::item::{Item, ItemId};

// Store Structures -----------------------------------------------------------

/// In-memory registry of items keyed by id.
///
/// Readers (`list`, `get`, `len`) share the lock; `insert` and `delete` hold it
/// exclusively, so the existence check and the mutation happen as one step.
pub struct ItemStore {
    items: RwLock<HashMap<ItemId, Item>>,
}

// ItemStore Implementation ---------------------------------------------------

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a copy of every stored item. Order is unspecified.
    pub async fn list(&self) -> Vec<Item> {
        let items = self.items.read().await;
        items.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Option<Item> {
        let items = self.items.read().await;
        items.get(id).cloned()
    }

    /// Stores `item` unless its id is taken, returning the stored item.
    pub async fn insert(&self, item: Item) -> Result<Item, StoreError> {
        let mut items = self.items.write().await;
        match items.entry(item.id.clone()) {
            Entry::Occupied(_) => {
                debug!("insert rejected, id {:?} already present", item.id);
                Err(StoreError::AlreadyExists(item.id))
            }
            Entry::Vacant(slot) => {
                slot.insert(item.clone());
                debug!("inserted id {:?}, {} items stored", item.id, items.len());
                Ok(item)
            }
        }
    }

    /// Removes the item with `id`, returning it.
    pub async fn delete(&self, id: &str) -> Result<Item, StoreError> {
        let mut items = self.items.write().await;
        match items.remove(id) {
            Some(item) => {
                debug!("deleted id {:?}, {} items stored", id, items.len());
                Ok(item)
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
