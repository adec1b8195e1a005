use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Item, ItemId, Result, store::ItemStore};

/// In-memory item store.
///
/// Holds the registry for the lifetime of the process. All access goes
/// through one lock, so each operation observes a consistent map.
#[derive(Clone, Default)]
pub struct InMemoryItemStore {
    items: Arc<RwLock<Items>>,
}

#[derive(Default)]
struct Items {
    by_id: HashMap<ItemId, Item>,
    // First-insertion order; an overwrite keeps the original slot.
    order: Vec<ItemId>,
}

impl InMemoryItemStore {
    /// Creates a new empty in-memory item store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn insert(&self, item: Item) -> Result<Option<Item>> {
        let id = item.id;
        let mut items = self.items.write().await;

        let previous = items.by_id.insert(id, item);
        if previous.is_none() {
            items.order.push(id);
        } else {
            metrics::counter!("item_store_overwrites_total").increment(1);
        }
        metrics::counter!("item_store_writes_total").increment(1);

        tracing::debug!(item_id = %id, replaced = previous.is_some(), "stored item");
        Ok(previous)
    }

    async fn get(&self, id: ItemId) -> Result<Option<Item>> {
        let items = self.items.read().await;
        let item = items.by_id.get(&id).cloned();
        if item.is_none() {
            metrics::counter!("item_store_lookup_misses_total").increment(1);
        }
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .order
            .iter()
            .filter_map(|id| items.by_id.get(id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemStoreError;

    #[tokio::test]
    async fn insert_and_get() {
        let store = InMemoryItemStore::new();
        let item = Item::new(1, "Test Item").with_description("A test item");

        let previous = store.insert(item.clone()).await.unwrap();
        assert!(previous.is_none());

        let loaded = store.get(ItemId::new(1)).await.unwrap();
        assert_eq!(loaded, Some(item));
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let store = InMemoryItemStore::new();
        let loaded = store.get(ItemId::new(999)).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn require_missing_is_not_found() {
        let store = InMemoryItemStore::new();
        let result = store.require(ItemId::new(5)).await;
        assert!(matches!(result, Err(ItemStoreError::NotFound(id)) if id == ItemId::new(5)));
    }

    #[tokio::test]
    async fn insert_overwrites_existing_id() {
        let store = InMemoryItemStore::new();
        store
            .insert(Item::new(1, "first").with_description("old"))
            .await
            .unwrap();

        let previous = store.insert(Item::new(1, "second")).await.unwrap();
        assert_eq!(previous.map(|i| i.name), Some("first".to_string()));

        // Replaced wholesale, including the description.
        let loaded = store.require(ItemId::new(1)).await.unwrap();
        assert_eq!(loaded.name, "second");
        assert_eq!(loaded.description, None);
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_empty_store() {
        let store = InMemoryItemStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_keeps_first_insertion_order() {
        let store = InMemoryItemStore::new();
        for (id, name) in [(3, "c"), (1, "a"), (2, "b")] {
            store.insert(Item::new(id, name)).await.unwrap();
        }
        store.insert(Item::new(3, "c2")).await.unwrap();

        let listed = store.list().await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|i| i.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(listed[0].name, "c2");
    }

    #[tokio::test]
    async fn clones_share_the_same_map() {
        let store = InMemoryItemStore::new();
        let handle = store.clone();

        handle.insert(Item::new(8, "shared")).await.unwrap();

        assert!(store.get(ItemId::new(8)).await.unwrap().is_some());
    }
}
