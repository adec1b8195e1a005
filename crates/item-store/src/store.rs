use async_trait::async_trait;

use crate::{Item, ItemId, ItemStoreError, Result};

/// Core trait for item store implementations.
///
/// Every operation is a single atomic read or write. Implementations must be
/// thread-safe (Send + Sync) since one instance is shared by all requests.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Stores an item under its ID, replacing any existing record.
    ///
    /// Returns the record that was replaced, if any. Overwriting is not an
    /// error: the last write for an ID wins.
    async fn insert(&self, item: Item) -> Result<Option<Item>>;

    /// Retrieves the item stored under `id`.
    async fn get(&self, id: ItemId) -> Result<Option<Item>>;

    /// Returns every stored item in first-insertion order.
    async fn list(&self) -> Result<Vec<Item>>;

    /// Retrieves the item stored under `id`, failing with
    /// [`ItemStoreError::NotFound`] when absent.
    async fn require(&self, id: ItemId) -> Result<Item> {
        self.get(id).await?.ok_or(ItemStoreError::NotFound(id))
    }
}
