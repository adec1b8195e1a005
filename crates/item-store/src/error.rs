use thiserror::Error;

use crate::ItemId;

/// Errors that can occur when interacting with the item store.
#[derive(Debug, Error)]
pub enum ItemStoreError {
    /// No item is stored under the requested ID.
    #[error("Item not found: {0}")]
    NotFound(ItemId),
}

/// Result type for item store operations.
pub type Result<T> = std::result::Result<T, ItemStoreError>;
