//! Item registry for the order service.
//!
//! Defines the [`Item`] record, the [`ItemStore`] trait the HTTP layer is
//! written against, and [`InMemoryItemStore`], the process-lifetime map
//! that backs it.

pub mod error;
pub mod item;
pub mod memory;
pub mod store;

pub use common::ItemId;
pub use error::{ItemStoreError, Result};
pub use item::Item;
pub use memory::InMemoryItemStore;
pub use store::ItemStore;
