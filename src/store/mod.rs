//! # Storage Layer
//!
//! The [`ContentStore`] trait abstracts the host's content and metadata
//! storage so the command layer never touches persistence details.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: file-based storage
//!   - Item records (including the metadata map) in `data.json`
//!   - Item bodies in individual files: `item-{id}.txt`
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! Records and bodies are stored separately so listing items doesn't require
//! reading every body file.
//!
//! ## Metadata semantics
//!
//! `set_meta` is an upsert on a single `(item, key)` pair; concurrent saves
//! resolve last-write-wins at the store. `get_meta` returns `None` for both
//! an unknown item and an unset key, since the flag's absence already means
//! "visible", so the distinction never matters to callers.

use crate::error::Result;
use crate::model::{ContentItem, ItemId, MetaValue};

pub mod fs;
pub mod memory;

/// Abstract interface for content-item storage.
pub trait ContentStore {
    /// Save an item (create or update)
    fn save_item(&mut self, item: &ContentItem) -> Result<()>;

    /// Get an item by id
    fn get_item(&self, id: ItemId) -> Result<ContentItem>;

    /// List all items
    fn list_items(&self) -> Result<Vec<ContentItem>>;

    /// Delete an item permanently
    fn delete_item(&mut self, id: ItemId) -> Result<()>;

    /// Read one metadata value for an item
    fn get_meta(&self, id: ItemId, key: &str) -> Result<Option<MetaValue>>;

    /// Upsert one metadata value for an item
    fn set_meta(&mut self, id: ItemId, key: &str, value: MetaValue) -> Result<()>;
}
