use super::ContentStore;
use crate::error::{Result, ShyPostsError};
use crate::model::{ContentItem, ItemId, MetaValue};
use std::collections::HashMap;

/// In-memory store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: HashMap<ItemId, ContentItem>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for InMemoryStore {
    fn save_item(&mut self, item: &ContentItem) -> Result<()> {
        self.items.insert(item.id, item.clone());
        Ok(())
    }

    fn get_item(&self, id: ItemId) -> Result<ContentItem> {
        self.items
            .get(&id)
            .cloned()
            .ok_or(ShyPostsError::ItemNotFound(id))
    }

    fn list_items(&self) -> Result<Vec<ContentItem>> {
        Ok(self.items.values().cloned().collect())
    }

    fn delete_item(&mut self, id: ItemId) -> Result<()> {
        self.items
            .remove(&id)
            .map(|_| ())
            .ok_or(ShyPostsError::ItemNotFound(id))
    }

    fn get_meta(&self, id: ItemId, key: &str) -> Result<Option<MetaValue>> {
        Ok(self
            .items
            .get(&id)
            .and_then(|item| item.meta.get(key).cloned()))
    }

    fn set_meta(&mut self, id: ItemId, key: &str, value: MetaValue) -> Result<()> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or(ShyPostsError::ItemNotFound(id))?;
        item.meta.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_get_round_trip() {
        let mut store = InMemoryStore::new();
        store.save_item(&ContentItem::new(1, "post", "A")).unwrap();
        assert_eq!(store.get_item(1).unwrap().title, "A");
    }

    #[test]
    fn get_meta_is_none_for_unknown_item_or_key() {
        let mut store = InMemoryStore::new();
        assert!(store.get_meta(9, "shy_post").unwrap().is_none());
        store.save_item(&ContentItem::new(1, "post", "A")).unwrap();
        assert!(store.get_meta(1, "shy_post").unwrap().is_none());
    }

    #[test]
    fn set_meta_upserts() {
        let mut store = InMemoryStore::new();
        store.save_item(&ContentItem::new(1, "post", "A")).unwrap();
        store.set_meta(1, "shy_post", MetaValue::text("1")).unwrap();
        store.set_meta(1, "shy_post", MetaValue::text("")).unwrap();
        assert_eq!(
            store.get_meta(1, "shy_post").unwrap(),
            Some(MetaValue::text(""))
        );
    }

    #[test]
    fn set_meta_on_missing_item_fails() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.set_meta(1, "shy_post", MetaValue::text("1")),
            Err(ShyPostsError::ItemNotFound(1))
        ));
    }
}
