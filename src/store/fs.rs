use super::ContentStore;
use crate::error::{Result, ShyPostsError};
use crate::model::{ContentItem, ItemId, MetaValue};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "data.json";

/// Item record persisted in the index file. Bodies live in sibling files so
/// listing never reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRecord {
    id: ItemId,
    kind: String,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    meta: BTreeMap<String, MetaValue>,
}

impl ItemRecord {
    fn from_item(item: &ContentItem) -> Self {
        Self {
            id: item.id,
            kind: item.kind.clone(),
            title: item.title.clone(),
            created_at: item.created_at,
            updated_at: item.updated_at,
            meta: item.meta.clone(),
        }
    }

    fn into_item(self, body: String) -> ContentItem {
        ContentItem {
            id: self.id,
            kind: self.kind,
            title: self.title,
            body,
            created_at: self.created_at,
            updated_at: self.updated_at,
            meta: self.meta,
        }
    }
}

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Platform data directory for a store not tied to a host install.
    pub fn default_root() -> Result<PathBuf> {
        ProjectDirs::from("net", "codeventure", "shy-posts")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| ShyPostsError::Store("No home directory available".to_string()))
    }

    fn body_filename(id: ItemId) -> String {
        format!("item-{}.txt", id)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShyPostsError::Io)?;
        }
        Ok(())
    }

    fn load_records(&self) -> Result<HashMap<ItemId, ItemRecord>> {
        let data_file = self.root.join(DATA_FILENAME);
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(ShyPostsError::Io)?;
        let records: HashMap<ItemId, ItemRecord> =
            serde_json::from_str(&content).map_err(ShyPostsError::Serialization)?;
        Ok(records)
    }

    fn save_records(&self, records: &HashMap<ItemId, ItemRecord>) -> Result<()> {
        let data_file = self.root.join(DATA_FILENAME);
        let content = serde_json::to_string_pretty(records).map_err(ShyPostsError::Serialization)?;
        fs::write(data_file, content).map_err(ShyPostsError::Io)?;
        Ok(())
    }

    fn read_body(&self, id: ItemId) -> Result<String> {
        let path = self.root.join(Self::body_filename(id));
        if !path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(path).map_err(ShyPostsError::Io)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentStore for FileStore {
    fn save_item(&mut self, item: &ContentItem) -> Result<()> {
        self.ensure_dir()?;

        // 1. Update the record index
        let mut records = self.load_records()?;
        records.insert(item.id, ItemRecord::from_item(item));
        self.save_records(&records)?;

        // 2. Write the body file
        let path = self.root.join(Self::body_filename(item.id));
        fs::write(path, &item.body).map_err(ShyPostsError::Io)?;

        Ok(())
    }

    fn get_item(&self, id: ItemId) -> Result<ContentItem> {
        let mut records = self.load_records()?;
        let record = records
            .remove(&id)
            .ok_or(ShyPostsError::ItemNotFound(id))?;
        let body = self.read_body(id)?;
        Ok(record.into_item(body))
    }

    fn list_items(&self) -> Result<Vec<ContentItem>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let records = self.load_records()?;
        let mut items = Vec::with_capacity(records.len());
        for (id, record) in records {
            let body = self.read_body(id)?;
            items.push(record.into_item(body));
        }
        Ok(items)
    }

    fn delete_item(&mut self, id: ItemId) -> Result<()> {
        let mut records = self.load_records()?;
        if records.remove(&id).is_none() {
            return Err(ShyPostsError::ItemNotFound(id));
        }
        self.save_records(&records)?;

        let path = self.root.join(Self::body_filename(id));
        if path.exists() {
            fs::remove_file(path).map_err(ShyPostsError::Io)?;
        }

        Ok(())
    }

    fn get_meta(&self, id: ItemId, key: &str) -> Result<Option<MetaValue>> {
        let records = self.load_records()?;
        Ok(records
            .get(&id)
            .and_then(|record| record.meta.get(key).cloned()))
    }

    fn set_meta(&mut self, id: ItemId, key: &str, value: MetaValue) -> Result<()> {
        let mut records = self.load_records()?;
        let record = records
            .get_mut(&id)
            .ok_or(ShyPostsError::ItemNotFound(id))?;
        record.meta.insert(key.to_string(), value);
        self.save_records(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_get_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let item = ContentItem::new(42, "post", "Hello").with_body("Body text");
        store.save_item(&item).unwrap();

        let loaded = store.get_item(42).unwrap();
        assert_eq!(loaded.title, "Hello");
        assert_eq!(loaded.body, "Body text");
        assert_eq!(loaded.kind, "post");
    }

    #[test]
    fn meta_survives_reload() {
        let dir = tempdir().unwrap();
        {
            let mut store = FileStore::new(dir.path().to_path_buf());
            store.save_item(&ContentItem::new(1, "post", "A")).unwrap();
            store.set_meta(1, "shy_post", MetaValue::text("1")).unwrap();
        }

        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(
            store.get_meta(1, "shy_post").unwrap(),
            Some(MetaValue::text("1"))
        );
    }

    #[test]
    fn list_on_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nowhere"));
        assert!(store.list_items().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_record_and_body() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store
            .save_item(&ContentItem::new(7, "post", "Gone").with_body("x"))
            .unwrap();

        store.delete_item(7).unwrap();
        assert!(matches!(
            store.get_item(7),
            Err(ShyPostsError::ItemNotFound(7))
        ));
        assert!(!dir.path().join("item-7.txt").exists());
    }

    #[test]
    fn missing_body_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_item(&ContentItem::new(3, "post", "A")).unwrap();
        fs::remove_file(dir.path().join("item-3.txt")).unwrap();

        assert_eq!(store.get_item(3).unwrap().body, "");
    }
}
