use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content items are identified by plain integer ids assigned by the host.
pub type ItemId = u64;

/// Metadata key under which the hide-from-homepage flag is stored.
pub const SHY_POST_KEY: &str = "shy_post";

/// Stored value that marks an item as hidden. Anything else, including an
/// absent key, means visible.
pub const SHY_POST_HIDDEN: &str = "1";

/// A single metadata value attached to a content item.
///
/// Values are written as flat scalars. The `Record` variant exists only to
/// read legacy data where the value was stored as a keyed record; readers go
/// through [`MetaValue::field`] so both shapes resolve the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    Record(BTreeMap<String, String>),
}

impl MetaValue {
    pub fn text(value: impl Into<String>) -> Self {
        MetaValue::Text(value.into())
    }

    /// Resolve the scalar for `key`: a `Text` value is the scalar itself, a
    /// legacy `Record` is searched for the keyed field.
    pub fn field(&self, key: &str) -> Option<&str> {
        match self {
            MetaValue::Text(value) => Some(value.as_str()),
            MetaValue::Record(fields) => fields.get(key).map(String::as_str),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    /// Content kind, e.g. "post" or "page". Determines the edit capability.
    pub kind: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub meta: BTreeMap<String, MetaValue>,
}

impl ContentItem {
    pub fn new(id: ItemId, kind: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            kind: kind.into(),
            title: title.into(),
            body: String::new(),
            created_at: now,
            updated_at: now,
            meta: BTreeMap::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Whether this item carries the hidden-from-homepage flag.
    pub fn is_shy(&self) -> bool {
        self.meta
            .get(SHY_POST_KEY)
            .and_then(|value| value.field(SHY_POST_KEY))
            .map(|value| value == SHY_POST_HIDDEN)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flag_means_visible() {
        let item = ContentItem::new(1, "post", "Hello");
        assert!(!item.is_shy());
    }

    #[test]
    fn scalar_one_means_hidden() {
        let mut item = ContentItem::new(1, "post", "Hello");
        item.meta
            .insert(SHY_POST_KEY.to_string(), MetaValue::text("1"));
        assert!(item.is_shy());
    }

    #[test]
    fn empty_scalar_means_visible() {
        let mut item = ContentItem::new(1, "post", "Hello");
        item.meta
            .insert(SHY_POST_KEY.to_string(), MetaValue::text(""));
        assert!(!item.is_shy());
    }

    #[test]
    fn legacy_record_shape_resolves_through_field() {
        let mut fields = BTreeMap::new();
        fields.insert(SHY_POST_KEY.to_string(), "1".to_string());
        let mut item = ContentItem::new(1, "post", "Hello");
        item.meta
            .insert(SHY_POST_KEY.to_string(), MetaValue::Record(fields));
        assert!(item.is_shy());
    }

    #[test]
    fn record_without_keyed_field_means_visible() {
        let mut fields = BTreeMap::new();
        fields.insert("unrelated".to_string(), "1".to_string());
        let mut item = ContentItem::new(1, "post", "Hello");
        item.meta
            .insert(SHY_POST_KEY.to_string(), MetaValue::Record(fields));
        assert!(!item.is_shy());
    }

    #[test]
    fn meta_value_serializes_untagged() {
        let text = MetaValue::text("1");
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, "\"1\"");

        let parsed: MetaValue = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(parsed, text);

        let parsed: MetaValue = serde_json::from_str("{\"shy_post\":\"1\"}").unwrap();
        assert_eq!(parsed.field(SHY_POST_KEY), Some("1"));
    }
}
