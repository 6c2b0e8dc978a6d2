//! Hook points and their registry.
//!
//! The host fires these extension points; components register for only the
//! points their execution context needs. Wiring is explicit: a bootstrap
//! routine registers callbacks for a given context instead of components
//! deciding at construction time where they run.

use crate::error::Result;
use crate::model::{ContentItem, ItemId};
use crate::nonce::NonceProvider;
use crate::permissions::Permissions;
use crate::query::ListingQuery;
use crate::store::ContentStore;
use std::collections::BTreeMap;

/// Which side of the host this process is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Editorial/administrative area: edit forms, save handlers.
    Editorial,
    /// Public-facing site: listing queries.
    Public,
}

/// A submitted edit form: flat field name/value pairs. An unchecked checkbox
/// simply has no entry.
#[derive(Debug, Default, Clone)]
pub struct FormSubmission {
    fields: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Fired while the editor's publish-controls region is rendered. Returns the
/// markup fragment to append.
pub trait PublishBoxHook {
    fn render(
        &self,
        store: &dyn ContentStore,
        nonces: &mut dyn NonceProvider,
        item: &ContentItem,
    ) -> Result<String>;
}

/// Fired after a content item is saved in the editor.
pub trait SavePostHook {
    fn on_save(
        &self,
        store: &mut dyn ContentStore,
        permissions: &dyn Permissions,
        nonces: &dyn NonceProvider,
        item_id: ItemId,
        form: &FormSubmission,
    ) -> Result<()>;
}

/// Fired before a public listing query executes, with the mutable query.
pub trait PreQueryHook {
    fn adjust(&self, query: &mut ListingQuery);
}

/// Registry of callbacks per hook point.
#[derive(Default)]
pub struct HookRegistry {
    publish_box: Vec<Box<dyn PublishBoxHook>>,
    save_post: Vec<Box<dyn SavePostHook>>,
    pre_query: Vec<Box<dyn PreQueryHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_publish_box(&mut self, hook: Box<dyn PublishBoxHook>) {
        self.publish_box.push(hook);
    }

    pub fn register_save_post(&mut self, hook: Box<dyn SavePostHook>) {
        self.save_post.push(hook);
    }

    pub fn register_pre_query(&mut self, hook: Box<dyn PreQueryHook>) {
        self.pre_query.push(hook);
    }

    /// Render every registered publish-box fragment, concatenated in
    /// registration order.
    pub fn fire_publish_box(
        &self,
        store: &dyn ContentStore,
        nonces: &mut dyn NonceProvider,
        item: &ContentItem,
    ) -> Result<String> {
        let mut out = String::new();
        for hook in &self.publish_box {
            out.push_str(&hook.render(store, nonces, item)?);
        }
        Ok(out)
    }

    pub fn fire_save_post(
        &self,
        store: &mut dyn ContentStore,
        permissions: &dyn Permissions,
        nonces: &dyn NonceProvider,
        item_id: ItemId,
        form: &FormSubmission,
    ) -> Result<()> {
        for hook in &self.save_post {
            hook.on_save(store, permissions, nonces, item_id, form)?;
        }
        Ok(())
    }

    pub fn fire_pre_query(&self, query: &mut ListingQuery) {
        for hook in &self.pre_query {
            hook.adjust(query);
        }
    }

    pub fn publish_box_count(&self) -> usize {
        self.publish_box.len()
    }

    pub fn save_post_count(&self) -> usize {
        self.save_post.len()
    }

    pub fn pre_query_count(&self) -> usize {
        self.pre_query.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    impl PreQueryHook for Marker {
        fn adjust(&self, query: &mut ListingQuery) {
            query.set_meta_filter(crate::query::MetaFilter::all_of(Vec::new()));
        }
    }

    #[test]
    fn fire_pre_query_runs_registered_hooks() {
        let mut registry = HookRegistry::new();
        registry.register_pre_query(Box::new(Marker));

        let mut query = ListingQuery::homepage_main();
        registry.fire_pre_query(&mut query);
        assert!(query.meta_filter().is_some());
    }

    #[test]
    fn empty_registry_fires_are_no_ops() {
        let registry = HookRegistry::new();
        let mut query = ListingQuery::homepage_main();
        registry.fire_pre_query(&mut query);
        assert!(query.meta_filter().is_none());
    }

    #[test]
    fn form_fields_are_optional() {
        let form = FormSubmission::new().with_field("a", "1");
        assert_eq!(form.get("a"), Some("1"));
        assert_eq!(form.get("b"), None);
    }
}
