//! Plugin components and context wiring.
//!
//! The editorial and public components are separate types registered by
//! [`bootstrap`] for exactly the hook points their context fires. Neither
//! component inspects the context at call time; if it runs, it was wired on
//! purpose.

use crate::commands;
use crate::error::Result;
use crate::hooks::{
    ExecutionContext, FormSubmission, HookRegistry, PreQueryHook, PublishBoxHook, SavePostHook,
};
use crate::model::{ContentItem, ItemId};
use crate::nonce::NonceProvider;
use crate::permissions::Permissions;
use crate::query::ListingQuery;
use crate::store::ContentStore;

/// Editorial component: renders the publish-box toggle and handles saves.
pub struct ShyPostsEditor;

impl PublishBoxHook for ShyPostsEditor {
    fn render(
        &self,
        store: &dyn ContentStore,
        nonces: &mut dyn NonceProvider,
        item: &ContentItem,
    ) -> Result<String> {
        let control = commands::publish_box::run(store, nonces, item)?;
        Ok(control.to_html())
    }
}

impl SavePostHook for ShyPostsEditor {
    fn on_save(
        &self,
        store: &mut dyn ContentStore,
        permissions: &dyn Permissions,
        nonces: &dyn NonceProvider,
        item_id: ItemId,
        form: &FormSubmission,
    ) -> Result<()> {
        // Denials are deliberate no-ops; the outcome is not surfaced here.
        commands::save::run(store, permissions, nonces, item_id, form)?;
        Ok(())
    }
}

/// Public component: excludes flagged items from the homepage main query.
pub struct ShyPostsFilter;

impl PreQueryHook for ShyPostsFilter {
    fn adjust(&self, query: &mut ListingQuery) {
        commands::exclude::run(query);
    }
}

/// Wire the component for `context` into `registry`. Editorial gets the two
/// editing hooks; Public gets the single pre-query hook.
pub fn bootstrap(context: ExecutionContext, registry: &mut HookRegistry) {
    match context {
        ExecutionContext::Editorial => {
            registry.register_save_post(Box::new(ShyPostsEditor));
            registry.register_publish_box(Box::new(ShyPostsEditor));
        }
        ExecutionContext::Public => {
            registry.register_pre_query(Box::new(ShyPostsFilter));
        }
    }
}
