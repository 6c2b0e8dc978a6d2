//! Reference listing runner.
//!
//! Hosts normally have their own query engine; this one exists so the
//! crate's behavior can be exercised end to end without one. It fires the
//! registered pre-query hooks and then evaluates the query's metadata filter
//! over every stored item, newest first.

use crate::error::Result;
use crate::hooks::HookRegistry;
use crate::model::ContentItem;
use crate::query::ListingQuery;
use crate::store::ContentStore;

pub fn run_listing<S: ContentStore + ?Sized>(
    store: &S,
    registry: &HookRegistry,
    mut query: ListingQuery,
) -> Result<Vec<ContentItem>> {
    registry.fire_pre_query(&mut query);

    let mut items: Vec<ContentItem> = store
        .list_items()?
        .into_iter()
        .filter(|item| match query.meta_filter() {
            Some(filter) => filter.matches(&item.meta),
            None => true,
        })
        .collect();

    items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    Ok(items)
}
