use crate::model::{SHY_POST_HIDDEN, SHY_POST_KEY};
use crate::query::{ListingQuery, MetaClause, MetaFilter, MetaNode};

/// Append the shy-post exclusion to the homepage's main listing query.
///
/// Acts only when the request targets the front page AND this is the primary
/// query for that request, so widget and admin queries on the same page are
/// never touched. When the query already carries a metadata filter, the
/// exclusion is nested as its own group ANDed with the existing filter;
/// merging it flush into the caller's clause list would regroup conditions
/// the caller wrote.
pub fn run(query: &mut ListingQuery) {
    if !(query.is_front_page() && query.is_main_query()) {
        return;
    }

    let exclusion = shy_exclusion_filter();

    let merged = match query.meta_filter() {
        Some(existing) => MetaFilter::all_of(vec![
            MetaNode::Group(existing.clone()),
            MetaNode::Group(exclusion),
        ]),
        None => exclusion,
    };

    query.set_meta_filter(merged);
}

/// "Not flagged": value differs from "1", or the key was never written.
/// NotEquals alone misses items without the key, hence the OR.
fn shy_exclusion_filter() -> MetaFilter {
    MetaFilter::any_of(vec![
        MetaNode::Clause(MetaClause::not_equals(SHY_POST_KEY, SHY_POST_HIDDEN)),
        MetaNode::Clause(MetaClause::not_exists(SHY_POST_KEY)),
    ])
}
