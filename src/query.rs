//! Listing-query descriptor and metadata filter model.
//!
//! `ListingQuery` stands in for the host's in-flight listing request: two
//! scope flags plus a structured metadata filter the query engine evaluates
//! at execution time. The filter is a tree of key/value/comparator clauses
//! joined by AND/OR, with nested groups so callers' grouping is never
//! disturbed when another condition is appended.

use crate::model::MetaValue;
use std::collections::BTreeMap;

/// How the nodes of a [`MetaFilter`] combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    And,
    Or,
}

/// Comparator for a single metadata clause.
///
/// `Equals`/`NotEquals` are false when the key is absent; presence is tested
/// only by `Exists`/`NotExists`. Filters that want "missing or different"
/// must say so explicitly with an OR of the two clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compare {
    Equals,
    NotEquals,
    Exists,
    NotExists,
}

/// One key/value/comparator condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaClause {
    pub key: String,
    pub value: Option<String>,
    pub compare: Compare,
}

impl MetaClause {
    pub fn new(key: impl Into<String>, compare: Compare, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
            compare,
        }
    }

    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Compare::Equals, Some(value.into()))
    }

    pub fn not_equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Compare::NotEquals, Some(value.into()))
    }

    pub fn exists(key: impl Into<String>) -> Self {
        Self::new(key, Compare::Exists, None)
    }

    pub fn not_exists(key: impl Into<String>) -> Self {
        Self::new(key, Compare::NotExists, None)
    }

    /// Evaluate this clause against an item's metadata map.
    pub fn matches(&self, meta: &BTreeMap<String, MetaValue>) -> bool {
        let stored = meta.get(&self.key).and_then(|v| v.field(&self.key));
        match self.compare {
            Compare::Exists => stored.is_some(),
            Compare::NotExists => stored.is_none(),
            Compare::Equals => match (stored, self.value.as_deref()) {
                (Some(stored), Some(wanted)) => stored == wanted,
                _ => false,
            },
            Compare::NotEquals => match (stored, self.value.as_deref()) {
                (Some(stored), Some(wanted)) => stored != wanted,
                _ => false,
            },
        }
    }
}

/// A node in the filter tree: a leaf clause or a nested group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaNode {
    Clause(MetaClause),
    Group(MetaFilter),
}

impl MetaNode {
    fn matches(&self, meta: &BTreeMap<String, MetaValue>) -> bool {
        match self {
            MetaNode::Clause(clause) => clause.matches(meta),
            MetaNode::Group(group) => group.matches(meta),
        }
    }
}

/// A set of clauses/groups joined by a single relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaFilter {
    pub relation: Relation,
    pub nodes: Vec<MetaNode>,
}

impl MetaFilter {
    pub fn new(relation: Relation, nodes: Vec<MetaNode>) -> Self {
        Self { relation, nodes }
    }

    pub fn all_of(nodes: Vec<MetaNode>) -> Self {
        Self::new(Relation::And, nodes)
    }

    pub fn any_of(nodes: Vec<MetaNode>) -> Self {
        Self::new(Relation::Or, nodes)
    }

    /// Evaluate the whole tree against an item's metadata map. An empty
    /// filter matches everything.
    pub fn matches(&self, meta: &BTreeMap<String, MetaValue>) -> bool {
        match self.relation {
            Relation::And => self.nodes.iter().all(|node| node.matches(meta)),
            Relation::Or => {
                self.nodes.is_empty() || self.nodes.iter().any(|node| node.matches(meta))
            }
        }
    }
}

/// An in-flight content-listing request.
///
/// Mirrors the host query engine's surface: whether this is the primary
/// query for the request, whether the request targets the homepage, and the
/// gettable/settable metadata filter.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    main_query: bool,
    front_page: bool,
    meta_filter: Option<MetaFilter>,
}

impl ListingQuery {
    pub fn new(main_query: bool, front_page: bool) -> Self {
        Self {
            main_query,
            front_page,
            meta_filter: None,
        }
    }

    /// The primary listing query for the homepage request.
    pub fn homepage_main() -> Self {
        Self::new(true, true)
    }

    pub fn is_main_query(&self) -> bool {
        self.main_query
    }

    pub fn is_front_page(&self) -> bool {
        self.front_page
    }

    pub fn meta_filter(&self) -> Option<&MetaFilter> {
        self.meta_filter.as_ref()
    }

    pub fn set_meta_filter(&mut self, filter: MetaFilter) {
        self.meta_filter = Some(filter);
    }

    pub fn with_meta_filter(mut self, filter: MetaFilter) -> Self {
        self.meta_filter = Some(filter);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MetaValue;

    fn meta(pairs: &[(&str, &str)]) -> BTreeMap<String, MetaValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), MetaValue::text(*v)))
            .collect()
    }

    #[test]
    fn equals_requires_presence() {
        let clause = MetaClause::equals("color", "red");
        assert!(clause.matches(&meta(&[("color", "red")])));
        assert!(!clause.matches(&meta(&[("color", "blue")])));
        assert!(!clause.matches(&meta(&[])));
    }

    #[test]
    fn not_equals_is_false_for_missing_key() {
        let clause = MetaClause::not_equals("shy_post", "1");
        assert!(clause.matches(&meta(&[("shy_post", "0")])));
        assert!(!clause.matches(&meta(&[("shy_post", "1")])));
        // Missing key is not "not equal", it is absent.
        assert!(!clause.matches(&meta(&[])));
    }

    #[test]
    fn exists_and_not_exists_test_presence_only() {
        assert!(MetaClause::exists("k").matches(&meta(&[("k", "")])));
        assert!(!MetaClause::exists("k").matches(&meta(&[])));
        assert!(MetaClause::not_exists("k").matches(&meta(&[])));
        assert!(!MetaClause::not_exists("k").matches(&meta(&[("k", "1")])));
    }

    #[test]
    fn or_filter_matches_any_node() {
        let filter = MetaFilter::any_of(vec![
            MetaNode::Clause(MetaClause::not_equals("shy_post", "1")),
            MetaNode::Clause(MetaClause::not_exists("shy_post")),
        ]);
        assert!(filter.matches(&meta(&[])));
        assert!(filter.matches(&meta(&[("shy_post", "")])));
        assert!(!filter.matches(&meta(&[("shy_post", "1")])));
    }

    #[test]
    fn and_filter_requires_all_nodes() {
        let filter = MetaFilter::all_of(vec![
            MetaNode::Clause(MetaClause::equals("a", "1")),
            MetaNode::Clause(MetaClause::equals("b", "2")),
        ]);
        assert!(filter.matches(&meta(&[("a", "1"), ("b", "2")])));
        assert!(!filter.matches(&meta(&[("a", "1")])));
    }

    #[test]
    fn nested_groups_keep_their_own_relation() {
        // AND( OR(a=1, b=2), c=3 )
        let filter = MetaFilter::all_of(vec![
            MetaNode::Group(MetaFilter::any_of(vec![
                MetaNode::Clause(MetaClause::equals("a", "1")),
                MetaNode::Clause(MetaClause::equals("b", "2")),
            ])),
            MetaNode::Clause(MetaClause::equals("c", "3")),
        ]);
        assert!(filter.matches(&meta(&[("b", "2"), ("c", "3")])));
        assert!(!filter.matches(&meta(&[("b", "2")])));
        assert!(!filter.matches(&meta(&[("c", "3")])));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = MetaFilter::all_of(Vec::new());
        assert!(filter.matches(&meta(&[])));
        let filter = MetaFilter::any_of(Vec::new());
        assert!(filter.matches(&meta(&[])));
    }

    #[test]
    fn legacy_record_values_resolve_by_clause_key() {
        let mut map = BTreeMap::new();
        let mut fields = BTreeMap::new();
        fields.insert("shy_post".to_string(), "1".to_string());
        map.insert("shy_post".to_string(), MetaValue::Record(fields));

        assert!(MetaClause::equals("shy_post", "1").matches(&map));
        assert!(!MetaClause::not_equals("shy_post", "1").matches(&map));
    }
}
