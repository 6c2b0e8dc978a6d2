use crate::model::ItemId;
use std::collections::HashSet;

/// Authorization seam for the save path.
///
/// The host decides who may edit what; this crate only asks. The item id is
/// part of the question so hosts with per-item ACLs can answer precisely.
pub trait Permissions {
    /// Whether the acting user may edit items of `kind` (specifically the
    /// item identified by `item_id`).
    fn can_edit(&self, kind: &str, item_id: ItemId) -> bool;
}

/// Capability set granting edit rights per content kind, for hosts (and
/// tests) without their own permission system.
#[derive(Debug, Default, Clone)]
pub struct CapabilityMap {
    editable_kinds: HashSet<String>,
}

impl CapabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant_edit(mut self, kind: impl Into<String>) -> Self {
        self.editable_kinds.insert(kind.into());
        self
    }

    pub fn revoke_edit(&mut self, kind: &str) {
        self.editable_kinds.remove(kind);
    }
}

impl Permissions for CapabilityMap {
    fn can_edit(&self, kind: &str, _item_id: ItemId) -> bool {
        self.editable_kinds.contains(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_are_per_kind() {
        let caps = CapabilityMap::new().grant_edit("post");
        assert!(caps.can_edit("post", 1));
        assert!(!caps.can_edit("page", 1));
    }

    #[test]
    fn default_denies_everything() {
        let caps = CapabilityMap::new();
        assert!(!caps.can_edit("post", 1));
    }
}
