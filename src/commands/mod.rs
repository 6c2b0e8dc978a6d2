//! Command layer: one module per operation, pure logic over the
//! [`ContentStore`](crate::store::ContentStore) trait.

pub mod exclude;
pub mod publish_box;
pub mod save;

/// Form field carrying the checkbox value. Absent when unchecked.
pub const HIDE_FIELD: &str = "shyposts_hide_field";

/// Form field carrying the anti-forgery token.
pub const NONCE_FIELD: &str = "shyposts_nonce";

/// Namespace the anti-forgery token is bound to.
pub const NONCE_NAMESPACE: &str = "shy-posts/publish-box";

/// Outcome of a save attempt.
///
/// Denials are values, not errors: the save path fails closed and quiet, so
/// nothing here is surfaced to the editor. The variants exist so the policy
/// is testable without UI-level observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The flag was written.
    Saved,
    /// The acting user lacks edit capability for the item's kind. No write.
    PermissionDenied,
    /// The anti-forgery token was missing or did not validate. No write.
    InvalidToken,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}
