use super::{SaveOutcome, HIDE_FIELD, NONCE_FIELD, NONCE_NAMESPACE};
use crate::error::Result;
use crate::hooks::FormSubmission;
use crate::model::{ItemId, MetaValue, SHY_POST_KEY};
use crate::nonce::NonceProvider;
use crate::permissions::Permissions;
use crate::sanitize::sanitize_text_field;
use crate::store::ContentStore;

/// Persist the submitted flag for `item_id`.
///
/// Denials return a [`SaveOutcome`] and leave the store untouched; nothing is
/// surfaced to the editor in either case. A missing checkbox field writes an
/// empty string so a stale "1" is cleared rather than left behind.
pub fn run<S: ContentStore + ?Sized>(
    store: &mut S,
    permissions: &dyn Permissions,
    nonces: &dyn NonceProvider,
    item_id: ItemId,
    form: &FormSubmission,
) -> Result<SaveOutcome> {
    // The item's kind determines which capability is checked.
    let item = store.get_item(item_id)?;
    if !permissions.can_edit(&item.kind, item_id) {
        return Ok(SaveOutcome::PermissionDenied);
    }

    let token_ok = form
        .get(NONCE_FIELD)
        .map(|token| nonces.verify(token, NONCE_NAMESPACE))
        .unwrap_or(false);
    if !token_ok {
        return Ok(SaveOutcome::InvalidToken);
    }

    let value = sanitize_text_field(form.get(HIDE_FIELD).unwrap_or(""));
    store.set_meta(item_id, SHY_POST_KEY, MetaValue::Text(value))?;

    Ok(SaveOutcome::Saved)
}
