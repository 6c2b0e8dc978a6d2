use super::{HIDE_FIELD, NONCE_FIELD, NONCE_NAMESPACE};
use crate::error::Result;
use crate::model::{ContentItem, SHY_POST_HIDDEN, SHY_POST_KEY};
use crate::nonce::NonceProvider;
use crate::sanitize::escape_attr;
use crate::store::ContentStore;

const LABEL: &str = "Hide on the homepage?";
const TITLE: &str = "Removes this post from the homepage, but NOT from any other page";

/// The checkbox control plus its hidden anti-forgery field, as data. The
/// host can render it itself or take [`ToggleControl::to_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    pub field_name: String,
    pub label: String,
    pub checked: bool,
    pub nonce_field: String,
    pub nonce_token: String,
}

impl ToggleControl {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
            escape_attr(&self.nonce_field),
            escape_attr(&self.nonce_token)
        ));
        out.push_str("<div class=\"shyposts-publish-option\">");
        out.push_str(&format!(
            "<input type=\"checkbox\" id=\"{id}\" name=\"{id}\" value=\"1\"{checked} title=\"{title}\"> ",
            id = escape_attr(&self.field_name),
            checked = if self.checked { " checked" } else { "" },
            title = escape_attr(TITLE),
        ));
        out.push_str(&format!(
            "<label for=\"{}\" title=\"{}\">{}</label>",
            escape_attr(&self.field_name),
            escape_attr(TITLE),
            escape_attr(&self.label),
        ));
        out.push_str("</div>");
        out
    }
}

/// Build the publish-box toggle for `item`: read the current flag (absent
/// key is unchecked) and issue a token bound to the fixed namespace. Pure
/// read, no store writes.
pub fn run<S: ContentStore + ?Sized>(
    store: &S,
    nonces: &mut dyn NonceProvider,
    item: &ContentItem,
) -> Result<ToggleControl> {
    // Legacy record shapes resolve through MetaValue::field, same as the
    // filter path.
    let checked = store
        .get_meta(item.id, SHY_POST_KEY)?
        .and_then(|value| value.field(SHY_POST_KEY).map(str::to_string))
        .map(|value| value == SHY_POST_HIDDEN)
        .unwrap_or(false);

    Ok(ToggleControl {
        field_name: HIDE_FIELD.to_string(),
        label: LABEL.to_string(),
        checked,
        nonce_field: NONCE_FIELD.to_string(),
        nonce_token: nonces.issue(NONCE_NAMESPACE),
    })
}
