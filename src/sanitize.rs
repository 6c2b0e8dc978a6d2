//! Plain-text sanitization for submitted form fields.
//!
//! Submitted values are persisted verbatim as metadata, so anything that
//! looks like markup or control characters is stripped before the write.

/// Sanitize a submitted field to plain text: remove tags, drop control
/// characters (including line breaks), collapse runs of whitespace to a
/// single space, and trim.
pub fn sanitize_text_field(input: &str) -> String {
    let stripped = strip_tags(input);

    let mut out = String::with_capacity(stripped.len());
    let mut last_was_space = false;
    for ch in stripped.chars() {
        if ch.is_control() {
            continue;
        }
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }

    out.trim().to_string()
}

/// Escape a string for use inside a double-quoted HTML attribute.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Remove `<...>` spans. An unterminated `<` swallows the rest of the input,
/// so a truncated tag cannot leak markup through.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_plain_value_through() {
        assert_eq!(sanitize_text_field("1"), "1");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(sanitize_text_field(""), "");
    }

    #[test]
    fn strips_markup() {
        assert_eq!(sanitize_text_field("<script>alert(1)</script>1"), "alert(1)1");
        assert_eq!(sanitize_text_field("<b>1</b>"), "1");
    }

    #[test]
    fn unterminated_tag_is_dropped() {
        assert_eq!(sanitize_text_field("1<img src=x"), "1");
    }

    #[test]
    fn removes_control_chars_and_collapses_whitespace() {
        assert_eq!(sanitize_text_field("  a\t b\nc\u{7}  "), "a b c");
    }

    #[test]
    fn escapes_attribute_metacharacters() {
        assert_eq!(
            escape_attr("a\"b<c>&'"),
            "a&quot;b&lt;c&gt;&amp;&#039;"
        );
    }
}
