use std::borrow::Cow;

/// Six apostrophes in page source stand for one literal apostrophe.
pub const ESCAPED_QUOTE: &str = "''''''";

/// Replaces every `''''''` with a single `'`, scanning left to right without
/// overlap. Borrows the input when there is nothing to replace.
pub fn collapse_escaped_quotes(text: &str) -> Cow<'_, str> {
    if text.contains(ESCAPED_QUOTE) {
        Cow::Owned(text.replace(ESCAPED_QUOTE, "'"))
    } else {
        Cow::Borrowed(text)
    }
}
