use super::kinds::ListMarker;
use crate::parsing::inline::kinds::HorizontalRule;

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently, without reference to surrounding
/// context; the builder decides what the classification means for the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// Starts (after optional indentation) with one or more `*`.
    ListItem {
        /// Number of consecutive markers.
        depth: usize,
        /// Text after the markers, with separating spaces/tabs removed.
        content: &'a str,
    },
    /// Any other line. Content is verbatim apart from a trailing `\r`, except
    /// that a line starting with a rule marker is trimmed.
    Text(&'a str),
}

/// Classifies a line (without its `\n` terminator).
pub fn classify(line: &str) -> LineClass<'_> {
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() {
        return LineClass::Blank;
    }

    if let Some((depth, rest)) = ListMarker::strip_prefix(line.trim_start()) {
        return LineClass::ListItem {
            depth,
            content: rest.trim_start_matches([' ', '\t']),
        };
    }

    // Surrounding whitespace never keeps a rule line from being a rule.
    let trimmed = line.trim();
    if trimmed.as_bytes().starts_with(HorizontalRule::MARKER) {
        return LineClass::Text(trimmed);
    }

    LineClass::Text(line)
}
