use std::sync::OnceLock;

use regex::Regex;

/// Human-readable title for a page slug: `WardWiki` becomes `Ward Wiki`.
///
/// A space is inserted wherever a lowercase letter is directly followed by an
/// uppercase one; nothing else changes.
pub fn page_title(slug: &str) -> String {
    static HUMP_REGEX: OnceLock<Regex> = OnceLock::new();
    let hump = HUMP_REGEX.get_or_init(|| Regex::new(r"([a-z])([A-Z])").expect("Invalid hump regex"));
    hump.replace_all(slug, "$1 $2").into_owned()
}
