use std::sync::OnceLock;

use regex::Regex;

/// Camel-case page names such as `WardWiki`: two or more capitalised humps with
/// no separators between them.
pub struct WikiWord;

/// The first WikiWord found inside a word, with byte offsets into that word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WikiWordMatch<'a> {
    pub start: usize,
    pub end: usize,
    pub name: &'a str,
}

impl WikiWord {
    /// Same-site links are the page name under the site root.
    pub const HREF_PREFIX: &'static str = "/";

    fn regex() -> &'static Regex {
        static WIKI_WORD_REGEX: OnceLock<Regex> = OnceLock::new();
        WIKI_WORD_REGEX.get_or_init(|| {
            Regex::new(r"[A-Z][a-z]+[A-Z][a-z][A-Za-z]+").expect("Invalid WikiWord regex")
        })
    }

    /// Finds the first WikiWord in `word`. Later matches in the same word are
    /// left as literal text.
    pub fn find(word: &str) -> Option<WikiWordMatch<'_>> {
        Self::regex().find(word).map(|m| WikiWordMatch {
            start: m.start(),
            end: m.end(),
            name: m.as_str(),
        })
    }

    /// True when the whole of `s` is a single WikiWord.
    pub fn is_wiki_word(s: &str) -> bool {
        Self::find(s).is_some_and(|m| m.start == 0 && m.end == s.len())
    }

    pub fn href(name: &str) -> String {
        format!("{}{name}", Self::HREF_PREFIX)
    }
}
