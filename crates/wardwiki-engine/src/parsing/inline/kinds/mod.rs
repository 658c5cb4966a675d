//! # Inline Kinds
//!
//! Inline constructs that own their syntax: delimiter constants and matchers
//! live here, never in scanner or builder code.
//!
//! ## Types
//!
//! - **`Emphasis`**: `BOLD = b"'''"`, `ITALIC = b"''"` toggle markers
//! - **`HorizontalRule`**: `MARKER = b"----"`
//! - **`WikiWord`**: camel-case page names (`WardWiki`) auto-linked to `/WardWiki`
//! - **`BareUrl`**: whole-word `http`/`https` URLs
//!
//! ## Precedence
//!
//! `BOLD` is tested before `ITALIC` so three marks are never read as a two-mark
//! toggle followed by a stray quote. Within a word, `WikiWord` is tried before
//! `BareUrl`.

pub mod bare_url;
pub mod emphasis;
pub mod horizontal_rule;
pub mod wiki_word;

pub use bare_url::BareUrl;
pub use emphasis::Emphasis;
pub use horizontal_rule::HorizontalRule;
pub use wiki_word::{WikiWord, WikiWordMatch};
