//! # Inline Parsing
//!
//! Cursor-based scanning of one line into tokens, and classification of plain
//! words into literal text or auto-links.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` for byte/character scanning within a line
//! - **`kinds`**: delimiter constants and matchers (emphasis, rule, WikiWord, URL)
//! - **`scanner`**: `next_token()` / `tokenize()` producing `Token`s
//! - **`recognizer`**: `recognize()` splitting a word into `Piece`s
//!
//! ## Words and Spacing
//!
//! A word runs until the next space, quote, star, or line break, but always
//! includes the character it starts on. Spaces are therefore never dropped:
//! `"see WardWiki"` scans as `"see"`, `" WardWiki"`.

pub mod cursor;
pub mod kinds;
pub mod recognizer;
pub mod scanner;

pub use recognizer::{Piece, recognize};
pub use scanner::{Token, next_token, tokenize};
