//! Parsing and rendering engine for WardWiki page markup.
//!
//! ```
//! use wardwiki_engine::{parse, render};
//!
//! let doc = parse("see WardWiki page");
//! let html = render(&doc).to_html();
//! assert_eq!(html, r#"<div>see <a href="/WardWiki">WardWiki</a> page</div>"#);
//! ```

pub mod io;
pub mod models;
pub mod parsing;
pub mod preprocess;
pub mod render;
pub mod title;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{Child, Document, Node, NodeId, NodeKind};
pub use parsing::inline::kinds::WikiWord;
pub use parsing::parse;
pub use render::{LinkKind, OutputNode, Renderer, render};
pub use title::page_title;
