pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use crate::models::Document;
use crate::preprocess::collapse_escaped_quotes;

use blocks::DocumentBuilder;

/// Parses raw page source into a [`Document`].
///
/// The legacy `''''''` escape is collapsed first. Lines are split on `\n`;
/// carriage returns are ignored. Never fails: malformed markup degrades to
/// literal text or implicitly closed structure.
pub fn parse(text: &str) -> Document {
    let text = collapse_escaped_quotes(text);
    log::debug!("parsing {} bytes of page source", text.len());

    let mut builder = DocumentBuilder::new();
    for line in text.split('\n') {
        builder.push_line(line);
    }

    let doc = builder.finish();
    log::debug!("parsed document with {} nodes", doc.len());
    doc
}
