use crate::models::{Document, NodeId, NodeKind};
use crate::parsing::inline::{Piece, Token, recognize, tokenize};

use super::{
    classify::{LineClass, classify},
    containers::ContextStack,
    lists::enter_list,
};

/// Single-pass state machine that assembles a [`Document`] line by line.
///
/// Every input produces a tree; there is no error state. Unclosed emphasis is
/// closed at end of line and open lists are closed by [`DocumentBuilder::finish`].
pub struct DocumentBuilder {
    doc: Document,
    stack: ContextStack,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            doc: Document::new(),
            stack: ContextStack::default(),
        }
    }

    /// Processes one line, without its `\n` terminator.
    pub fn push_line(&mut self, line: &str) {
        match classify(line) {
            // The paragraph was already closed at the end of the previous line;
            // open lists stay open.
            LineClass::Blank => {}
            LineClass::ListItem { depth, content } => {
                enter_list(&mut self.doc, &mut self.stack, depth);
                self.push_inline(content);
            }
            LineClass::Text(content) => {
                self.stack.close_to_root();
                self.push_inline(content);
            }
        }
        self.stack.close_to_block(&self.doc);
    }

    pub fn finish(mut self) -> Document {
        self.stack.close_to_root();
        self.doc
    }

    fn push_inline(&mut self, content: &str) {
        for token in tokenize(content) {
            match token {
                Token::Bold => self.toggle(NodeKind::Bold),
                Token::Italic => self.toggle(NodeKind::Italic),
                Token::HorizontalRule => {
                    self.doc
                        .push_node(self.stack.active(), NodeKind::HorizontalRule);
                }
                Token::Word(word) => self.push_word(word),
            }
        }
    }

    fn push_word(&mut self, word: &str) {
        let ctx = self.inline_context();
        for piece in recognize(word) {
            match piece {
                Piece::Text(text) => self.doc.push_text(ctx, text),
                Piece::Link { href, label } => {
                    let link = self.doc.push_node(ctx, NodeKind::Link { href });
                    self.doc.push_text(link, label);
                }
            }
        }
    }

    /// Closes the active span if it is of `kind`, otherwise opens a new one.
    fn toggle(&mut self, kind: NodeKind) {
        let ctx = self.inline_context();
        if self.doc.node(ctx).kind() == &kind {
            self.stack.close();
        } else {
            let span = self.doc.push_node(ctx, kind);
            self.stack.open(span);
        }
    }

    /// The context for inline content, opening a paragraph if the root or a
    /// list is active. Text never attaches to either directly.
    fn inline_context(&mut self) -> NodeId {
        let active = self.stack.active();
        match self.doc.node(active).kind() {
            NodeKind::Root | NodeKind::List { .. } => {
                let para = self.doc.push_node(active, NodeKind::Paragraph);
                self.stack.open(para);
                para
            }
            _ => active,
        }
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
