use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{LinkKind, OutputNode};

impl OutputNode {
    /// Serializes to an HTML fragment. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![Step::Open(self)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Close(tag) => {
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
                Step::Open(node) => {
                    if let Some(tag) = open_tag(node, &mut out) {
                        stack.push(Step::Close(tag));
                    }
                    stack.extend(node.children().iter().rev().map(Step::Open));
                }
            }
        }
        out
    }
}

enum Step<'a> {
    Open(&'a OutputNode),
    Close(&'static str),
}

/// Writes the opening markup of `node`, returning the tag to close after its
/// children, if any.
fn open_tag(node: &OutputNode, out: &mut String) -> Option<&'static str> {
    let tag = match node {
        OutputNode::Fragment(_) => return None,
        OutputNode::Text(text) => {
            out.push_str(&encode_text(text));
            return None;
        }
        OutputNode::Divider => {
            out.push_str("<hr />");
            return None;
        }
        OutputNode::Link { href, kind, .. } => {
            out.push_str("<a href=\"");
            out.push_str(&encode_double_quoted_attribute(href));
            out.push('"');
            match kind {
                LinkKind::Internal => {}
                LinkKind::MissingPage => out.push_str(" class=\"missing\""),
                LinkKind::External => out.push_str(" rel=\"nofollow\""),
            }
            out.push('>');
            return Some("a");
        }
        OutputNode::Strong(_) => "strong",
        OutputNode::Emphasis(_) => "em",
        OutputNode::Block(_) => "div",
        OutputNode::List(_) => "ul",
        OutputNode::ListItem(_) => "li",
    };
    out.push('<');
    out.push_str(tag);
    out.push('>');
    Some(tag)
}
