//! # Tree Rendering
//!
//! Stateless mapping from a parsed [`Document`] to display-neutral
//! [`OutputNode`]s. The output has the same shape as the document tree; display
//! layers (HTML, terminal) only need to map each output kind to a primitive.

pub mod html;

use std::collections::HashSet;

use crate::models::{Child, Document, NodeId, NodeKind};

/// How a link should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Same-site page (`href` starts with `/`).
    Internal,
    /// Same-site page that is not among the known page names.
    MissingPage,
    /// Absolute URL to another site.
    External,
}

/// A generic display node.
///
/// Trees can be as deep as the source nests lists, so walks over them use an
/// explicit stack and dropping one does not recurse.
#[derive(Debug, PartialEq, Eq)]
pub enum OutputNode {
    /// The children of the root, with no wrapper.
    Fragment(Vec<OutputNode>),
    Text(String),
    Strong(Vec<OutputNode>),
    Emphasis(Vec<OutputNode>),
    Link {
        href: String,
        kind: LinkKind,
        children: Vec<OutputNode>,
    },
    /// A paragraph.
    Block(Vec<OutputNode>),
    /// A bulleted list; every element is a [`OutputNode::ListItem`].
    List(Vec<OutputNode>),
    ListItem(Vec<OutputNode>),
    Divider,
}

impl OutputNode {
    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[OutputNode] {
        match self {
            OutputNode::Fragment(c)
            | OutputNode::Strong(c)
            | OutputNode::Emphasis(c)
            | OutputNode::Block(c)
            | OutputNode::List(c)
            | OutputNode::ListItem(c) => c,
            OutputNode::Link { children, .. } => children,
            OutputNode::Text(_) | OutputNode::Divider => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<OutputNode>> {
        match self {
            OutputNode::Fragment(c)
            | OutputNode::Strong(c)
            | OutputNode::Emphasis(c)
            | OutputNode::Block(c)
            | OutputNode::List(c)
            | OutputNode::ListItem(c) => Some(c),
            OutputNode::Link { children, .. } => Some(children),
            OutputNode::Text(_) | OutputNode::Divider => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                OutputNode::Text(t) => out.push_str(t),
                other => stack.extend(other.children().iter().rev()),
            }
        }
        out
    }
}

impl Drop for OutputNode {
    fn drop(&mut self) {
        let Some(children) = self.children_mut() else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            // Each node is dropped with its children already moved out.
            if let Some(grandchildren) = node.children_mut() {
                pending.append(grandchildren);
            }
        }
    }
}

/// Maps documents to output nodes.
///
/// With a set of known page names, internal links to unknown pages are marked
/// [`LinkKind::MissingPage`]; without one, every internal link is
/// [`LinkKind::Internal`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    known_pages: Option<HashSet<String>>,
}

/// A document node whose children are still being rendered.
struct Pending {
    id: NodeId,
    next_child: usize,
    rendered: Vec<OutputNode>,
}

impl Pending {
    fn new(id: NodeId) -> Self {
        Self {
            id,
            next_child: 0,
            rendered: vec![],
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_known_pages<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_pages = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Renders children before their parent, keeping open nodes on a stack.
    pub fn render(&self, doc: &Document) -> OutputNode {
        let mut stack = vec![Pending::new(NodeId::ROOT)];
        loop {
            let Some(top) = stack.last_mut() else {
                return OutputNode::Fragment(vec![]);
            };
            match doc.node(top.id).children().get(top.next_child) {
                Some(Child::Text(text)) => {
                    top.next_child += 1;
                    top.rendered.push(OutputNode::Text(text.clone()));
                }
                Some(Child::Node(id)) => {
                    top.next_child += 1;
                    stack.push(Pending::new(*id));
                }
                None => {
                    let Some(done) = stack.pop() else {
                        return OutputNode::Fragment(vec![]);
                    };
                    let node = self.finish_node(doc.node(done.id).kind(), done.rendered);
                    match stack.last_mut() {
                        Some(parent) => parent.rendered.push(node),
                        None => return node,
                    }
                }
            }
        }
    }

    fn finish_node(&self, kind: &NodeKind, children: Vec<OutputNode>) -> OutputNode {
        match kind {
            NodeKind::Root => OutputNode::Fragment(children),
            NodeKind::Paragraph => OutputNode::Block(children),
            NodeKind::Bold => OutputNode::Strong(children),
            NodeKind::Italic => OutputNode::Emphasis(children),
            NodeKind::Link { href } => OutputNode::Link {
                href: href.clone(),
                kind: self.link_kind(href),
                children,
            },
            NodeKind::List { .. } => OutputNode::List(
                children
                    .into_iter()
                    .map(|item| OutputNode::ListItem(vec![item]))
                    .collect(),
            ),
            NodeKind::HorizontalRule => OutputNode::Divider,
        }
    }

    fn link_kind(&self, href: &str) -> LinkKind {
        let Some(page) = href.strip_prefix('/') else {
            return LinkKind::External;
        };
        match &self.known_pages {
            Some(known) if !known.contains(page) => LinkKind::MissingPage,
            _ => LinkKind::Internal,
        }
    }
}

/// Renders with default options.
pub fn render(doc: &Document) -> OutputNode {
    Renderer::new().render(doc)
}
