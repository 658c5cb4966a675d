use std::fmt::Write as _;

/// Index of a node inside a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node always lives at index 0.
    pub const ROOT: NodeId = NodeId(0);

    /// Position in the arena, in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The kind of a document node, carrying only the fields relevant to that kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Paragraph,
    /// Opened by a `'''` toggle.
    Bold,
    /// Opened by a `''` toggle.
    Italic,
    /// An inline hyperlink. `href` is either a same-site path (`/WardWiki`) or an
    /// absolute URL copied verbatim from the source.
    Link { href: String },
    /// One nesting level of a bulleted list. Each child is one item.
    List { depth: usize },
    HorizontalRule,
}

/// A child of a node: either another node or a literal text span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Node(NodeId),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Child>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: vec![],
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Children in document order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// The last child if it is a node (not a text span).
    pub fn last_node_child(&self) -> Option<NodeId> {
        match self.children.last() {
            Some(Child::Node(id)) => Some(*id),
            _ => None,
        }
    }
}

/// A parsed wiki page.
///
/// Nodes are stored in an arena and refer to each other by [`NodeId`]. Ownership
/// flows parent to child through the children list; there are no back references.
/// A `Document` is only mutated by the builder while parsing and is immutable
/// once returned from [`crate::parsing::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root)],
        }
    }

    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Looks up a node. Ids only come from this document, so lookup cannot fail.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.root().children.is_empty()
    }

    /// Appends a new node of `kind` as the last child of `parent`.
    pub(crate) fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        self.nodes[parent.0].children.push(Child::Node(id));
        id
    }

    /// Appends literal text to `parent`, merging with a trailing text child.
    /// Empty text is discarded.
    pub(crate) fn push_text(&mut self, parent: NodeId, text: &str) {
        if text.is_empty() {
            return;
        }
        let children = &mut self.nodes[parent.0].children;
        match children.last_mut() {
            Some(Child::Text(existing)) => existing.push_str(text),
            _ => children.push(Child::Text(text.to_string())),
        }
    }

    /// An indented, deterministic dump of the tree, one node or text span per line.
    ///
    /// ```text
    /// Root
    ///   Paragraph
    ///     "see "
    ///     Link(/WardWiki)
    ///       "WardWiki"
    /// ```
    pub fn outline(&self) -> String {
        let mut out = String::new();
        let root = Child::Node(NodeId::ROOT);
        let mut stack = vec![(&root, 0)];
        while let Some((child, level)) = stack.pop() {
            let indent = "  ".repeat(level);
            let id = match child {
                Child::Text(text) => {
                    let _ = writeln!(out, "{indent}{text:?}");
                    continue;
                }
                Child::Node(id) => *id,
            };
            let node = self.node(id);
            let label = match &node.kind {
                NodeKind::Root => "Root".to_string(),
                NodeKind::Paragraph => "Paragraph".to_string(),
                NodeKind::Bold => "Bold".to_string(),
                NodeKind::Italic => "Italic".to_string(),
                NodeKind::Link { href } => format!("Link({href})"),
                NodeKind::List { depth } => format!("List({depth})"),
                NodeKind::HorizontalRule => "HorizontalRule".to_string(),
            };
            let _ = writeln!(out, "{indent}{label}");
            stack.extend(node.children.iter().rev().map(|c| (c, level + 1)));
        }
        out
    }
}
