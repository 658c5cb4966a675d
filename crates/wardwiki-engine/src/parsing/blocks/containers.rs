use crate::models::{Document, NodeId, NodeKind};

/// The stack of open contexts while building a document.
///
/// The bottom entry is always the root; the top entry is the active context
/// that receives new children. Closing a context is just popping it: the node
/// is already attached to its parent.
#[derive(Debug, Clone)]
pub struct ContextStack(Vec<NodeId>);

impl Default for ContextStack {
    fn default() -> Self {
        Self(vec![NodeId::ROOT])
    }
}

impl ContextStack {
    pub fn active(&self) -> NodeId {
        self.0.last().copied().unwrap_or(NodeId::ROOT)
    }

    pub fn open(&mut self, id: NodeId) {
        self.0.push(id);
    }

    /// Closes the active context. The root is never closed.
    pub fn close(&mut self) {
        if self.0.len() > 1 {
            self.0.pop();
        }
    }

    /// Closes everything back to the root.
    pub fn close_to_root(&mut self) {
        self.0.truncate(1);
    }

    /// Closes inline contexts and paragraphs until a list or the root is active.
    pub fn close_to_block(&mut self, doc: &Document) {
        while !matches!(
            doc.node(self.active()).kind(),
            NodeKind::Root | NodeKind::List { .. }
        ) {
            self.close();
        }
    }

    /// Depth of the active context if it is a list.
    pub fn active_list_depth(&self, doc: &Document) -> Option<usize> {
        match doc.node(self.active()).kind() {
            NodeKind::List { depth } => Some(*depth),
            _ => None,
        }
    }

    /// Number of open contexts, counting the root.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}
