pub mod document;

pub use document::{Child, Document, Node, NodeId, NodeKind};
