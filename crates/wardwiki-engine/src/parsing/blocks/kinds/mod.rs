//! # Block Kinds
//!
//! Line-level syntax owned by block constructs.
//!
//! - **`ListMarker`**: `MARKER = b'*'`, repeated to give the list depth

pub mod list;

pub use list::ListMarker;
