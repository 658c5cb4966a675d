//! # Block Parsing
//!
//! Line-oriented construction of the document tree.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` (blank, list item with depth, or text) from local facts only
//!
//! 2. **Tree Construction** (`builder`): a `DocumentBuilder` keeps a stack of
//!    open contexts and feeds each line's inline tokens into the active one
//!
//! ## Modules
//!
//! - **`kinds`**: line-level syntax (`ListMarker`)
//! - **`classify`**: `classify()` produces a `LineClass` for each line
//! - **`containers`**: `ContextStack` of open nodes, root at the bottom
//! - **`lists`**: `enter_list()` resolves list depth changes
//! - **`builder`**: `DocumentBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Text attaches to a paragraph (or an emphasis span inside one), never to the
//!   root or a list directly
//! - A line that is not a list item closes every open list
//! - Emphasis never spans lines
//! - After `finish()`, every node is reachable from the root

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod lists;

pub use builder::DocumentBuilder;
pub use classify::{LineClass, classify};
pub use containers::ContextStack;
