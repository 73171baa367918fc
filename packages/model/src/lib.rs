//! # Pagesmith Model
//!
//! The document tree: typed content nodes, container addressing and the
//! grid column slots that sit between a grid and its content.
//!
//! ```text
//! Tree (root list)
//!  ├─ heading1
//!  ├─ section ── paragraph, image, ...
//!  └─ grid
//!      ├─ column 0 ── paragraph, grid, ...   (grid:<gridId>:0)
//!      └─ column 1 ── ...                     (grid:<gridId>:1)
//! ```
//!
//! Every node records the [`Address`] of the list that holds it. The list
//! membership is the source of truth; [`Tree::validate`] checks that the two
//! agree.

pub mod address;
pub mod error;
pub mod grid;
pub mod id_generator;
pub mod node;
pub mod tree;
pub mod validate;
pub mod visitor;

pub use address::Address;
pub use error::{ModelError, ModelResult};
pub use grid::GridConfig;
pub use id_generator::{column_id, get_document_seed, IdGenerator};
pub use node::{ContentNode, NewNode, NodeKind, Style};
pub use tree::{NodePath, ResolvedContainer, Tree};
pub use visitor::{walk_node, walk_tree, Visitor};
