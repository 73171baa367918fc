//! # Document Handle
//!
//! A [`Document`] holds the current tree snapshot and a version number.
//!
//! Mutations never touch the published snapshot. Each one runs against a
//! working copy, and only a successful run replaces the snapshot, so a
//! reader holding an earlier [`Arc<Tree>`] keeps seeing a consistent tree
//! and a failed mutation leaves no trace.
//!
//! ```text
//! snapshot v1 ──clone──▶ working copy ──mutate──▶ snapshot v2
//!      │                       │
//!  (readers)              (error: dropped, v1 stays)
//! ```

use crate::errors::EditorError;
use crate::mutations::MutationError;
use pagesmith_model::Tree;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Current version number (increments on each applied mutation)
    pub version: u64,

    snapshot: Arc<Tree>,
}

impl Document {
    /// Empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Document over an existing tree, rejected if the tree is malformed
    pub fn from_tree(tree: Tree) -> Result<Self, EditorError> {
        tree.validate()?;
        Ok(Self {
            version: 0,
            snapshot: Arc::new(tree),
        })
    }

    /// Current tree
    pub fn tree(&self) -> &Tree {
        &self.snapshot
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<Tree> {
        Arc::clone(&self.snapshot)
    }

    /// Run `op` against a copy of the current tree and publish the result
    /// as the next snapshot if it succeeds.
    pub fn apply<T, F>(&mut self, op: F) -> Result<T, MutationError>
    where
        F: FnOnce(&mut Tree) -> Result<T, MutationError>,
    {
        let mut next = Tree::clone(&self.snapshot);
        let value = op(&mut next)?;

        self.snapshot = Arc::new(next);
        self.version += 1;
        Ok(value)
    }
}
