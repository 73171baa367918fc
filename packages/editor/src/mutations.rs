//! # Structural Mutations
//!
//! User intents and the tree operations behind them.
//!
//! ## Mutation Semantics
//!
//! ### AddElement
//! - Always appends; the target list comes from the insertion policy
//! - A target that no longer resolves falls back to the root list
//! - Column nodes are refused; only grid creation makes them
//!
//! ### MoveElement
//! - Addressed by position: index within a source list, index within a
//!   target list
//! - Same index in the same list is a no-op, however the list is addressed
//! - A grid's own child list is never a source (columns do not move alone)
//! - A target inside the moved subtree is a no-op (would create cycle)
//! - A dangling target falls back to the root list
//!
//! ### ChangeContent / ChangeStyle
//! - Atomic replacement of `content`; shallow merge into `style`
//!
//! ### DeleteElement
//! - Removes node and all descendants
//! - Column slots cannot be deleted on their own

use pagesmith_model::{
    Address, ContentNode, IdGenerator, NewNode, NodeKind, ResolvedContainer, Style, Tree,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User intents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Append a new node at the policy's insertion target
    AddElement { node: NewNode },

    /// Drag-reorder a node, possibly across containers and grid columns
    MoveElement {
        source_index: usize,
        target_index: usize,
        #[serde(default)]
        source_parent: Address,
        #[serde(default)]
        target_parent: Address,
    },

    /// Replace a node's content
    ChangeContent { node_id: String, content: String },

    /// Merge a style patch into the selected node
    ChangeStyle { patch: Style },

    /// Change the current selection
    SelectElement { node_id: Option<String> },

    /// Remove a node and its subtree
    DeleteElement { node_id: String },
}

impl Mutation {
    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddElement { .. } => "AddElement",
            Mutation::MoveElement { .. } => "MoveElement",
            Mutation::ChangeContent { .. } => "ChangeContent",
            Mutation::ChangeStyle { .. } => "ChangeStyle",
            Mutation::SelectElement { .. } => "SelectElement",
            Mutation::DeleteElement { .. } => "DeleteElement",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Index {index} out of range for {address} (len {len})")]
    IndexOutOfRange {
        address: String,
        index: usize,
        len: usize,
    },

    #[error("Source and target are identical")]
    NoOpRequest,

    #[error("Would create cycle")]
    CycleDetected,

    #[error("Column slots belong to their grid: {0}")]
    ColumnSlot(String),

    #[error("{0} nodes are only created together with their grid")]
    UnplaceableKind(NodeKind),

    #[error("No element selected")]
    NothingSelected,
}

/// Result of handing a mutation to a session
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// Mutation took effect
    Applied { version: u64 },

    /// Mutation was ignored; the snapshot is unchanged
    Noop { reason: MutationError },
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied { .. })
    }
}

/// Append a node built from `node` to the list at `target`.
///
/// Returns the new node's id and the address it actually landed in.
pub fn add_node(
    tree: &mut Tree,
    ids: &mut IdGenerator,
    node: NewNode,
    target: &Address,
) -> Result<(String, Address), MutationError> {
    if node.kind == NodeKind::Column {
        return Err(MutationError::UnplaceableKind(node.kind));
    }

    let resolved = tree.resolve(target).unwrap_or_else(|| {
        tracing::warn!(address = %target, "insertion target not found, appending to root");
        ResolvedContainer::root()
    });

    let id = ids.new_id();
    let node = node.into_node(id.clone(), Address::Root);
    let end = tree.container(&resolved).len();

    let address = match tree.insert(&resolved, end, node) {
        Ok(()) => resolved.address,
        Err(node) => {
            tracing::warn!(address = %target, "insertion target vanished, appending to root");
            tree.insert_root(usize::MAX, node);
            Address::Root
        }
    };

    tracing::debug!(id = %id, parent = %address, "added node");
    Ok((id, address))
}

/// Whether moving `source_index` of `source` to `target_index` of `target`
/// would leave the tree as it is. Both addresses are compared in canonical
/// form, so a column id and its grid slot name the same list.
pub fn is_noop_move(
    tree: &Tree,
    source_index: usize,
    target_index: usize,
    source: &Address,
    target: &Address,
) -> bool {
    if source_index != target_index {
        return false;
    }
    if source == target {
        return true;
    }

    match (tree.resolve(source), tree.resolve(target)) {
        (Some(from), Some(to)) => from.address == to.address,
        _ => false,
    }
}

/// Relocate the node at `source_index` of `source` to `target_index` of
/// `target`. Returns the moved node's id.
pub fn move_node(
    tree: &mut Tree,
    source_index: usize,
    target_index: usize,
    source: &Address,
    target: &Address,
) -> Result<String, MutationError> {
    if is_noop_move(tree, source_index, target_index, source, target) {
        return Err(MutationError::NoOpRequest);
    }

    let from = tree
        .resolve(source)
        .ok_or_else(|| unresolved_source(tree, source))?;

    let len = tree.container(&from).len();
    if source_index >= len {
        return Err(MutationError::IndexOutOfRange {
            address: source.to_string(),
            index: source_index,
            len,
        });
    }

    // Cycle check against the pre-removal layout
    let moving_path = from.child_path(source_index);
    if let Some(to) = tree.resolve(target) {
        if to.is_within(&moving_path) {
            return Err(MutationError::CycleDetected);
        }
    }

    let list = tree
        .container_mut(&from)
        .ok_or_else(|| MutationError::AddressNotFound(source.to_string()))?;
    let node = list.remove(source_index);
    let id = node.id.clone();

    // Re-resolve: removal may have shifted indices on the way to the target
    let placed = match tree.resolve(target) {
        Some(to) => tree.insert(&to, target_index, node).map(|()| to.address),
        None => Err(node),
    };

    match placed {
        Ok(address) => {
            tracing::debug!(id = %id, from = %from.address, to = %address, "moved node");
        }
        Err(node) => {
            tracing::warn!(id = %id, to = %target, "move target not found, moving to root");
            tree.insert_root(target_index, node);
        }
    }

    Ok(id)
}

fn unresolved_source(tree: &Tree, source: &Address) -> MutationError {
    match source {
        // The grid's own children are its column slots
        Address::Container(id) if tree.find_node(id).is_some_and(ContentNode::is_grid) => {
            MutationError::ColumnSlot(id.clone())
        }
        _ => MutationError::AddressNotFound(source.to_string()),
    }
}

/// Replace the content of node `id`
pub fn change_content(tree: &mut Tree, id: &str, content: &str) -> Result<(), MutationError> {
    if tree.replace_subtree(id, |node| node.content = content.to_string()) {
        Ok(())
    } else {
        Err(MutationError::NodeNotFound(id.to_string()))
    }
}

/// Shallow-merge `patch` into the style of node `id`
pub fn patch_style(tree: &mut Tree, id: &str, patch: &Style) -> Result<(), MutationError> {
    let merged = tree.replace_subtree(id, |node| {
        node.style
            .extend(patch.iter().map(|(key, value)| (key.clone(), value.clone())));
    });

    if merged {
        Ok(())
    } else {
        Err(MutationError::NodeNotFound(id.to_string()))
    }
}

/// Remove node `id` with its subtree and return it
pub fn delete_node(tree: &mut Tree, id: &str) -> Result<ContentNode, MutationError> {
    let path = tree
        .path_of(id)
        .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;

    if tree.node_at(&path).is_some_and(|node| node.kind == NodeKind::Column) {
        return Err(MutationError::ColumnSlot(id.to_string()));
    }

    let removed = tree
        .remove_at(&path)
        .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;

    tracing::debug!(id = %id, removed = removed.subtree_len(), "deleted node");
    Ok(removed)
}
