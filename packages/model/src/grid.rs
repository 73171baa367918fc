//! # Grid Adapter
//!
//! A grid's children are exactly `column_count` column nodes, created with
//! the grid and never added or removed on their own. Each column owns the
//! ordered list addressed as `grid:<gridId>:<column>`.
//!
//! This module translates between that composite addressing and the generic
//! tree paths used everywhere else, and heals grids whose column list has
//! gone missing or come up short.

use crate::address::Address;
use crate::id_generator::column_id;
use crate::node::{ContentNode, NodeKind};
use crate::tree::{ResolvedContainer, Tree};
use serde::{Deserialize, Serialize};

/// Column layout for a grid. Trusted as given by the configuration dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub column_count: usize,

    /// CSS width per column (e.g. `"33%"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<Vec<String>>,
}

impl GridConfig {
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            column_widths: None,
        }
    }

    pub fn with_widths<I, S>(mut self, widths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_widths = Some(widths.into_iter().map(Into::into).collect());
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Empty column node for slot `index` of `grid_id`
pub fn column_node(grid_id: &str, index: usize) -> ContentNode {
    let mut column = ContentNode::new(column_id(grid_id, index), NodeKind::Column);
    column.parent_id = Address::container(grid_id);
    column
}

/// Column slots for a freshly created grid
pub fn build_columns(grid_id: &str, config: &GridConfig) -> Vec<ContentNode> {
    (0..config.column_count)
        .map(|index| column_node(grid_id, index))
        .collect()
}

/// Fill in missing column entries (and missing column children lists) so
/// that every configured slot exists. Surplus columns are left alone.
///
/// Returns the number of slots that had to be created or repaired.
pub fn materialize_columns(grid: &mut ContentNode) -> usize {
    let Some(count) = grid.column_count() else {
        return 0;
    };

    let grid_id = grid.id.clone();
    let columns = grid.children.get_or_insert_with(Vec::new);
    let mut repaired = 0;

    for column in columns.iter_mut() {
        if column.children.is_none() {
            column.children = Some(Vec::new());
            repaired += 1;
        }
    }

    while columns.len() < count {
        columns.push(column_node(&grid_id, columns.len()));
        repaired += 1;
    }

    if repaired > 0 {
        tracing::warn!(
            grid_id = %grid_id,
            expected = count,
            repaired,
            "materialized missing grid column slots"
        );
    }

    repaired
}

/// Resolve `grid:<grid_id>:<column>` to the column's path.
///
/// The column node itself may not exist yet when the grid is undersized;
/// the path still points at where it will be materialized.
pub fn resolve_slot(tree: &Tree, grid_id: &str, column: usize) -> Option<ResolvedContainer> {
    let path = tree.path_of(grid_id)?;
    let grid = tree.node_at(&path)?;

    if !grid.is_grid() {
        tracing::debug!(grid_id, kind = %grid.kind, "grid slot address names a non-grid node");
        return None;
    }

    let count = grid.column_count().unwrap_or(0);
    if column >= count {
        tracing::debug!(grid_id, column, count, "grid slot beyond column count");
        return None;
    }

    let mut column_path = path;
    column_path.push(column);
    Some(ResolvedContainer::new(column_path, Address::grid_slot(grid_id, column)))
}

/// Canonical address of a column node found at `column_path`.
///
/// Column ids are an implementation detail; lists inside a column are
/// always addressed through their grid.
pub fn column_slot(tree: &Tree, column_path: &[usize]) -> Option<ResolvedContainer> {
    let (&index, grid_path) = column_path.split_last()?;
    let grid = tree.node_at(grid_path)?;

    if !grid.is_grid() {
        return None;
    }

    Some(ResolvedContainer::new(
        column_path.to_vec(),
        Address::grid_slot(grid.id.clone(), index),
    ))
}
