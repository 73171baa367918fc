//! Structural checks for a tree snapshot.

use crate::address::Address;
use crate::error::{ModelError, ModelResult};
use crate::node::{ContentNode, NodeKind};
use crate::tree::Tree;
use std::collections::HashSet;

impl Tree {
    /// Check every structural invariant, stopping at the first violation:
    ///
    /// - ids are unique across the whole tree
    /// - each node's `parent_id` names the list that holds it
    /// - grids hold exactly `column_count` column nodes
    /// - column nodes appear only directly inside grids
    /// - containers have a children list, leaves do not
    pub fn validate(&self) -> ModelResult<()> {
        let mut seen = HashSet::new();
        for node in self.roots() {
            check_node(node, &Address::Root, &mut seen)?;
        }
        Ok(())
    }
}

fn check_node<'a>(
    node: &'a ContentNode,
    expected_parent: &Address,
    seen: &mut HashSet<&'a str>,
) -> ModelResult<()> {
    if !seen.insert(node.id.as_str()) {
        return Err(ModelError::DuplicateId(node.id.clone()));
    }

    if node.parent_id != *expected_parent {
        return Err(ModelError::parent_mismatch(
            node.id.clone(),
            expected_parent,
            &node.parent_id,
        ));
    }

    match node.kind {
        NodeKind::Column => Err(ModelError::UnexpectedColumn(node.id.clone())),
        NodeKind::Grid => check_grid(node, seen),
        kind if kind.is_container() => {
            let children = node
                .children
                .as_ref()
                .ok_or_else(|| ModelError::MissingChildren(node.id.clone()))?;
            let address = Address::container(node.id.clone());
            for child in children {
                check_node(child, &address, seen)?;
            }
            Ok(())
        }
        _ => match node.children {
            Some(_) => Err(ModelError::LeafWithChildren(node.id.clone())),
            None => Ok(()),
        },
    }
}

fn check_grid<'a>(grid: &'a ContentNode, seen: &mut HashSet<&'a str>) -> ModelResult<()> {
    let columns = grid.children();
    let expected = grid
        .grid_config
        .as_ref()
        .map(|config| config.column_count)
        .unwrap_or(0);

    if grid.children.is_none() || columns.len() != expected {
        return Err(ModelError::MalformedGridState {
            grid_id: grid.id.clone(),
            expected,
            found: columns.len(),
        });
    }

    let grid_address = Address::container(grid.id.clone());
    for (index, column) in columns.iter().enumerate() {
        if column.kind != NodeKind::Column {
            return Err(ModelError::UnexpectedGridChild {
                grid_id: grid.id.clone(),
                child_id: column.id.clone(),
            });
        }
        if !seen.insert(column.id.as_str()) {
            return Err(ModelError::DuplicateId(column.id.clone()));
        }
        if column.parent_id != grid_address {
            return Err(ModelError::parent_mismatch(
                column.id.clone(),
                &grid_address,
                &column.parent_id,
            ));
        }

        let slot = Address::grid_slot(grid.id.clone(), index);
        let members = column
            .children
            .as_ref()
            .ok_or_else(|| ModelError::MissingChildren(column.id.clone()))?;
        for member in members {
            check_node(member, &slot, seen)?;
        }
    }

    Ok(())
}
