//! Where newly added nodes land.

use pagesmith_model::{Address, ContentNode, NodeKind};

/// Decides the insertion target for an add, given the current selection
pub trait InsertionPolicy: std::fmt::Debug + Send + Sync {
    fn target_for(&self, selected: Option<&ContentNode>) -> Address;
}

/// Default policy:
///
/// 1. nothing selected, or a leaf selected → document root
/// 2. a grid selected → column `column` of that grid
/// 3. a section/div selected → its children
///
/// A column node selected directly is treated as its own container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridLandingPolicy {
    /// Landing column for adds into a selected grid
    pub column: usize,
}

impl GridLandingPolicy {
    pub fn new(column: usize) -> Self {
        Self { column }
    }
}

impl InsertionPolicy for GridLandingPolicy {
    fn target_for(&self, selected: Option<&ContentNode>) -> Address {
        match selected {
            Some(node) => match node.kind {
                NodeKind::Grid => Address::grid_slot(node.id.clone(), self.column),
                NodeKind::Section | NodeKind::Div | NodeKind::Column => {
                    Address::container(node.id.clone())
                }
                _ => Address::Root,
            },
            None => Address::Root,
        }
    }
}

/// Insertion target under the default policy (grid adds land in column 0)
pub fn default_insertion_target(selected: Option<&ContentNode>) -> Address {
    GridLandingPolicy::default().target_for(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        assert_eq!(default_insertion_target(None), Address::Root);

        let para = ContentNode::new("p", NodeKind::Paragraph);
        assert_eq!(default_insertion_target(Some(&para)), Address::Root);

        let section = ContentNode::new("s", NodeKind::Section);
        assert_eq!(default_insertion_target(Some(&section)), Address::container("s"));

        let grid = ContentNode::new("g", NodeKind::Grid);
        assert_eq!(default_insertion_target(Some(&grid)), Address::grid_slot("g", 0));
    }

    #[test]
    fn test_landing_column_override() {
        let grid = ContentNode::new("g", NodeKind::Grid);
        let policy = GridLandingPolicy::new(2);
        assert_eq!(policy.target_for(Some(&grid)), Address::grid_slot("g", 2));
    }
}
