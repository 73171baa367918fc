use crate::node::ContentNode;
use crate::tree::Tree;

/// Visitor pattern for traversing a document tree immutably
///
/// Default implementations walk the entire tree, grid columns included.
/// Override `visit_node` to act on nodes; call [`walk_node`] to keep
/// descending.
pub trait Visitor: Sized {
    fn visit_tree(&mut self, tree: &Tree) {
        walk_tree(self, tree);
    }

    fn visit_node(&mut self, node: &ContentNode, depth: usize) {
        walk_node(self, node, depth);
    }
}

pub fn walk_tree<V: Visitor>(visitor: &mut V, tree: &Tree) {
    for node in tree.roots() {
        visitor.visit_node(node, 0);
    }
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &ContentNode, depth: usize) {
    for child in node.children() {
        visitor.visit_node(child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Address, GridConfig, NewNode, NodeKind};

    struct DepthRecorder(Vec<(String, usize)>);

    impl Visitor for DepthRecorder {
        fn visit_node(&mut self, node: &ContentNode, depth: usize) {
            self.0.push((node.id.clone(), depth));
            walk_node(self, node, depth);
        }
    }

    #[test]
    fn test_walk_reports_depths() {
        let grid = NewNode::new(NodeKind::Grid)
            .with_grid_config(GridConfig::new(1))
            .into_node("g".into(), Address::Root);
        let tree = Tree::from_roots(vec![grid]);

        let mut recorder = DepthRecorder(Vec::new());
        recorder.visit_tree(&tree);

        assert_eq!(
            recorder.0,
            vec![("g".to_string(), 0), ("g-col-0".to_string(), 1)]
        );
    }
}
