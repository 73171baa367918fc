//! # Tree Model
//!
//! A [`Tree`] is one document snapshot: the ordered list of root-level
//! nodes. Lookups walk depth-first through every children list, grid
//! columns included. Positions inside the tree are [`NodePath`]s: the index
//! in the root list followed by one index per level.

use crate::address::Address;
use crate::grid;
use crate::node::{ContentNode, NodeKind};
use crate::visitor::{walk_node, Visitor};
use serde::{Deserialize, Serialize};

/// Child indices from the root list down to a node
pub type NodePath = Vec<usize>;

/// An ordered list resolved from an [`Address`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContainer {
    /// Path of the node owning the list; `None` for the root list
    pub owner: Option<NodePath>,

    /// Canonical address of the list, used as `parent_id` for its members
    pub address: Address,
}

impl ResolvedContainer {
    pub fn root() -> Self {
        Self {
            owner: None,
            address: Address::Root,
        }
    }

    pub fn new(owner: NodePath, address: Address) -> Self {
        Self {
            owner: Some(owner),
            address,
        }
    }

    /// Path of the member at `index` of this list
    pub fn child_path(&self, index: usize) -> NodePath {
        let mut path = self.owner.clone().unwrap_or_default();
        path.push(index);
        path
    }

    /// Whether this list lives inside the subtree rooted at `path`
    pub fn is_within(&self, path: &[usize]) -> bool {
        self.owner
            .as_deref()
            .is_some_and(|owner| owner.starts_with(path))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    roots: Vec<ContentNode>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_roots(roots: Vec<ContentNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[ContentNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes, column nodes included
    pub fn node_count(&self) -> usize {
        let mut counter = NodeCounter::default();
        counter.visit_tree(self);
        counter.count
    }

    /// Every id in the tree, preorder
    pub fn ids(&self) -> Vec<&str> {
        fn collect<'a>(nodes: &'a [ContentNode], out: &mut Vec<&'a str>) {
            for node in nodes {
                out.push(&node.id);
                collect(node.children(), out);
            }
        }

        let mut ids = Vec::new();
        collect(&self.roots, &mut ids);
        ids
    }

    /// Ids of `id` and everything below it, preorder
    pub fn descendant_ids(&self, id: &str) -> Option<Vec<String>> {
        self.find_node(id).map(ContentNode::subtree_ids)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.path_of(id).is_some()
    }

    /// Depth-first search for `id`, descending into grid columns
    pub fn path_of(&self, id: &str) -> Option<NodePath> {
        fn search(nodes: &[ContentNode], id: &str, path: &mut NodePath) -> bool {
            for (index, node) in nodes.iter().enumerate() {
                path.push(index);
                if node.id == id || search(node.children(), id, path) {
                    return true;
                }
                path.pop();
            }
            false
        }

        let mut path = Vec::new();
        search(&self.roots, id, &mut path).then_some(path)
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&ContentNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get(*first)?;
        for index in rest {
            node = node.children().get(*index)?;
        }
        Some(node)
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut ContentNode> {
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get_mut(*first)?;
        for index in rest {
            node = node.children.as_mut()?.get_mut(*index)?;
        }
        Some(node)
    }

    pub fn find_node(&self, id: &str) -> Option<&ContentNode> {
        let path = self.path_of(id)?;
        self.node_at(&path)
    }

    pub fn find_node_mut(&mut self, id: &str) -> Option<&mut ContentNode> {
        let path = self.path_of(id)?;
        self.node_at_mut(&path)
    }

    /// Resolve an address to the list it denotes.
    ///
    /// A plain container address must name a `section` or `div`; naming a
    /// column is translated to its grid slot. A grid's own children are its
    /// column slots and never resolve as a plain list.
    pub fn resolve(&self, address: &Address) -> Option<ResolvedContainer> {
        match address {
            Address::Root => Some(ResolvedContainer::root()),
            Address::Container(id) => {
                let path = self.path_of(id)?;
                let node = self.node_at(&path)?;
                match node.kind {
                    NodeKind::Section | NodeKind::Div => {
                        Some(ResolvedContainer::new(path, Address::container(id.clone())))
                    }
                    NodeKind::Column => grid::column_slot(self, &path),
                    _ => None,
                }
            }
            Address::GridSlot { grid_id, column } => grid::resolve_slot(self, grid_id, *column),
        }
    }

    /// Read-only view of the list at `address`. A grid slot whose column has
    /// not been materialized yet reads as empty.
    pub fn find_container(&self, address: &Address) -> Option<&[ContentNode]> {
        let resolved = self.resolve(address)?;
        Some(self.container(&resolved))
    }

    /// Mutable list at `address`, materializing missing grid columns
    pub fn find_container_mut(&mut self, address: &Address) -> Option<&mut Vec<ContentNode>> {
        let resolved = self.resolve(address)?;
        self.container_mut(&resolved)
    }

    pub fn container(&self, resolved: &ResolvedContainer) -> &[ContentNode] {
        match &resolved.owner {
            None => &self.roots,
            Some(path) => self.node_at(path).map(ContentNode::children).unwrap_or(&[]),
        }
    }

    pub fn container_mut(&mut self, resolved: &ResolvedContainer) -> Option<&mut Vec<ContentNode>> {
        let Some(path) = &resolved.owner else {
            return Some(&mut self.roots);
        };

        if let Address::GridSlot { .. } = resolved.address {
            let (_, grid_path) = path.split_last()?;
            grid::materialize_columns(self.node_at_mut(grid_path)?);
        }

        let owner = self.node_at_mut(path)?;
        Some(owner.children.get_or_insert_with(Vec::new))
    }

    /// Insert `node` at `index` (clamped) of a resolved list, rewriting its
    /// parent to the list's address. Hands the node back if the list is gone.
    pub fn insert(
        &mut self,
        resolved: &ResolvedContainer,
        index: usize,
        mut node: ContentNode,
    ) -> Result<(), ContentNode> {
        match self.container_mut(resolved) {
            Some(list) => {
                node.parent_id = resolved.address.clone();
                let index = index.min(list.len());
                list.insert(index, node);
                Ok(())
            }
            None => Err(node),
        }
    }

    /// Insert into the root list at `index` (clamped)
    pub fn insert_root(&mut self, index: usize, mut node: ContentNode) {
        node.parent_id = Address::Root;
        let index = index.min(self.roots.len());
        self.roots.insert(index, node);
    }

    /// Apply `updater` to the node with `id`. Returns false if absent.
    pub fn replace_subtree<F>(&mut self, id: &str, updater: F) -> bool
    where
        F: FnOnce(&mut ContentNode),
    {
        match self.find_node_mut(id) {
            Some(node) => {
                updater(node);
                true
            }
            None => false,
        }
    }

    /// Detach the node at `path` together with its subtree
    pub fn remove_at(&mut self, path: &[usize]) -> Option<ContentNode> {
        let (&index, parent_path) = path.split_last()?;
        let list = if parent_path.is_empty() {
            &mut self.roots
        } else {
            self.node_at_mut(parent_path)?.children.as_mut()?
        };

        (index < list.len()).then(|| list.remove(index))
    }

    pub fn remove_node(&mut self, id: &str) -> Option<ContentNode> {
        let path = self.path_of(id)?;
        self.remove_at(&path)
    }
}

#[derive(Default)]
struct NodeCounter {
    count: usize,
}

impl Visitor for NodeCounter {
    fn visit_node(&mut self, node: &ContentNode, depth: usize) {
        self.count += 1;
        walk_node(self, node, depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;
    use crate::node::NewNode;

    fn sample() -> Tree {
        let mut section = NewNode::new(NodeKind::Section).into_node("s".into(), Address::Root);
        let para = NewNode::new(NodeKind::Paragraph).into_node("p".into(), Address::container("s"));
        section.children = Some(vec![para]);

        let mut grid = NewNode::new(NodeKind::Grid)
            .with_grid_config(GridConfig::new(2))
            .into_node("g".into(), Address::Root);
        let nested = NewNode::new(NodeKind::Note).into_node("n".into(), Address::grid_slot("g", 1));
        grid.children.as_mut().unwrap()[1].children = Some(vec![nested]);

        Tree::from_roots(vec![section, grid])
    }

    #[test]
    fn test_descendant_ids_include_columns() {
        let tree = sample();
        assert_eq!(
            tree.descendant_ids("g"),
            Some(vec![
                "g".to_string(),
                "g-col-0".to_string(),
                "g-col-1".to_string(),
                "n".to_string()
            ])
        );
        assert_eq!(tree.descendant_ids("missing"), None);
    }

    #[test]
    fn test_find_node_descends_into_columns() {
        let tree = sample();
        assert_eq!(tree.path_of("n"), Some(vec![1, 1, 0]));
        assert_eq!(tree.find_node("p").unwrap().kind, NodeKind::Paragraph);
        assert!(tree.find_node("nope").is_none());
    }

    #[test]
    fn test_node_count_includes_columns() {
        // s, p, g, g-col-0, g-col-1, n
        assert_eq!(sample().node_count(), 6);
    }

    #[test]
    fn test_resolve_plain_container() {
        let tree = sample();
        let resolved = tree.resolve(&Address::container("s")).unwrap();
        assert_eq!(resolved.owner, Some(vec![0]));
        assert_eq!(tree.find_container(&Address::container("s")).unwrap().len(), 1);
    }

    #[test]
    fn test_resolve_column_id_translates_to_slot() {
        let tree = sample();
        let resolved = tree.resolve(&Address::container("g-col-1")).unwrap();
        assert_eq!(resolved.address, Address::grid_slot("g", 1));
    }

    #[test]
    fn test_grid_and_leaf_are_not_plain_containers() {
        let tree = sample();
        assert!(tree.resolve(&Address::container("g")).is_none());
        assert!(tree.resolve(&Address::container("p")).is_none());
        assert!(tree.resolve(&Address::container("missing")).is_none());
    }

    #[test]
    fn test_find_container_mut_materializes_slot() {
        let mut tree = sample();
        tree.find_node_mut("g").unwrap().children = Some(vec![]);

        assert_eq!(tree.find_container(&Address::grid_slot("g", 1)), Some(&[][..]));

        let list = tree.find_container_mut(&Address::grid_slot("g", 1)).unwrap();
        assert!(list.is_empty());
        assert_eq!(tree.find_node("g").unwrap().children().len(), 2);
    }

    #[test]
    fn test_replace_subtree() {
        let mut tree = sample();
        assert!(tree.replace_subtree("n", |node| node.content = "edited".into()));
        assert_eq!(tree.find_node("n").unwrap().content, "edited");
        assert!(!tree.replace_subtree("missing", |_| {}));
    }

    #[test]
    fn test_insert_clamps_and_rewrites_parent() {
        let mut tree = sample();
        let resolved = tree.resolve(&Address::grid_slot("g", 0)).unwrap();
        let node = ContentNode::new("x", NodeKind::Image);

        assert!(tree.insert(&resolved, 99, node).is_ok());
        let inserted = tree.find_node("x").unwrap();
        assert_eq!(inserted.parent_id, Address::grid_slot("g", 0));
    }

    #[test]
    fn test_remove_node_takes_subtree() {
        let mut tree = sample();
        let removed = tree.remove_node("s").unwrap();
        assert_eq!(removed.subtree_ids(), vec!["s", "p"]);
        assert!(!tree.contains("p"));
        assert_eq!(tree.roots().len(), 1);
    }

    #[test]
    fn test_is_within() {
        let resolved = ResolvedContainer::new(vec![1, 0, 2], Address::container("x"));
        assert!(resolved.is_within(&[1, 0]));
        assert!(!resolved.is_within(&[0]));
        assert!(!ResolvedContainer::root().is_within(&[0]));
    }
}
