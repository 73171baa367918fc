//! Content nodes.

use crate::address::Address;
use crate::grid::{self, GridConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque style map. Values are never interpreted here, only merged.
pub type Style = BTreeMap<String, serde_json::Value>;

/// The closed set of content variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    Note,
    Image,
    Section,
    Div,
    Grid,
    Column,
}

impl NodeKind {
    /// Variants that carry a `children` list
    pub fn is_container(self) -> bool {
        matches!(self, Self::Section | Self::Div | Self::Grid | Self::Column)
    }

    pub fn is_leaf(self) -> bool {
        !self.is_container()
    }

    /// Variants whose content is editable text
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Self::Heading1 | Self::Heading2 | Self::Heading3 | Self::Paragraph | Self::Note
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heading1 => "heading1",
            Self::Heading2 => "heading2",
            Self::Heading3 => "heading3",
            Self::Paragraph => "paragraph",
            Self::Note => "note",
            Self::Image => "image",
            Self::Section => "section",
            Self::Div => "div",
            Self::Grid => "grid",
            Self::Column => "column",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single element of the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    pub id: String,
    pub kind: NodeKind,

    /// Text for text variants, an image data reference for `image`
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub style: Style,

    /// Present for container variants, absent for leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ContentNode>>,

    /// Address of the list holding this node
    #[serde(default)]
    pub parent_id: Address,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_config: Option<GridConfig>,
}

impl ContentNode {
    /// Empty node of `kind`; containers start with an empty children list
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            content: String::new(),
            style: Style::new(),
            children: kind.is_container().then(Vec::new),
            parent_id: Address::Root,
            grid_config: None,
        }
    }

    /// Children as a slice (empty for leaves)
    pub fn children(&self) -> &[ContentNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<ContentNode>> {
        self.children.as_mut()
    }

    pub fn is_grid(&self) -> bool {
        self.kind == NodeKind::Grid
    }

    /// Configured column count of a grid, falling back to the number of
    /// column children when the config is missing.
    pub fn column_count(&self) -> Option<usize> {
        if !self.is_grid() {
            return None;
        }
        Some(
            self.grid_config
                .as_ref()
                .map(|config| config.column_count)
                .unwrap_or_else(|| self.children().len()),
        )
    }

    /// Ids of this node and every descendant, preorder
    pub fn subtree_ids(&self) -> Vec<String> {
        let mut ids = vec![self.id.clone()];
        for child in self.children() {
            ids.extend(child.subtree_ids());
        }
        ids
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(ContentNode::subtree_len).sum::<usize>()
    }
}

/// Initial fields of a node about to be added; the id and parent are
/// assigned on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNode {
    pub kind: NodeKind,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub style: Style,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_config: Option<GridConfig>,
}

impl NewNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            content: String::new(),
            style: Style::new(),
            grid_config: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_style(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    pub fn with_grid_config(mut self, config: GridConfig) -> Self {
        self.grid_config = Some(config);
        self
    }

    /// Build the node. Grids get their column slots synthesized here;
    /// a grid config on any other kind is dropped.
    pub fn into_node(self, id: String, parent_id: Address) -> ContentNode {
        let mut node = ContentNode::new(id, self.kind);
        node.content = self.content;
        node.style = self.style;
        node.parent_id = parent_id;

        if self.kind == NodeKind::Grid {
            let config = self.grid_config.unwrap_or_default();
            node.children = Some(grid::build_columns(&node.id, &config));
            node.grid_config = Some(config);
        }

        node
    }
}
