//! Indented text rendering of a tree, for terminal output.

use pagesmith_model::{walk_node, ContentNode, NodeKind, Tree, Visitor};

const PREVIEW_LEN: usize = 40;

#[derive(Default)]
pub struct Outline {
    lines: Vec<String>,
}

impl Outline {
    pub fn render(tree: &Tree) -> String {
        let mut outline = Self::default();
        outline.visit_tree(tree);
        outline.lines.join("\n")
    }
}

impl Visitor for Outline {
    fn visit_node(&mut self, node: &ContentNode, depth: usize) {
        let indent = "  ".repeat(depth);
        let line = match node.kind {
            NodeKind::Column => format!("{}column {}", indent, node.id),
            NodeKind::Grid => format!(
                "{}grid {} ({} columns)",
                indent,
                node.id,
                node.column_count().unwrap_or(0)
            ),
            NodeKind::Image => {
                format!("{}image {} [{} bytes]", indent, node.id, node.content.len())
            }
            kind => format!("{}{} {} {:?}", indent, kind, node.id, preview(&node.content)),
        };
        self.lines.push(line);
        walk_node(self, node, depth);
    }
}

fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_LEN) {
        Some((cut, _)) => format!("{}…", &content[..cut]),
        None => content.to_string(),
    }
}
