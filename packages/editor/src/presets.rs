//! Starting nodes offered by the element palette.

use pagesmith_model::{GridConfig, NewNode, NodeKind};

pub fn heading1() -> NewNode {
    NewNode::new(NodeKind::Heading1)
        .with_content("New Title")
        .with_style("fontSize", "2em")
        .with_style("marginBottom", "0.5em")
        .with_style("fontWeight", "bold")
}

pub fn heading2() -> NewNode {
    NewNode::new(NodeKind::Heading2)
        .with_content("New Subtitle")
        .with_style("fontSize", "1.5em")
        .with_style("marginBottom", "0.5em")
        .with_style("fontWeight", "bold")
}

pub fn heading3() -> NewNode {
    NewNode::new(NodeKind::Heading3)
        .with_content("New Heading")
        .with_style("fontSize", "1.25em")
        .with_style("marginBottom", "0.5em")
        .with_style("fontWeight", "bold")
}

pub fn paragraph() -> NewNode {
    NewNode::new(NodeKind::Paragraph)
        .with_content("New Paragraph")
        .with_style("marginBottom", "1em")
        .with_style("lineHeight", "1.5")
}

pub fn note() -> NewNode {
    NewNode::new(NodeKind::Note)
        .with_content("New Note")
        .with_style("display", "block")
        .with_style("padding", "10px")
        .with_style("backgroundColor", "#f5f5f5")
        .with_style("borderLeft", "4px solid #757575")
        .with_style("marginBottom", "1em")
}

pub fn section() -> NewNode {
    NewNode::new(NodeKind::Section)
        .with_style("padding", "16px")
        .with_style("margin", "16px 0")
        .with_style("border", "1px solid #ddd")
}

pub fn div() -> NewNode {
    NewNode::new(NodeKind::Div)
}

pub fn grid(config: GridConfig) -> NewNode {
    NewNode::new(NodeKind::Grid)
        .with_style("width", "100%")
        .with_style("margin", "16px 0")
        .with_grid_config(config)
}

/// Image node around an already-encoded reference (e.g. a data URI)
pub fn image(data_uri: impl Into<String>) -> NewNode {
    NewNode::new(NodeKind::Image)
        .with_content(data_uri)
        .with_style("maxWidth", "100%")
        .with_style("height", "auto")
        .with_style("display", "block")
        .with_style("margin", "1em auto")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_presets() {
        assert_eq!(heading1().content, "New Title");
        assert_eq!(heading2().content, "New Subtitle");
        assert_eq!(note().kind, NodeKind::Note);
        assert!(paragraph().kind.is_text());
    }

    #[test]
    fn test_grid_preset_carries_config() {
        let node = grid(GridConfig::new(4));
        assert_eq!(node.grid_config, Some(GridConfig::new(4)));
    }

    #[test]
    fn test_image_holds_reference() {
        let node = image("data:image/png;base64,AAAA");
        assert_eq!(node.content, "data:image/png;base64,AAAA");
        assert_eq!(node.style["maxWidth"], "100%");
    }
}
