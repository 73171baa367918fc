//! Integration tests for editor crate

use pagesmith_editor::{
    parse_script, presets, Document, EditSession, EditorError, GridLandingPolicy, Mutation,
    MutationOutcome,
};
use pagesmith_model::{Address, GridConfig, IdGenerator, NewNode, NodeKind, Tree};

#[test]
fn test_edit_session_workflow() -> anyhow::Result<()> {
    let mut session = EditSession::new("brochure");

    assert!(session.add_element(presets::heading1()).is_applied());
    let title = session.selected_id().unwrap().to_string();
    assert!(session.change_content(title.clone(), "Spring Catalogue").is_applied());

    session.select_element(None);
    session.add_element(presets::grid(GridConfig::new(2).with_widths(["40%", "60%"])));
    session.add_element(presets::image("data:image/png;base64,AAAA"));

    assert_eq!(session.version(), 4);
    assert_eq!(session.tree().find_node(&title).unwrap().content, "Spring Catalogue");
    session.check()?;
    Ok(())
}

#[test]
fn test_readers_keep_their_snapshot() {
    let mut session = EditSession::new("snapshots");
    session.add_element(presets::paragraph());
    let reader = session.snapshot();

    let id = session.selected_id().unwrap().to_string();
    session.change_content(id.clone(), "changed");
    session.add_element(presets::note());

    assert_eq!(reader.roots().len(), 1);
    assert_eq!(reader.find_node(&id).unwrap().content, "New Paragraph");
    assert_eq!(session.tree().find_node(&id).unwrap().content, "changed");
}

#[test]
fn test_replay_script() -> anyhow::Result<()> {
    let script = r#"[
        { "type": "addElement", "node": { "kind": "grid", "gridConfig": { "columnCount": 3 } } },
        { "type": "addElement", "node": { "kind": "paragraph", "content": "Hello" } },
        { "type": "changeStyle", "patch": { "color": "red" } },
        { "type": "selectElement", "nodeId": null },
        { "type": "addElement", "node": { "kind": "heading2", "content": "Below" } }
    ]"#;

    let mut session = EditSession::new("script");
    for mutation in parse_script(script)? {
        assert!(session.apply(mutation).is_applied());
    }

    let tree = session.tree();
    assert_eq!(tree.roots().len(), 2);
    let grid = &tree.roots()[0];
    let column = tree
        .find_container(&Address::grid_slot(grid.id.clone(), 0))
        .unwrap();
    assert_eq!(column[0].content, "Hello");
    assert_eq!(column[0].style["color"], "red");
    session.check()?;
    Ok(())
}

#[test]
fn test_bad_script_is_an_error() {
    let result = parse_script(r#"[{ "type": "explode" }]"#);
    assert!(matches!(result, Err(EditorError::Script(_))));
}

#[test]
fn test_landing_column_policy() {
    let mut session = EditSession::new("policy").with_policy(GridLandingPolicy::new(1));
    session.add_element(presets::grid(GridConfig::new(3)));
    let grid = session.selected_id().unwrap().to_string();

    session.add_element(presets::paragraph());
    assert_eq!(
        session.selected_node().unwrap().parent_id,
        Address::grid_slot(grid, 1)
    );
}

#[test]
fn test_landing_column_out_of_range_falls_back_to_root() {
    let mut session = EditSession::new("policy").with_policy(GridLandingPolicy::new(7));
    session.add_element(presets::grid(GridConfig::new(2)));
    session.add_element(presets::paragraph());

    assert_eq!(session.tree().roots().len(), 2);
    assert_eq!(session.selected_node().unwrap().parent_id, Address::Root);
}

#[test]
fn test_session_over_existing_document_does_not_reuse_ids() -> anyhow::Result<()> {
    let mut ids = IdGenerator::new("existing");
    let first = ids.new_id();
    let second = ids.new_id();
    let tree = Tree::from_roots(vec![
        NewNode::new(NodeKind::Paragraph).into_node(first, Address::Root),
        NewNode::new(NodeKind::Paragraph).into_node(second.clone(), Address::Root),
    ]);

    let document = Document::from_tree(tree)?;
    let mut session = EditSession::with_document(document, IdGenerator::new("existing"));
    session.add_element(presets::note());

    let new_id = session.selected_id().unwrap();
    assert_ne!(new_id, second);
    assert!(new_id.ends_with("-3"));
    session.check()?;
    Ok(())
}

#[test]
fn test_selection_mirrors_node_style() {
    let mut session = EditSession::new("mirror");
    session.add_element(presets::note());
    let id = session.selected_id().unwrap().to_string();

    session.select_element(Some(id.clone()));
    let node_style = session.tree().find_node(&id).unwrap().style.clone();
    assert_eq!(session.active_style(), &node_style);
}

#[test]
fn test_apply_reports_outcome() {
    let mut session = EditSession::new("outcome");
    let outcome = session.apply(Mutation::AddElement {
        node: presets::section(),
    });
    assert_eq!(outcome, MutationOutcome::Applied { version: 1 });
}
