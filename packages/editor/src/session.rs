//! # Edit Session
//!
//! One user's view of a document: the document itself, the current single
//! selection and the active style mirror that the property panel shows.
//!
//! Every entry point is total. A mutation that cannot apply comes back as
//! [`MutationOutcome::Noop`] with the reason, is logged, and leaves both the
//! tree and the selection as they were.

use crate::document::Document;
use crate::errors::EditorError;
use crate::mutations::{
    add_node, change_content, delete_node, is_noop_move, move_node, patch_style, Mutation,
    MutationError, MutationOutcome,
};
use crate::policy::{GridLandingPolicy, InsertionPolicy};
use pagesmith_model::{Address, ContentNode, IdGenerator, NewNode, Style, Tree};
use std::sync::Arc;

#[derive(Debug)]
pub struct EditSession {
    /// Document being edited
    pub document: Document,

    ids: IdGenerator,
    policy: Box<dyn InsertionPolicy>,

    /// Currently selected node id
    selected: Option<String>,

    /// Mirror of the last style applied or loaded for the selection
    active_style: Style,
}

impl EditSession {
    /// Session over an empty document whose ids are seeded from `document_name`
    pub fn new(document_name: &str) -> Self {
        Self::with_document(Document::new(), IdGenerator::new(document_name))
    }

    /// Session over an existing document. The generator is advanced past
    /// any ids it could collide with.
    pub fn with_document(document: Document, mut ids: IdGenerator) -> Self {
        ids.resume_after(document.tree());
        Self {
            document,
            ids,
            policy: Box::new(GridLandingPolicy::default()),
            selected: None,
            active_style: Style::new(),
        }
    }

    /// Replace the insertion policy
    pub fn with_policy(mut self, policy: impl InsertionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn tree(&self) -> &Tree {
        self.document.tree()
    }

    pub fn snapshot(&self) -> Arc<Tree> {
        self.document.snapshot()
    }

    pub fn version(&self) -> u64 {
        self.document.version
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selected node, looked up in the current snapshot
    pub fn selected_node(&self) -> Option<&ContentNode> {
        self.selected
            .as_deref()
            .and_then(|id| self.document.tree().find_node(id))
    }

    pub fn active_style(&self) -> &Style {
        &self.active_style
    }

    /// Apply an intent
    pub fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        let name = mutation.name();
        let result = match mutation {
            Mutation::AddElement { node } => self.apply_add(node),
            Mutation::MoveElement {
                source_index,
                target_index,
                source_parent,
                target_parent,
            } => self.apply_move(source_index, target_index, &source_parent, &target_parent),
            Mutation::ChangeContent { node_id, content } => self
                .document
                .apply(|tree| change_content(tree, &node_id, &content)),
            Mutation::ChangeStyle { patch } => self.apply_style(patch),
            Mutation::SelectElement { node_id } => self.apply_select(node_id),
            Mutation::DeleteElement { node_id } => self.apply_delete(&node_id),
        };

        match result {
            Ok(()) => MutationOutcome::Applied {
                version: self.document.version,
            },
            Err(reason) => {
                match reason {
                    MutationError::NoOpRequest => {
                        tracing::debug!(mutation = name, "ignoring move onto itself");
                    }
                    ref other => {
                        tracing::warn!(mutation = name, reason = %other, "mutation ignored");
                    }
                }
                MutationOutcome::Noop { reason }
            }
        }
    }

    pub fn add_element(&mut self, node: NewNode) -> MutationOutcome {
        self.apply(Mutation::AddElement { node })
    }

    pub fn move_element(
        &mut self,
        source_index: usize,
        target_index: usize,
        source_parent: Address,
        target_parent: Address,
    ) -> MutationOutcome {
        self.apply(Mutation::MoveElement {
            source_index,
            target_index,
            source_parent,
            target_parent,
        })
    }

    pub fn change_content(
        &mut self,
        node_id: impl Into<String>,
        content: impl Into<String>,
    ) -> MutationOutcome {
        self.apply(Mutation::ChangeContent {
            node_id: node_id.into(),
            content: content.into(),
        })
    }

    pub fn change_style(&mut self, patch: Style) -> MutationOutcome {
        self.apply(Mutation::ChangeStyle { patch })
    }

    pub fn select_element(&mut self, node_id: Option<String>) -> MutationOutcome {
        self.apply(Mutation::SelectElement { node_id })
    }

    pub fn delete_element(&mut self, node_id: impl Into<String>) -> MutationOutcome {
        self.apply(Mutation::DeleteElement {
            node_id: node_id.into(),
        })
    }

    /// Verify the tree invariants and that the selection still resolves
    pub fn check(&self) -> Result<(), EditorError> {
        self.document.tree().validate()?;
        match &self.selected {
            Some(id) if !self.document.tree().contains(id) => {
                Err(EditorError::DanglingSelection(id.clone()))
            }
            _ => Ok(()),
        }
    }

    fn apply_add(&mut self, node: NewNode) -> Result<(), MutationError> {
        let target = self.policy.target_for(self.selected_node());
        let ids = &mut self.ids;
        let (id, _) = self
            .document
            .apply(|tree| add_node(tree, ids, node, &target))?;

        self.selected = Some(id);
        self.active_style.clear();
        Ok(())
    }

    fn apply_move(
        &mut self,
        source_index: usize,
        target_index: usize,
        source: &Address,
        target: &Address,
    ) -> Result<(), MutationError> {
        // Settled against the published snapshot, before any working copy
        if is_noop_move(self.document.tree(), source_index, target_index, source, target) {
            return Err(MutationError::NoOpRequest);
        }

        self.document
            .apply(|tree| move_node(tree, source_index, target_index, source, target))?;
        Ok(())
    }

    fn apply_style(&mut self, patch: Style) -> Result<(), MutationError> {
        let id = self.selected.clone().ok_or(MutationError::NothingSelected)?;
        self.document.apply(|tree| patch_style(tree, &id, &patch))?;

        // Mirrors the patch, not the merged node style
        self.active_style = patch;
        Ok(())
    }

    fn apply_select(&mut self, node_id: Option<String>) -> Result<(), MutationError> {
        match node_id {
            Some(id) => {
                let style = self
                    .document
                    .tree()
                    .find_node(&id)
                    .map(|node| node.style.clone())
                    .ok_or_else(|| MutationError::NodeNotFound(id.clone()))?;
                self.selected = Some(id);
                self.active_style = style;
            }
            None => {
                self.selected = None;
                self.active_style.clear();
            }
        }
        Ok(())
    }

    fn apply_delete(&mut self, node_id: &str) -> Result<(), MutationError> {
        let removed = self.document.apply(|tree| delete_node(tree, node_id))?;

        let selection_removed = self
            .selected
            .as_ref()
            .is_some_and(|selected| removed.subtree_ids().contains(selected));
        if selection_removed {
            self.selected = None;
            self.active_style.clear();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn test_session_creation() {
        let session = EditSession::new("untitled");
        assert_eq!(session.version(), 0);
        assert!(session.selected_id().is_none());
        assert!(session.active_style().is_empty());
    }

    #[test]
    fn test_add_selects_new_node_and_resets_style() {
        let mut session = EditSession::new("untitled");
        session.add_element(presets::paragraph());
        let first = session.selected_id().unwrap().to_string();
        session.select_element(Some(first.clone()));
        assert!(!session.active_style().is_empty());

        session.add_element(presets::heading2());
        assert_ne!(session.selected_id(), Some(first.as_str()));
        assert!(session.active_style().is_empty());
    }

    #[test]
    fn test_style_without_selection_is_noop() {
        let mut session = EditSession::new("untitled");
        let outcome = session.change_style(Style::new());
        assert_eq!(
            outcome,
            MutationOutcome::Noop {
                reason: MutationError::NothingSelected
            }
        );
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let mut session = EditSession::new("untitled");
        session.add_element(presets::paragraph());
        let selected = session.selected_id().map(str::to_string);

        let outcome = session.select_element(Some("nope".to_string()));
        assert!(!outcome.is_applied());
        assert_eq!(session.selected_id().map(str::to_string), selected);
    }

    #[test]
    fn test_select_none_clears_style() {
        let mut session = EditSession::new("untitled");
        session.add_element(presets::heading1());
        let id = session.selected_id().unwrap().to_string();
        session.select_element(Some(id));
        assert_eq!(session.active_style()["fontWeight"], "bold");

        session.select_element(None);
        assert!(session.selected_id().is_none());
        assert!(session.active_style().is_empty());
    }

    #[test]
    fn test_select_does_not_bump_version() {
        let mut session = EditSession::new("untitled");
        session.add_element(presets::heading1());
        let version = session.version();
        session.select_element(None);
        assert_eq!(session.version(), version);
    }
}
