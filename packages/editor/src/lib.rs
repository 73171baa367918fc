//! # Pagesmith Editor
//!
//! Structural editing engine for Pagesmith pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI: palette, drag & drop, property panel    │
//! └─────────────────────────────────────────────┘
//!                     ↓ intents (Mutation)
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Selection + active style                 │
//! │  - Insertion policy                         │
//! │  - Add / move / edit / delete on snapshots  │
//! └─────────────────────────────────────────────┘
//!                     ↓ new snapshot
//! ┌─────────────────────────────────────────────┐
//! │ model: Tree, Address, grid column slots     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Tree is source of truth**: rendering and export read snapshots
//! 2. **Total operations**: bad addresses become logged no-ops, never errors
//! 3. **Snapshot replace**: a mutation publishes a whole new tree or nothing
//!
//! ## Usage
//!
//! ```rust
//! use pagesmith_editor::{presets, EditSession};
//! use pagesmith_model::{Address, GridConfig};
//!
//! let mut session = EditSession::new("brochure");
//!
//! session.add_element(presets::grid(GridConfig::new(3)));
//! let grid_id = session.selected_id().unwrap().to_string();
//!
//! // Lands in column 0 of the selected grid
//! session.add_element(presets::paragraph());
//!
//! // Drag it over to column 2
//! session.move_element(
//!     0,
//!     0,
//!     Address::grid_slot(grid_id.clone(), 0),
//!     Address::grid_slot(grid_id.clone(), 2),
//! );
//!
//! let column = session.tree().find_container(&Address::grid_slot(grid_id, 2)).unwrap();
//! assert_eq!(column.len(), 1);
//! ```

mod document;
mod errors;
mod mutations;
mod policy;
pub mod presets;
mod session;

pub use document::Document;
pub use errors::EditorError;
pub use mutations::{
    add_node, change_content, delete_node, is_noop_move, move_node, patch_style, Mutation,
    MutationError, MutationOutcome,
};
pub use policy::{default_insertion_target, GridLandingPolicy, InsertionPolicy};
pub use session::EditSession;

/// Parse a JSON array of intents
pub fn parse_script(source: &str) -> Result<Vec<Mutation>, EditorError> {
    Ok(serde_json::from_str(source)?)
}
