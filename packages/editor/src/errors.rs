//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Malformed tree: {0}")]
    Model(#[from] pagesmith_model::ModelError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Invalid intent script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("Selected node is not in the tree: {0}")]
    DanglingSelection(String),
}
