use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Node {id} is held by {expected} but records parent {found}")]
    ParentMismatch {
        id: String,
        expected: String,
        found: String,
    },

    #[error("Grid {grid_id} is configured for {expected} columns but has {found}")]
    MalformedGridState {
        grid_id: String,
        expected: usize,
        found: usize,
    },

    #[error("Column node outside of a grid: {0}")]
    UnexpectedColumn(String),

    #[error("Grid {grid_id} holds a non-column child: {child_id}")]
    UnexpectedGridChild { grid_id: String, child_id: String },

    #[error("Leaf node has children: {0}")]
    LeafWithChildren(String),

    #[error("Container node has no children list: {0}")]
    MissingChildren(String),
}

impl ModelError {
    pub fn parent_mismatch(
        id: impl Into<String>,
        expected: impl ToString,
        found: impl ToString,
    ) -> Self {
        Self::ParentMismatch {
            id: id.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
