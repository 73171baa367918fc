//! Container addressing.
//!
//! A node lives in exactly one ordered list: the document root, the children
//! of a `section`/`div`, or one column slot of a grid. [`Address`] names that
//! list. The composite string form `grid:<gridId>:<column>` is kept for
//! display and for intents that arrive as text; routing matches on the enum.

use crate::error::ModelError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const GRID_PREFIX: &str = "grid:";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Address {
    /// The document's root list
    #[default]
    Root,

    /// Children of a plain container (`section`, `div`)
    Container(String),

    /// Children of column `column` of grid `grid_id`
    GridSlot { grid_id: String, column: usize },
}

impl Address {
    pub fn container(id: impl Into<String>) -> Self {
        Self::Container(id.into())
    }

    pub fn grid_slot(grid_id: impl Into<String>, column: usize) -> Self {
        Self::GridSlot {
            grid_id: grid_id.into(),
            column,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// Id of the node owning the list, if any
    pub fn owner_id(&self) -> Option<&str> {
        match self {
            Self::Root => None,
            Self::Container(id) => Some(id),
            Self::GridSlot { grid_id, .. } => Some(grid_id),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Container(id) => write!(f, "{}", id),
            Self::GridSlot { grid_id, column } => {
                write!(f, "{}{}:{}", GRID_PREFIX, grid_id, column)
            }
        }
    }
}

impl FromStr for Address {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "root" {
            return Ok(Self::Root);
        }

        match s.strip_prefix(GRID_PREFIX) {
            Some(rest) => {
                let (grid_id, column) = rest
                    .rsplit_once(':')
                    .ok_or_else(|| ModelError::InvalidAddress(s.to_string()))?;
                let column = column
                    .parse::<usize>()
                    .map_err(|_| ModelError::InvalidAddress(s.to_string()))?;

                if grid_id.is_empty() {
                    return Err(ModelError::InvalidAddress(s.to_string()));
                }

                Ok(Self::grid_slot(grid_id, column))
            }
            None => Ok(Self::Container(s.to_string())),
        }
    }
}

// Root serializes as `null`, everything else as its string form.
impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Root => serializer.serialize_none(),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(Self::Root),
            Some(raw) => raw.parse().map_err(serde::de::Error::custom),
        }
    }
}
