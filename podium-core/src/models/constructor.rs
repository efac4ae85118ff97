//! Constructor (team) types.

use serde::{Deserialize, Serialize};

/// A constructor competing in a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    /// Stable constructor identifier, unique within a season.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Constructor {
    /// Creates a constructor from its identifier and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
