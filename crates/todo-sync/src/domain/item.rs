//! Todo Item Entity
//!
//! A single entry of the remote todo collection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier issued by the remote service. Never created client-side.
///
/// Decoded as an unsigned integer, which is what the todo service issues.
/// A service using string or UUID ids would fail with `GatewayError::Decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        ItemId(raw)
    }
}

/// A todo item as confirmed by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Short task title
    pub title: String,
    /// Longer description
    pub description: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Body of a partial update that only flips the completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionPatch {
    pub completed: bool,
}
