//! Draft Input
//!
//! The unsaved title/description pair bound to the input form.

use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::error::DraftError;

/// Form contents; also the request body for create and replace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Prefill from an existing item (used when editing starts)
    pub fn from_item(item: &Item) -> Self {
        Self::new(item.title.clone(), item.description.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    /// Boundary check performed by the form before submitting.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        Ok(())
    }
}
