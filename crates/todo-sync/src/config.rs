//! Gateway Configuration
//!
//! Where the todo collection lives. The browser build has no runtime
//! environment, so overrides are read at compile time.

use serde::{Deserialize, Serialize};

use crate::domain::ItemId;
use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_COLLECTION: &str = "todos";

/// Remote collection location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Scheme + host (+ optional path prefix) of the service
    pub base_url: String,
    /// Resource collection name, e.g. `todos`
    pub collection: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            collection: collection.into(),
        }
    }

    /// Defaults, overridden by `TODO_API_BASE_URL` / `TODO_API_COLLECTION`
    /// when set at build time.
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("TODO_API_BASE_URL"), option_env!("TODO_API_COLLECTION"))
    }

    fn from_overrides(base_url: Option<&str>, collection: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: base_url.map(str::to_string).unwrap_or(defaults.base_url),
            collection: collection.map(str::to_string).unwrap_or(defaults.collection),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base.to_string()));
        }
        if self.collection_segment().is_empty() {
            return Err(ConfigError::EmptyCollection);
        }
        Ok(())
    }

    /// Collection name as it appears in URLs
    fn collection_segment(&self) -> &str {
        self.collection.trim().trim_matches('/')
    }

    /// `{base}/{collection}`
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            self.collection_segment()
        )
    }

    /// `{base}/{collection}/{id}`
    pub fn item_url(&self, id: ItemId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}
