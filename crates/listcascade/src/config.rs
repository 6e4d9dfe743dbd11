//! Cascade configuration.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! row_height = 25
//! category_order = "sorted"   # or "declared"
//! log_filter = "info"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogData;
use crate::error::{Error, Result};
use crate::model::DEFAULT_ROW_HEIGHT;

/// How the category column orders its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrder {
    /// Lexicographic by key (default).
    #[default]
    Sorted,
    /// The catalog's declared order.
    Declared,
}

impl CategoryOrder {
    /// The category keys of `catalog` in this order.
    pub fn keys(self, catalog: &CatalogData) -> Vec<String> {
        match self {
            Self::Sorted => catalog.sorted_category_keys(),
            Self::Declared => catalog.category_keys(),
        }
    }
}

/// Settings for a [`CascadingView`](crate::CascadingView).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    /// Fixed list row height handed to the toolkit.
    pub row_height: u32,
    /// Category column ordering.
    pub category_order: CategoryOrder,
    /// Default `tracing` filter directive for applications.
    pub log_filter: String,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            category_order: CategoryOrder::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl CascadeConfig {
    /// Parse configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::parse("TOML", e))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::parse("TOML", e))
    }
}
