//! Cascading master-detail-detail list selection.
//!
//! `listcascade` implements the selection contract behind a three-column
//! browser: picking a category filters an item list, and picking an item
//! drives a detail panel. Rendering is left to whatever UI toolkit hosts the
//! columns; this crate supplies the state, the propagation and the row
//! arguments the toolkit needs.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use listcascade::{CascadeConfig, CascadingView, Category, CatalogData, Item};
//!
//! let catalog = CatalogData::new(
//!     vec![
//!         Category::new("citrus", "Citrus", ["orange", "lemon"]),
//!         Category::new("berry", "Berry", ["strawberry"]),
//!     ],
//!     vec![
//!         Item::new("orange", "Orange"),
//!         Item::new("lemon", "Lemon"),
//!         Item::new("strawberry", "Strawberry"),
//!     ],
//! )?;
//!
//! let view = CascadingView::new(Arc::new(catalog), &CascadeConfig::default());
//!
//! // Primed at construction: first sorted category, its first item, rendered.
//! assert_eq!(view.detail().view().item_key(), Some("strawberry"));
//!
//! // One call runs the whole cascade.
//! view.select_category("citrus")?;
//! assert_eq!(view.items().keys(), vec!["orange", "lemon"]);
//! assert_eq!(view.detail().view().item_key(), Some("orange"));
//! # Ok::<(), listcascade::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Shared read-only categories and items
//! - [`model`]: Selection state and list row arguments
//! - [`view`]: The three stages and their assembly
//! - [`config`]: TOML configuration
//! - [`fixtures`]: A built-in fruit catalog

pub mod catalog;
pub mod config;
mod error;
pub mod fixtures;
pub mod model;
pub mod view;

pub use catalog::{CatalogData, Category, FieldValue, Item};
pub use config::{CascadeConfig, CategoryOrder};
pub use error::{Error, RefreshError, Result};
pub use model::{ListItemArgs, Selection, SelectionMode, SelectionPolicy};
pub use view::{
    CascadingView, CategorySelector, DetailPresenter, DetailView, FilteredItemSelector,
    ItemDetail, RefreshStatus,
};
