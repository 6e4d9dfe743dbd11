//! Assembly of the three-stage cascade.
//!
//! ```text
//! ┌──────────────────┐  selection_changed  ┌──────────────────────┐  selection_changed  ┌─────────────────┐
//! │ CategorySelector │────────────────────>│ FilteredItemSelector │────────────────────>│ DetailPresenter │
//! └──────────────────┘                     └──────────────────────┘                     └─────────────────┘
//! ```
//!
//! Every stage runs synchronously inside the upstream `emit`, so a single
//! [`CascadingView::select_category`] call has re-derived the item list and
//! re-rendered the detail panel by the time it returns.

use std::sync::Arc;

use listcascade_core::logging::targets;
use listcascade_core::ConnectionGuard;

use super::category_selector::CategorySelector;
use super::detail_presenter::DetailPresenter;
use super::item_selector::{declared_items, CategoryFilter, FilteredItemSelector};
use super::traits::bind;
use crate::catalog::CatalogData;
use crate::config::CascadeConfig;
use crate::error::Result;
use crate::model::{category_args, item_args, Selection, SelectionPolicy};

/// A category list, a filtered item list and a detail panel, wired together.
///
/// Construction wires category → items → detail and then primes the whole
/// pipeline once, so every stage shows the default selection before any user
/// interaction. Dropping the view disconnects the stages.
pub struct CascadingView {
    catalog: Arc<CatalogData>,
    categories: Arc<CategorySelector>,
    items: Arc<FilteredItemSelector>,
    detail: Arc<DetailPresenter>,
    _connections: [ConnectionGuard<Selection>; 2],
}

impl CascadingView {
    /// Builds the cascade over `catalog` with the declared-order item filter.
    pub fn new(catalog: Arc<CatalogData>, config: &CascadeConfig) -> Self {
        Self::with_filter(catalog, config, declared_items())
    }

    /// Builds the cascade with a custom category-to-items filter.
    pub fn with_filter(
        catalog: Arc<CatalogData>,
        config: &CascadeConfig,
        filter: CategoryFilter,
    ) -> Self {
        let policy = SelectionPolicy::SINGLE_REQUIRED;

        let categories = Arc::new(CategorySelector::new(
            catalog.clone(),
            config.category_order.keys(&catalog),
            policy,
            category_args(config.row_height),
        ));

        let initial_items = categories
            .selection()
            .first()
            .and_then(|key| filter(key, &catalog))
            .unwrap_or_default();
        let items = Arc::new(FilteredItemSelector::new(
            catalog.clone(),
            initial_items,
            filter,
            policy,
            item_args(config.row_height),
        ));

        let detail = Arc::new(DetailPresenter::new(catalog.clone()));

        let connections = [bind(&*categories, &items), bind(&*items, &detail)];

        let view = Self {
            catalog,
            categories,
            items,
            detail,
            _connections: connections,
        };
        view.prime();
        view
    }

    /// Runs the full cascade once from the current category selection.
    fn prime(&self) {
        tracing::debug!(
            target: targets::CASCADE,
            categories = self.categories.keys().len(),
            "priming cascade"
        );
        self.categories.touch_selection();
    }

    /// Selects a category; the item list and detail panel follow before
    /// this returns.
    pub fn select_category(&self, key: &str) -> Result<()> {
        self.categories.select(key)
    }

    /// Selects an item in the current list; the detail panel follows before
    /// this returns.
    pub fn select_item(&self, key: &str) -> Result<()> {
        self.items.select(key)
    }

    /// The shared catalog.
    pub fn catalog(&self) -> &Arc<CatalogData> {
        &self.catalog
    }

    /// The category column.
    pub fn categories(&self) -> &Arc<CategorySelector> {
        &self.categories
    }

    /// The item column.
    pub fn items(&self) -> &Arc<FilteredItemSelector> {
        &self.items
    }

    /// The detail panel.
    pub fn detail(&self) -> &Arc<DetailPresenter> {
        &self.detail
    }
}
