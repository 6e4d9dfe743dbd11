//! The middle stage: item keys scoped to the upstream category.
//!
//! [`FilteredItemSelector`] owns a derived key list. Every upstream
//! notification replaces the list wholesale with whatever the
//! [`CategoryFilter`] returns for the selected category and re-selects its
//! first key; there is no identity continuity between categories.

use std::sync::Arc;

use listcascade_core::logging::targets;
use listcascade_core::{ConnectionId, Property, Signal};

use super::refresh::{RefreshStatus, RefreshTracker};
use super::traits::{SelectionObserver, SelectionSource};
use crate::catalog::CatalogData;
use crate::error::{Error, RefreshError, Result};
use crate::model::{ArgsConverter, ListItemArgs, Selection, SelectionPolicy, SelectionState};

/// Type alias for the category-to-items function.
///
/// Returns the ordered item keys of a category, or `None` when the category
/// is absent from the catalog. Must be pure: identical inputs give identical
/// output.
pub type CategoryFilter = Arc<dyn Fn(&str, &CatalogData) -> Option<Vec<String>> + Send + Sync>;

/// Filter returning a category's declared item order.
pub fn declared_items() -> CategoryFilter {
    Arc::new(|key: &str, catalog: &CatalogData| catalog.items_in_category(key))
}

#[derive(Debug, Clone)]
struct ItemListState {
    keys: Vec<String>,
    selection: SelectionState,
    refresh: RefreshTracker,
}

/// Holds the item keys of the selected category and their selection.
///
/// # Signals
///
/// - `selection_changed`: Emitted after every refresh and every successful
///   [`select`](Self::select), even when the selection is unchanged
/// - `refresh_failed`: Emitted when a refresh fails, with the error
pub struct FilteredItemSelector {
    catalog: Arc<CatalogData>,
    filter: CategoryFilter,
    args_converter: ArgsConverter,
    state: Property<ItemListState>,

    /// Emitted when the selection changes. Args: the new selection
    pub selection_changed: Signal<Selection>,

    /// Emitted when a refresh fails. The key list is left as it was.
    pub refresh_failed: Signal<RefreshError>,
}

impl FilteredItemSelector {
    /// Creates a selector over `initial_keys` (the items of whichever
    /// category is selected upstream at construction time).
    pub fn new(
        catalog: Arc<CatalogData>,
        initial_keys: Vec<String>,
        filter: CategoryFilter,
        policy: SelectionPolicy,
        args_converter: ArgsConverter,
    ) -> Self {
        let mut selection = SelectionState::new(policy);
        selection.reset_to_first(&initial_keys);

        Self {
            catalog,
            filter,
            args_converter,
            state: Property::new(ItemListState {
                keys: initial_keys,
                selection,
                refresh: RefreshTracker::default(),
            }),
            selection_changed: Signal::new(),
            refresh_failed: Signal::new(),
        }
    }

    /// The current item keys, in display order.
    pub fn keys(&self) -> Vec<String> {
        self.state.with(|s| s.keys.clone())
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.state.with(|s| s.selection.selection().clone())
    }

    /// Refresh status.
    pub fn status(&self) -> RefreshStatus {
        self.state.with(|s| s.refresh.status())
    }

    /// The error behind a [`RefreshStatus::Stale`] status.
    pub fn last_error(&self) -> Option<RefreshError> {
        self.state.with(|s| s.refresh.last_error().cloned())
    }

    /// Rebuilds the key list from the upstream category selection.
    ///
    /// An empty upstream selection empties both the key list and the
    /// selection. Otherwise the first selected category is resolved through
    /// the filter; if it is absent, [`RefreshError::MissingCategory`] is
    /// returned and published on `refresh_failed`, and the key list and
    /// selection keep their previous values.
    ///
    /// `selection_changed` is emitted on every successful call, so
    /// re-delivering the same upstream selection still reaches downstream.
    pub fn on_upstream_selection_change(
        &self,
        selection: &Selection,
    ) -> std::result::Result<(), RefreshError> {
        let Some(category) = selection.first() else {
            let cleared = self.state.update(|s| {
                s.keys.clear();
                s.selection.clear();
                s.refresh.succeed();
                s.selection.selection().clone()
            });
            tracing::debug!(target: targets::REFRESH, "upstream selection empty, items cleared");
            self.selection_changed.emit(cleared);
            return Ok(());
        };

        let Some(keys) = (self.filter)(category, &self.catalog) else {
            let error = RefreshError::MissingCategory {
                key: category.to_string(),
            };
            self.state.update(|s| s.refresh.fail(error.clone()));
            tracing::warn!(
                target: targets::REFRESH,
                category,
                "item refresh failed, keeping previous items: {error}"
            );
            self.refresh_failed.emit(error.clone());
            return Err(error);
        };

        let (count, selection) = self.state.update(|s| {
            s.keys = keys;
            s.selection.reset_to_first(&s.keys);
            s.refresh.succeed();
            (s.keys.len(), s.selection.selection().clone())
        });
        tracing::debug!(
            target: targets::REFRESH,
            category,
            items = count,
            selected = selection.first().unwrap_or(""),
            "items rebuilt"
        );

        self.selection_changed.emit(selection);
        Ok(())
    }

    /// Selects `key` within the current list and notifies listeners.
    pub fn select(&self, key: &str) -> Result<()> {
        let outcome = self.state.update(|s| {
            if !s.keys.iter().any(|k| k == key) {
                return None;
            }
            let changed = s.selection.select(key);
            Some((changed, s.selection.selection().clone()))
        });

        let Some((changed, selection)) = outcome else {
            tracing::debug!(target: targets::SELECTION, key, "rejecting unknown item");
            return Err(Error::unknown_key(key));
        };
        tracing::debug!(target: targets::SELECTION, key, changed, "item selected");

        self.selection_changed.emit(selection);
        Ok(())
    }

    /// Re-emits the current selection without changing it.
    pub fn touch_selection(&self) {
        self.selection_changed.emit(self.selection());
    }

    /// Registers a selection listener.
    pub fn on_selection_change<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&Selection) + Send + Sync + 'static,
    {
        self.selection_changed.connect(listener)
    }

    /// Row arguments for `key`, or `None` if it is not currently listed.
    pub fn item_args(&self, key: &str) -> Option<ListItemArgs> {
        if !self.state.with(|s| s.keys.iter().any(|k| k == key)) {
            return None;
        }
        (self.args_converter)(key, &self.catalog)
    }
}

impl SelectionSource for FilteredItemSelector {
    fn selection_changed(&self) -> &Signal<Selection> {
        &self.selection_changed
    }

    fn selection(&self) -> Selection {
        FilteredItemSelector::selection(self)
    }
}

impl SelectionObserver for FilteredItemSelector {
    fn on_upstream_selection_change(
        &self,
        selection: &Selection,
    ) -> std::result::Result<(), RefreshError> {
        FilteredItemSelector::on_upstream_selection_change(self, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Item};
    use crate::model::{item_args, DEFAULT_ROW_HEIGHT};
    use parking_lot::Mutex;

    fn catalog() -> Arc<CatalogData> {
        Arc::new(
            CatalogData::new(
                vec![
                    Category::new("citrus", "Citrus", ["orange", "lemon"]),
                    Category::new("berry", "Berry", ["strawberry"]),
                    Category::new("bare", "Bare", Vec::<String>::new()),
                ],
                vec![
                    Item::new("orange", "Orange"),
                    Item::new("lemon", "Lemon"),
                    Item::new("strawberry", "Strawberry"),
                ],
            )
            .unwrap(),
        )
    }

    fn selector() -> FilteredItemSelector {
        let catalog = catalog();
        let initial = catalog.items_in_category("berry").unwrap();
        FilteredItemSelector::new(
            catalog,
            initial,
            declared_items(),
            SelectionPolicy::default(),
            item_args(DEFAULT_ROW_HEIGHT),
        )
    }

    fn record(items: &FilteredItemSelector) -> Arc<Mutex<Vec<Selection>>> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        items.on_selection_change(move |s| received_clone.lock().push(s.clone()));
        received
    }

    #[test]
    fn test_construction_selects_first_initial_key() {
        let items = selector();
        assert_eq!(items.keys(), vec!["strawberry"]);
        assert_eq!(items.selection(), Selection::single("strawberry"));
        assert_eq!(items.status(), RefreshStatus::Uninitialized);
    }

    #[test]
    fn test_refresh_replaces_list_and_selects_first() {
        let items = selector();
        let received = record(&items);

        items
            .on_upstream_selection_change(&Selection::single("citrus"))
            .unwrap();

        assert_eq!(items.keys(), vec!["orange", "lemon"]);
        assert_eq!(items.selection(), Selection::single("orange"));
        assert_eq!(items.status(), RefreshStatus::Populated);
        assert_eq!(*received.lock(), vec![Selection::single("orange")]);
    }

    #[test]
    fn test_refresh_is_idempotent_and_always_emits() {
        let items = selector();
        let received = record(&items);
        let citrus = Selection::single("citrus");

        items.on_upstream_selection_change(&citrus).unwrap();
        let first = (items.keys(), items.selection());
        items.on_upstream_selection_change(&citrus).unwrap();
        let second = (items.keys(), items.selection());

        assert_eq!(first, second);
        assert_eq!(received.lock().len(), 2);
    }

    #[test]
    fn test_refresh_discards_previous_item_selection() {
        let items = selector();
        items
            .on_upstream_selection_change(&Selection::single("citrus"))
            .unwrap();
        items.select("lemon").unwrap();

        items
            .on_upstream_selection_change(&Selection::single("citrus"))
            .unwrap();
        assert_eq!(items.selection(), Selection::single("orange"));
    }

    #[test]
    fn test_empty_upstream_clears() {
        let items = selector();
        let received = record(&items);

        items
            .on_upstream_selection_change(&Selection::empty())
            .unwrap();

        assert!(items.keys().is_empty());
        assert!(items.selection().is_empty());
        assert_eq!(*received.lock(), vec![Selection::empty()]);
    }

    #[test]
    fn test_category_without_items() {
        let items = selector();
        items
            .on_upstream_selection_change(&Selection::single("bare"))
            .unwrap();
        assert!(items.keys().is_empty());
        assert!(items.selection().is_empty());
    }

    #[test]
    fn test_missing_category_keeps_previous_state() {
        let items = selector();
        items
            .on_upstream_selection_change(&Selection::single("citrus"))
            .unwrap();
        items.select("lemon").unwrap();

        let received = record(&items);
        let failures = Arc::new(Mutex::new(Vec::new()));
        let failures_clone = failures.clone();
        items
            .refresh_failed
            .connect(move |e| failures_clone.lock().push(e.clone()));

        let err = items
            .on_upstream_selection_change(&Selection::single("stone"))
            .unwrap_err();

        let expected = RefreshError::MissingCategory {
            key: "stone".into(),
        };
        assert_eq!(err, expected);
        assert_eq!(items.keys(), vec!["orange", "lemon"]);
        assert_eq!(items.selection(), Selection::single("lemon"));
        assert_eq!(items.status(), RefreshStatus::Stale);
        assert_eq!(items.last_error(), Some(expected.clone()));
        assert_eq!(*failures.lock(), vec![expected]);
        assert!(received.lock().is_empty());

        // Next good refresh recovers
        items
            .on_upstream_selection_change(&Selection::single("berry"))
            .unwrap();
        assert_eq!(items.status(), RefreshStatus::Populated);
        assert_eq!(items.last_error(), None);
    }

    #[test]
    fn test_select_unknown_item() {
        let items = selector();
        let received = record(&items);

        let err = items.select("orange").unwrap_err();
        assert!(matches!(err, Error::UnknownKeySelected { key } if key == "orange"));
        assert_eq!(items.selection(), Selection::single("strawberry"));
        assert!(received.lock().is_empty());
    }

    #[test]
    fn test_custom_filter() {
        let reversed: CategoryFilter = Arc::new(|key: &str, catalog: &CatalogData| {
            catalog.items_in_category(key).map(|mut keys| {
                keys.reverse();
                keys
            })
        });
        let items = FilteredItemSelector::new(
            catalog(),
            Vec::new(),
            reversed,
            SelectionPolicy::default(),
            item_args(DEFAULT_ROW_HEIGHT),
        );

        items
            .on_upstream_selection_change(&Selection::single("citrus"))
            .unwrap();
        assert_eq!(items.keys(), vec!["lemon", "orange"]);
        assert_eq!(items.selection(), Selection::single("lemon"));
    }

    #[test]
    fn test_item_args_only_for_listed_keys() {
        let items = selector();
        assert_eq!(items.item_args("strawberry").unwrap().text, "Strawberry");
        assert_eq!(items.item_args("orange"), None);
    }
}
