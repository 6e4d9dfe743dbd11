//! The leaf stage: an ordered, selectable list of category keys.

use std::sync::Arc;

use listcascade_core::logging::targets;
use listcascade_core::{ConnectionId, Property, Signal};

use super::traits::SelectionSource;
use crate::catalog::CatalogData;
use crate::error::{Error, Result};
use crate::model::{ArgsConverter, ListItemArgs, Selection, SelectionPolicy, SelectionState};

/// Holds the category keys and their selection.
///
/// # Signals
///
/// - `selection_changed`: Emitted synchronously after every successful
///   [`select`](Self::select) and on [`touch_selection`](Self::touch_selection)
pub struct CategorySelector {
    catalog: Arc<CatalogData>,
    keys: Vec<String>,
    state: Property<SelectionState>,
    args_converter: ArgsConverter,

    /// Emitted when the selection changes. Args: the new selection
    pub selection_changed: Signal<Selection>,
}

impl CategorySelector {
    /// Creates a selector over `keys`, selecting the first key when the
    /// policy requires a selection.
    pub fn new(
        catalog: Arc<CatalogData>,
        keys: Vec<String>,
        policy: SelectionPolicy,
        args_converter: ArgsConverter,
    ) -> Self {
        let mut state = SelectionState::new(policy);
        state.reset_to_first(&keys);

        Self {
            catalog,
            keys,
            state: Property::new(state),
            args_converter,
            selection_changed: Signal::new(),
        }
    }

    /// The category keys, in display order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        self.state.with(|s| s.selection().clone())
    }

    /// The policy this selector enforces.
    pub fn policy(&self) -> SelectionPolicy {
        self.state.with(SelectionState::policy)
    }

    /// Selects `key` and notifies every listener before returning.
    ///
    /// Keys not in [`keys`](Self::keys) are rejected with
    /// [`Error::UnknownKeySelected`] and leave the selection untouched.
    pub fn select(&self, key: &str) -> Result<()> {
        if !self.keys.iter().any(|k| k == key) {
            tracing::debug!(target: targets::SELECTION, key, "rejecting unknown category");
            return Err(Error::unknown_key(key));
        }

        let (changed, selection) = self.state.update(|s| {
            let changed = s.select(key);
            (changed, s.selection().clone())
        });
        tracing::debug!(
            target: targets::SELECTION,
            key,
            changed,
            "category selected"
        );

        self.selection_changed.emit(selection);
        Ok(())
    }

    /// Re-emits the current selection without changing it.
    ///
    /// Used to prime downstream stages after wiring.
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

    /// Row arguments for `key`, or `None` if it is not listed here.
    pub fn item_args(&self, key: &str) -> Option<ListItemArgs> {
        if !self.keys.iter().any(|k| k == key) {
            return None;
        }
        (self.args_converter)(key, &self.catalog)
    }
}

impl SelectionSource for CategorySelector {
    fn selection_changed(&self) -> &Signal<Selection> {
        &self.selection_changed
    }

    fn selection(&self) -> Selection {
        CategorySelector::selection(self)
    }
}
