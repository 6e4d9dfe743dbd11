//! The final stage: a detail rendering of the selected item.

use std::fmt;
use std::sync::Arc;

use listcascade_core::logging::targets;
use listcascade_core::{Property, Signal};

use super::refresh::{RefreshStatus, RefreshTracker};
use super::traits::SelectionObserver;
use crate::catalog::{CatalogData, Item};
use crate::error::RefreshError;
use crate::model::Selection;

/// Rendered fields of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetail {
    /// Item key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// `(field name, rendered value)` pairs, ordered by field name.
    pub fields: Vec<(String, String)>,
}

impl From<&Item> for ItemDetail {
    fn from(item: &Item) -> Self {
        Self {
            key: item.key.clone(),
            name: item.name.clone(),
            fields: item
                .fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_string()))
                .collect(),
        }
    }
}

/// What the detail panel currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailView {
    /// Nothing is selected upstream.
    #[default]
    Placeholder,
    /// The selected item.
    Item(ItemDetail),
}

impl DetailView {
    /// The rendered item's key, if any.
    pub fn item_key(&self) -> Option<&str> {
        match self {
            Self::Placeholder => None,
            Self::Item(detail) => Some(&detail.key),
        }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder => write!(f, "(nothing selected)"),
            Self::Item(detail) => {
                writeln!(f, "{}", detail.name)?;
                let width = detail.fields.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
                for (name, value) in &detail.fields {
                    writeln!(f, "  {name:<width$}  {value}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
struct DetailState {
    view: DetailView,
    refresh: RefreshTracker,
}

/// Renders the item selected upstream.
///
/// # Signals
///
/// - `rendered`: Emitted after every successful render, with the new view
/// - `refresh_failed`: Emitted when the selected item is missing
pub struct DetailPresenter {
    catalog: Arc<CatalogData>,
    state: Property<DetailState>,

    /// Emitted after each successful render. Args: the new view
    pub rendered: Signal<DetailView>,

    /// Emitted when a render fails. The previous view is kept.
    pub refresh_failed: Signal<RefreshError>,
}

impl DetailPresenter {
    /// Creates a presenter showing the placeholder.
    ///
    /// Nothing is rendered until the first upstream notification; the owner
    /// must prime it once wiring is complete.
    pub fn new(catalog: Arc<CatalogData>) -> Self {
        Self {
            catalog,
            state: Property::new(DetailState::default()),
            rendered: Signal::new(),
            refresh_failed: Signal::new(),
        }
    }

    /// The current view.
    pub fn view(&self) -> DetailView {
        self.state.with(|s| s.view.clone())
    }

    /// Refresh status.
    pub fn status(&self) -> RefreshStatus {
        self.state.with(|s| s.refresh.status())
    }

    /// The error behind a [`RefreshStatus::Stale`] status.
    pub fn last_error(&self) -> Option<RefreshError> {
        self.state.with(|s| s.refresh.last_error().cloned())
    }

    /// Renders the first selected item, or the placeholder for an empty
    /// selection.
    ///
    /// A key missing from the catalog yields [`RefreshError::MissingItem`],
    /// published on `refresh_failed`; the previous view stays.
    pub fn on_upstream_selection_change(&self, selection: &Selection) -> Result<(), RefreshError> {
        let view = match selection.first() {
            None => DetailView::Placeholder,
            Some(key) => match self.catalog.item(key) {
                Some(item) => DetailView::Item(ItemDetail::from(item)),
                None => {
                    let error = RefreshError::MissingItem {
                        key: key.to_string(),
                    };
                    self.state.update(|s| s.refresh.fail(error.clone()));
                    tracing::warn!(
                        target: targets::REFRESH,
                        item = key,
                        "detail render failed, keeping previous view: {error}"
                    );
                    self.refresh_failed.emit(error.clone());
                    return Err(error);
                }
            },
        };

        self.state.update(|s| {
            s.view = view.clone();
            s.refresh.succeed();
        });
        tracing::debug!(
            target: targets::REFRESH,
            item = view.item_key().unwrap_or(""),
            "detail rendered"
        );

        self.rendered.emit(view);
        Ok(())
    }
}

impl SelectionObserver for DetailPresenter {
    fn on_upstream_selection_change(&self, selection: &Selection) -> Result<(), RefreshError> {
        DetailPresenter::on_upstream_selection_change(self, selection)
    }
}
