//! The three cascade stages and their assembly.
//!
//! - `CategorySelector`: leaf list of category keys
//! - `FilteredItemSelector`: item keys of the selected category
//! - `DetailPresenter`: rendering of the selected item
//! - `CascadingView`: builds, wires and primes the three
//!
//! Downstream stages share the same refresh lifecycle ([`RefreshStatus`]) and
//! the same fail-stale rule: a failed lookup keeps the previous content and
//! reports the error instead of clearing.

mod cascading_view;
mod category_selector;
mod detail_presenter;
mod item_selector;
mod refresh;
mod traits;

pub use cascading_view::CascadingView;
pub use category_selector::CategorySelector;
pub use detail_presenter::{DetailPresenter, DetailView, ItemDetail};
pub use item_selector::{declared_items, CategoryFilter, FilteredItemSelector};
pub use refresh::RefreshStatus;
pub use traits::{bind, SelectionObserver, SelectionSource};
