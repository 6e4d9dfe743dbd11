//! Producer/consumer seams of the cascade.

use std::sync::Arc;

use listcascade_core::{ConnectionGuard, Signal};

use crate::error::RefreshError;
use crate::model::Selection;

/// A stage that publishes its selection.
pub trait SelectionSource {
    /// Emitted after every selection change, with the new selection.
    fn selection_changed(&self) -> &Signal<Selection>;

    /// The current selection.
    fn selection(&self) -> Selection;
}

/// A stage that re-derives its state from an upstream selection.
pub trait SelectionObserver: Send + Sync + 'static {
    /// Recompute from `selection`.
    ///
    /// On error the observer must keep its previous state (fail-stale).
    fn on_upstream_selection_change(&self, selection: &Selection) -> Result<(), RefreshError>;
}

/// Subscribe `downstream` to `upstream`'s selection changes.
///
/// The slot holds only a weak reference to `downstream`, so the subscription
/// never keeps a component alive. Dropping the returned guard unsubscribes.
pub fn bind<U, D>(upstream: &U, downstream: &Arc<D>) -> ConnectionGuard<Selection>
where
    U: SelectionSource + ?Sized,
    D: SelectionObserver,
{
    let observer = Arc::downgrade(downstream);
    upstream.selection_changed().connect_scoped(move |selection| {
        if let Some(observer) = observer.upgrade() {
            // Failures are already logged and published on the observer's
            // refresh_failed signal.
            let _ = observer.on_upstream_selection_change(selection);
        }
    })
}
