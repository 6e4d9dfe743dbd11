//! Refresh state shared by downstream components.

use crate::error::RefreshError;

/// Where a downstream component is in its refresh lifecycle.
///
/// A successful refresh always leads to `Populated` and a failed one to
/// `Stale`, whatever the previous status. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshStatus {
    /// No refresh has completed yet.
    #[default]
    Uninitialized,
    /// The last refresh succeeded.
    Populated,
    /// The last refresh failed; the previous content is still shown.
    Stale,
}

/// Status plus the error that made a component stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RefreshTracker {
    status: RefreshStatus,
    last_error: Option<RefreshError>,
}

impl RefreshTracker {
    pub(crate) fn status(&self) -> RefreshStatus {
        self.status
    }

    pub(crate) fn last_error(&self) -> Option<&RefreshError> {
        self.last_error.as_ref()
    }

    pub(crate) fn succeed(&mut self) {
        self.status = RefreshStatus::Populated;
        self.last_error = None;
    }

    pub(crate) fn fail(&mut self, error: RefreshError) {
        self.status = RefreshStatus::Stale;
        self.last_error = Some(error);
    }
}
