//! Key-based selection state for selectors.
//!
//! This module provides [`SelectionState`], which tracks the selected keys of
//! one selector under a [`SelectionPolicy`], and [`Selection`], the value
//! carried by every `selection_changed` signal.
//!
//! # Example
//!
//! ```
//! use listcascade::model::{SelectionPolicy, SelectionState};
//!
//! let keys = vec!["orange".to_string(), "lemon".to_string()];
//! let mut state = SelectionState::new(SelectionPolicy::default());
//!
//! // The default policy is single selection with empty selection disallowed,
//! // so resetting over a non-empty key list always selects the first key.
//! state.reset_to_first(&keys);
//! assert_eq!(state.selection().first(), Some("orange"));
//!
//! state.select("lemon");
//! assert_eq!(state.selection().keys(), ["lemon"]);
//! ```

use serde::{Deserialize, Serialize};

/// An ordered set of selected keys.
///
/// Order is selection order. In single-selection mode it holds at most one key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selection(Vec<String>);

impl Selection {
    /// An empty selection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A selection holding exactly `key`.
    pub fn single(key: impl Into<String>) -> Self {
        Self(vec![key.into()])
    }

    /// The first selected key. Downstream stages resolve this one.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Selected keys in selection order.
    pub fn keys(&self) -> &[String] {
        &self.0
    }

    /// Returns true if `key` is selected.
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, key: &str) {
        if !self.contains(key) {
            self.0.push(key.to_string());
        }
    }

    fn remove(&mut self, key: &str) {
        self.0.retain(|k| k != key);
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::empty();
        for key in iter {
            selection.push(&key.into());
        }
        selection
    }
}

/// How many keys a selector may select at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// No items can be selected.
    None,
    /// Only one item can be selected at a time (default).
    #[default]
    Single,
    /// Each select toggles membership of one key.
    Multiple,
}

/// Selection mode plus the empty-selection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// Selection mode.
    pub mode: SelectionMode,
    /// Whether the selection may be empty while selectable keys exist.
    pub allow_empty_selection: bool,
}

impl SelectionPolicy {
    /// Single selection that may never be empty once a key exists.
    pub const SINGLE_REQUIRED: Self = Self {
        mode: SelectionMode::Single,
        allow_empty_selection: false,
    };

    /// Creates a policy.
    pub const fn new(mode: SelectionMode, allow_empty_selection: bool) -> Self {
        Self {
            mode,
            allow_empty_selection,
        }
    }

    /// Returns true if resetting over a non-empty key list must select a key.
    pub fn requires_selection(&self) -> bool {
        self.mode != SelectionMode::None && !self.allow_empty_selection
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self::SINGLE_REQUIRED
    }
}

/// Selection state for one selector.
///
/// `SelectionState` does not know the selector's key list; callers validate
/// keys before selecting and pass the list to [`reset_to_first`](Self::reset_to_first).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    policy: SelectionPolicy,
    selection: Selection,
}

impl SelectionState {
    /// Creates an empty selection state.
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            selection: Selection::empty(),
        }
    }

    /// The policy this state enforces.
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selects `key` according to the mode, returning `true` if the
    /// selection changed.
    ///
    /// - `Single`: the selection becomes exactly `{key}`.
    /// - `Multiple`: `key` is toggled, except that the last key is kept when
    ///   empty selection is disallowed.
    /// - `None`: nothing happens.
    pub fn select(&mut self, key: &str) -> bool {
        match self.policy.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                let next = Selection::single(key);
                if self.selection == next {
                    false
                } else {
                    self.selection = next;
                    true
                }
            }
            SelectionMode::Multiple => {
                if self.selection.contains(key) {
                    self.deselect(key)
                } else {
                    self.selection.push(key);
                    true
                }
            }
        }
    }

    /// Removes `key` from the selection unless that would leave it empty
    /// under a policy that disallows empty selection.
    pub fn deselect(&mut self, key: &str) -> bool {
        if !self.selection.contains(key) {
            return false;
        }
        if self.selection.len() == 1 && !self.policy.allow_empty_selection {
            return false;
        }
        self.selection.remove(key);
        true
    }

    /// Discards the selection and re-establishes the policy over a new key
    /// list: the first key is selected when the policy requires a selection.
    pub fn reset_to_first(&mut self, keys: &[String]) {
        self.selection = match keys.first() {
            Some(first) if self.policy.requires_selection() => Selection::single(first.as_str()),
            _ => Selection::empty(),
        };
    }

    /// Empties the selection. Only valid when no selectable key remains or
    /// the policy allows empty selection.
    pub fn clear(&mut self) {
        self.selection = Selection::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selection_state_creation() {
        let state = SelectionState::new(SelectionPolicy::default());
        assert!(state.selection().is_empty());
        assert_eq!(state.policy(), SelectionPolicy::SINGLE_REQUIRED);
    }

    #[test]
    fn test_single_selection() {
        let mut state = SelectionState::new(SelectionPolicy::default());
        state.reset_to_first(&keys(&["a", "b", "c"]));
        assert_eq!(state.selection().keys(), ["a"]);

        assert!(state.select("c"));
        assert_eq!(state.selection().keys(), ["c"]);

        // Re-selecting the same key is not a change
        assert!(!state.select("c"));
        assert_eq!(state.selection().len(), 1);
    }

    #[test]
    fn test_single_required_refuses_deselect() {
        let mut state = SelectionState::new(SelectionPolicy::default());
        state.reset_to_first(&keys(&["a"]));
        assert!(!state.deselect("a"));
        assert_eq!(state.selection().keys(), ["a"]);
    }

    #[test]
    fn test_allow_empty_skips_auto_select() {
        let mut state = SelectionState::new(SelectionPolicy::new(SelectionMode::Single, true));
        state.reset_to_first(&keys(&["a", "b"]));
        assert!(state.selection().is_empty());

        state.select("b");
        assert!(state.deselect("b"));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_multi_selection_toggles() {
        let mut state = SelectionState::new(SelectionPolicy::new(SelectionMode::Multiple, false));
        state.reset_to_first(&keys(&["a", "b", "c"]));

        assert!(state.select("c"));
        assert_eq!(state.selection().keys(), ["a", "c"]);

        assert!(state.select("a"));
        assert_eq!(state.selection().keys(), ["c"]);

        // Last key stays when empty selection is disallowed
        assert!(!state.select("c"));
        assert_eq!(state.selection().keys(), ["c"]);
    }

    #[test]
    fn test_no_selection_mode() {
        let mut state = SelectionState::new(SelectionPolicy::new(SelectionMode::None, false));
        state.reset_to_first(&keys(&["a"]));
        assert!(state.selection().is_empty());
        assert!(!state.select("a"));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_reset_over_empty_list() {
        let mut state = SelectionState::new(SelectionPolicy::default());
        state.reset_to_first(&keys(&["a"]));
        state.reset_to_first(&[]);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_selection_from_iter_dedups() {
        let selection: Selection = ["a", "b", "a"].into_iter().collect();
        assert_eq!(selection.keys(), ["a", "b"]);
        assert_eq!(selection.first(), Some("a"));
        assert!(selection.contains("b"));
    }
}
