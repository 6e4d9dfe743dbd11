//! Property tests for cascade invariants.
//!
//! Uses proptest to verify, over random sequences of user selections:
//! 1. Single selection: every selector holds exactly one key
//! 2. Derivation: the item list always equals the selected category's items
//! 3. Propagation: the detail panel always shows the selected item

use std::sync::Arc;

use listcascade::fixtures::fruit_catalog;
use listcascade::{CascadeConfig, CascadingView, RefreshStatus};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

/// A user click: either a category row or an item row, by position.
#[derive(Debug, Clone)]
enum Click {
    Category(usize),
    Item(usize),
}

fn arb_click() -> impl Strategy<Value = Click> {
    prop_oneof![
        (0..8usize).prop_map(Click::Category),
        (0..12usize).prop_map(Click::Item),
    ]
}

// ── Invariants ───────────────────────────────────────────────────────

proptest! {
    /// Valid clicks never leave a selector with zero or several keys, and
    /// every stage stays consistent with the one upstream of it.
    #[test]
    fn cascade_stays_consistent(clicks in prop::collection::vec(arb_click(), 1..40)) {
        let view = CascadingView::new(Arc::new(fruit_catalog().unwrap()), &CascadeConfig::default());

        for click in clicks {
            match click {
                Click::Category(n) => {
                    let keys = view.categories().keys().to_vec();
                    if let Some(key) = keys.get(n) {
                        view.select_category(key).unwrap();
                    } else {
                        let missing = format!("missing-{n}");
                        prop_assert!(view.select_category(&missing).is_err());
                    }
                }
                Click::Item(n) => {
                    let keys = view.items().keys();
                    if let Some(key) = keys.get(n) {
                        view.select_item(key).unwrap();
                    } else {
                        let missing = format!("missing-{n}");
                        prop_assert!(view.select_item(&missing).is_err());
                    }
                }
            }

            let category = view.categories().selection();
            let item = view.items().selection();
            prop_assert_eq!(category.len(), 1);
            prop_assert_eq!(item.len(), 1);

            let declared = view.catalog().items_in_category(category.first().unwrap()).unwrap();
            prop_assert_eq!(view.items().keys(), declared);

            let detail = view.detail().view();
            prop_assert_eq!(detail.item_key(), item.first());
            prop_assert_eq!(view.items().status(), RefreshStatus::Populated);
            prop_assert_eq!(view.detail().status(), RefreshStatus::Populated);
        }
    }
}
