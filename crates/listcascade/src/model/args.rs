//! Row arguments handed to the list-rendering toolkit.
//!
//! A list widget renders one row per key. It asks the owning selector for
//! [`ListItemArgs`] through an [`ArgsConverter`], which maps a key and the
//! shared catalog to the row's visual parameters.

use std::sync::Arc;

use crate::catalog::CatalogData;

/// Default fixed row height, in toolkit units.
pub const DEFAULT_ROW_HEIGHT: u32 = 25;

/// Visual parameters for one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemArgs {
    /// Label text.
    pub text: String,
    /// Fixed row height.
    pub row_height: u32,
}

/// Type alias for a key-to-row-arguments transform.
///
/// Returns `None` when the key cannot be resolved in the catalog.
pub type ArgsConverter = Arc<dyn Fn(&str, &CatalogData) -> Option<ListItemArgs> + Send + Sync>;

/// Converter labelling rows with the category display name.
pub fn category_args(row_height: u32) -> ArgsConverter {
    Arc::new(move |key: &str, catalog: &CatalogData| {
        catalog.category(key).map(|category| ListItemArgs {
            text: category.name.clone(),
            row_height,
        })
    })
}

/// Converter labelling rows with the item display name.
pub fn item_args(row_height: u32) -> ArgsConverter {
    Arc::new(move |key: &str, catalog: &CatalogData| {
        catalog.item(key).map(|item| ListItemArgs {
            text: item.name.clone(),
            row_height,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Item};

    #[test]
    fn test_default_converters() {
        let catalog = CatalogData::new(
            vec![Category::new("citrus", "Citrus Fruits", ["lemon"])],
            vec![Item::new("lemon", "Lemon")],
        )
        .unwrap();

        let category = category_args(DEFAULT_ROW_HEIGHT);
        assert_eq!(
            category("citrus", &catalog),
            Some(ListItemArgs {
                text: "Citrus Fruits".into(),
                row_height: 25
            })
        );
        assert_eq!(category("lemon", &catalog), None);

        let item = item_args(40);
        assert_eq!(item("lemon", &catalog).map(|a| a.row_height), Some(40));
        assert_eq!(item("lime", &catalog), None);
    }
}
