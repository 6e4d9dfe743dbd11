//! Built-in sample catalog.

use crate::catalog::CatalogData;
use crate::error::Result;

/// The fruit catalog document, embedded at compile time.
pub const FRUITS_TOML: &str = include_str!("../fixtures/fruits.toml");

/// Four fruit categories and their fruits with nutrition facts.
pub fn fruit_catalog() -> Result<CatalogData> {
    CatalogData::from_toml_str(FRUITS_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fruit_catalog_is_consistent() {
        let catalog = fruit_catalog().unwrap();
        assert_eq!(catalog.category_count(), 4);
        assert_eq!(catalog.item_count(), 20);
        assert!(catalog.dangling_item_keys().is_empty());
        assert_eq!(
            catalog.sorted_category_keys(),
            vec!["Citrus Fruits", "Melons", "Other Fruits", "Tree Fruits"]
        );
    }

    #[test]
    fn test_fruit_fields() {
        let catalog = fruit_catalog().unwrap();
        let avocado = catalog.item("Avocado").unwrap();
        assert_eq!(avocado.field("total_fat_g").unwrap().to_string(), "4.5");
        assert_eq!(avocado.field("serving_size").unwrap().to_string(), "1/5 medium (30g)");
    }

    #[test]
    fn test_fruit_fields_keep_declared_order() {
        let catalog = fruit_catalog().unwrap();
        let grapefruit = catalog.item("Grapefruit").unwrap();
        let names: Vec<_> = grapefruit.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            [
                "serving_size",
                "calories",
                "total_fat_g",
                "sodium_mg",
                "potassium_mg",
                "total_carbohydrate_g",
                "dietary_fiber_g",
                "sugars_g",
                "protein_g",
            ]
        );
    }
}
