//! Read-only catalog of categories and items.
//!
//! A [`CatalogData`] is built once, before any view exists, and is then
//! shared behind an `Arc` by every stage of the cascade. Categories keep the
//! order they were declared in; items are looked up by key.
//!
//! # Fixture format
//!
//! Catalogs load from TOML (or the equivalent JSON shape):
//!
//! ```toml
//! [[categories]]
//! key = "citrus"
//! name = "Citrus"
//! items = ["orange", "lemon"]
//!
//! [[items]]
//! key = "orange"
//! name = "Orange"
//! fields = { calories = 80, serving_size = "1 medium (154g)" }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use listcascade_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named, ordered group of item keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Keys of the items in this category, in display order.
    #[serde(default)]
    pub items: Vec<String>,
}

impl Category {
    /// Create a category.
    pub fn new<I, S>(key: impl Into<String>, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// A scalar descriptive value attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating point number.
    Float(f64),
    /// A string value.
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A selectable leaf entry with descriptive fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Descriptive fields, in declared order.
    #[serde(default, with = "ordered_fields")]
    pub fields: Vec<(String, FieldValue)>,
}

impl Item {
    /// Create an item with no fields.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style field setter. A repeated name replaces the value in place.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

/// Serde adapter keeping a field table in document order.
mod ordered_fields {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use super::FieldValue;

    pub(super) fn serialize<S>(fields: &[(String, FieldValue)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (name, value) in fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, FieldValue)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = Vec<(String, FieldValue)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of item fields")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, FieldValue>()? {
                    fields.push((name, value));
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

/// On-disk shape of a catalog document.
#[derive(Debug, Default, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    items: Vec<Item>,
}

/// The shared, read-only data behind a cascade.
#[derive(Debug, Clone, Default)]
pub struct CatalogData {
    /// Categories in declared order.
    categories: Vec<Category>,
    /// Category key -> position in `categories`.
    category_index: HashMap<String, usize>,
    /// Items by key.
    items: HashMap<String, Item>,
}

impl CatalogData {
    /// Build a catalog, rejecting duplicate category or item keys.
    ///
    /// Categories may reference item keys that have no entry in `items`;
    /// such references are reported by [`dangling_item_keys`](Self::dangling_item_keys)
    /// and fail only when something tries to render them.
    pub fn new(categories: Vec<Category>, items: Vec<Item>) -> Result<Self> {
        let mut category_index = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            if category_index.insert(category.key.clone(), position).is_some() {
                return Err(Error::DuplicateCategory {
                    key: category.key.clone(),
                });
            }
        }

        let mut item_map = HashMap::with_capacity(items.len());
        for item in items {
            if item_map.contains_key(&item.key) {
                return Err(Error::DuplicateItem { key: item.key });
            }
            item_map.insert(item.key.clone(), item);
        }

        let catalog = Self {
            categories,
            category_index,
            items: item_map,
        };

        for (category, item) in catalog.dangling_item_keys() {
            tracing::warn!(
                target: targets::CATALOG,
                category = %category,
                item = %item,
                "category references an item that is not in the catalog"
            );
        }
        tracing::debug!(
            target: targets::CATALOG,
            categories = catalog.categories.len(),
            items = catalog.items.len(),
            "catalog built"
        );

        Ok(catalog)
    }

    /// Parse a catalog from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let doc: CatalogDocument = toml::from_str(source).map_err(|e| Error::parse("TOML", e))?;
        Self::new(doc.categories, doc.items)
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        let doc: CatalogDocument =
            serde_json::from_str(source).map_err(|e| Error::parse("JSON", e))?;
        Self::new(doc.categories, doc.items)
    }

    /// Load a catalog file. Files ending in `.json` are read as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::info!(target: targets::CATALOG, path = %path.display(), "loading catalog");

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_toml_str(&source),
        }
    }

    /// Look up a category by key.
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.category_index
            .get(key)
            .map(|&position| &self.categories[position])
    }

    /// Look up an item by key.
    pub fn item(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    /// All categories in declared order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category keys in declared order.
    pub fn category_keys(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.key.clone()).collect()
    }

    /// Category keys in lexicographic order.
    pub fn sorted_category_keys(&self) -> Vec<String> {
        let mut keys = self.category_keys();
        keys.sort();
        keys
    }

    /// The declared item keys of a category, or `None` if the category is absent.
    pub fn items_in_category(&self, key: &str) -> Option<Vec<String>> {
        self.category(key).map(|c| c.items.clone())
    }

    /// `(category, item)` pairs where the category lists an item key the
    /// catalog has no entry for.
    pub fn dangling_item_keys(&self) -> Vec<(String, String)> {
        self.categories
            .iter()
            .flat_map(|c| {
                c.items
                    .iter()
                    .filter(|key| !self.items.contains_key(key.as_str()))
                    .map(|key| (c.key.clone(), key.clone()))
            })
            .collect()
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
