//! Product catalog collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Price in the smallest currency unit.
    pub price_cents: u64,
    /// Pre-discount price, shown struck through when present.
    #[serde(default)]
    pub compare_at_cents: Option<u64>,
}

impl Product {
    pub fn price_label(&self) -> String {
        format_cents(self.price_cents)
    }

    pub fn is_discounted(&self) -> bool {
        self.compare_at_cents
            .is_some_and(|compare_at| compare_at > self.price_cents)
    }

    /// Route of the product detail page.
    pub fn route(&self) -> String {
        format!("/products/{}", self.id)
    }
}

pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Catalog collaborator. The storefront reads it and never mutates it.
pub trait CatalogSource: Send + Sync {
    fn products(&self) -> Arc<[Product]>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Arc<[Product]>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Loads a JSON array of products.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(products))
    }

    pub fn demo() -> Self {
        let item = |id: &str, name: &str, description: &str, category: &str, price, compare| {
            Product {
                id: ProductId::new(id),
                name: name.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                price_cents: price,
                compare_at_cents: compare,
            }
        };
        Self::new(vec![
            item("p-100", "Red Shoes", "Canvas sneakers with rubber soles", "Footwear", 4_999, Some(6_999)),
            item("p-101", "Blue Shoes", "Lightweight running shoes", "Footwear", 5_499, None),
            item("p-102", "Incense Sticks", "Hand-rolled sandalwood, pack of 40", "Home", 899, None),
            item("p-103", "Ceramic Mug", "Stoneware mug, 350 ml", "Kitchen", 1_450, None),
            item("p-104", "Leather Wallet", "Slim bifold with card slots", "Accessories", 3_200, Some(4_000)),
            item("p-105", "Desk Lamp", "Dimmable LED lamp with USB charging", "Home", 2_799, None),
            item("p-106", "Wool Scarf", "Merino wool, ideal with winter shoes", "Accessories", 2_250, None),
            item("p-107", "Cold Brew Kit", "Glass carafe and reusable filter", "Kitchen", 3_600, Some(4_200)),
        ])
    }
}

impl CatalogSource for StaticCatalog {
    fn products(&self) -> Arc<[Product]> {
        Arc::clone(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn price_label_formats_cents() {
        assert_eq!(format_cents(4_999), "$49.99");
        assert_eq!(format_cents(5), "$0.05");
    }

    #[test]
    fn discount_requires_higher_compare_price() {
        let catalog = StaticCatalog::demo();
        let products = catalog.products();
        assert!(products[0].is_discounted());
        assert!(!products[1].is_discounted());
    }

    #[test]
    fn loads_products_from_json() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id": "x1", "name": "Tea", "category": "Kitchen", "price_cents": 300}}]"#
        )
        .expect("write");

        let catalog = StaticCatalog::from_json_file(file.path()).expect("catalog");
        let products = catalog.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "x1");
        assert_eq!(products[0].description, "");
        assert_eq!(products[0].route(), "/products/x1");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{not json").expect("write");
        let err = StaticCatalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
