//! Implements CatalogPort using a JSON file.
//!
//! The file is a JSON array of product objects. Read once, never written.

use crate::domain::{Catalog, DomainError, ProductRecord};
use crate::ports::CatalogPort;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// JSON file-based catalog.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse catalog JSON. Missing fields or a non-array document fail the whole load.
    pub fn parse(json: &str) -> Result<Catalog, DomainError> {
        let products: Vec<ProductRecord> = serde_json::from_str(json)
            .map_err(|e| DomainError::Load(format!("malformed catalog: {}", e)))?;
        Ok(Catalog::new(products))
    }
}

#[async_trait::async_trait]
impl CatalogPort for JsonCatalog {
    async fn load(&self) -> Result<Catalog, DomainError> {
        let json = fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                DomainError::Load(format!("catalog file not found: {}", self.path.display()))
            }
            _ => DomainError::Load(format!("read {}: {}", self.path.display(), e)),
        })?;

        let catalog = Self::parse(&json)?;
        info!(
            path = %self.path.display(),
            products = catalog.len(),
            categories = catalog.categories().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shopgpt-catalog-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_valid_file() {
        let path = temp_file(
            "valid.json",
            r#"[
                {"product_name": "A", "category": "Shoes", "price": "$50", "reviews": ["great"]},
                {"product_name": "B", "category": "Boots", "price": "$120", "reviews": ["ok"], "sku": "x"}
            ]"#,
        );
        let catalog = JsonCatalog::new(&path).load().await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[0].name, "A");
        assert_eq!(catalog.products()[1].price, "$120");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = JsonCatalog::new("/nonexistent/shopgpt/products.json")
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Load(msg) if msg.contains("not found")));
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let path = temp_file("malformed.json", "[{\"product_name\": ");
        let err = JsonCatalog::new(&path).load().await.unwrap_err();
        assert!(matches!(err, DomainError::Load(_)));
    }

    #[test]
    fn test_missing_field_aborts_whole_load() {
        let json = r#"[
            {"product_name": "A", "category": "Shoes", "price": "$50", "reviews": []},
            {"product_name": "B", "category": "Boots", "reviews": []}
        ]"#;
        let err = JsonCatalog::parse(json).unwrap_err();
        assert!(matches!(err, DomainError::Load(msg) if msg.contains("price")));
    }

    #[test]
    fn test_empty_array_is_empty_catalog() {
        let catalog = JsonCatalog::parse("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_unparseable_price_still_loads() {
        let json = r#"[{"product_name": "C", "category": "Hats", "price": "abc", "reviews": []}]"#;
        let catalog = JsonCatalog::parse(json).unwrap();
        assert_eq!(catalog.products()[0].price, "abc");
    }
}
