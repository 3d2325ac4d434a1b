//! Catalog browsing. Filters the loaded catalog by category and price.

use crate::domain::{filter_products, Catalog, DomainError, FilterCriteria, ProductRecord};
use crate::ports::CatalogPort;
use std::sync::Arc;
use tracing::{info, warn};

/// Read-only view over the catalog loaded at startup.
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Load the catalog once through `source`. Errors are fatal for the caller.
    pub async fn load(source: &dyn CatalogPort) -> Result<Self, DomainError> {
        let catalog = source.load().await?;
        Ok(Self::new(Arc::new(catalog)))
    }

    /// Distinct categories for the category selector.
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// Products matching `criteria`, in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Result<Vec<&ProductRecord>, DomainError> {
        let matches = filter_products(self.catalog.products(), criteria).inspect_err(|e| {
            warn!(error = %e, "filter aborted");
        })?;
        info!(
            category = %criteria.category,
            min_price = criteria.min_price,
            max_price = criteria.max_price,
            matches = matches.len(),
            "catalog filtered"
        );
        Ok(matches)
    }
}
