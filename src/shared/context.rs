//! Application context. Built once in `main` and handed to the UI.

use crate::usecases::{CatalogService, ReportService, SummaryService};
use std::sync::Arc;

/// Services the interaction shell drives. Cheap to clone.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<CatalogService>,
    pub summary: Arc<SummaryService>,
    pub reports: Arc<ReportService>,
}

impl AppContext {
    pub fn new(
        catalog: Arc<CatalogService>,
        summary: Arc<SummaryService>,
        reports: Arc<ReportService>,
    ) -> Self {
        Self {
            catalog,
            summary,
            reports,
        }
    }
}
