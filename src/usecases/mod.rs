//! Application use cases. Orchestrate domain logic via ports.

pub mod catalog_service;
pub mod report_service;
pub mod summary_service;

pub use catalog_service::CatalogService;
pub use report_service::ReportService;
pub use summary_service::SummaryService;
