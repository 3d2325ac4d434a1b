//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod filter;
pub mod prompt;
pub mod report;

pub use entities::{Catalog, FilterCriteria, ProductRecord};
pub use errors::DomainError;
pub use filter::{filter_products, parse_price};
pub use prompt::build_prompt;
pub use report::{LayoutLine, LineStyle, ReportDocument, ReportLayout};
