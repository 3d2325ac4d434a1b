//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Catalog load failed: {0}")]
    Load(String),

    /// A product's price could not be parsed. Aborts the filter call.
    #[error("Invalid price {raw:?} for product {product:?}")]
    PriceParse { product: String, raw: String },

    #[error("AI summary failed: {0}")]
    Service(String),

    #[error("Report export failed: {0}")]
    Write(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// Short name of the pipeline stage that failed. Shown to the user.
    pub fn stage(&self) -> &'static str {
        match self {
            DomainError::Load(_) => "catalog",
            DomainError::PriceParse { .. } => "filter",
            DomainError::Service(_) => "summary",
            DomainError::Write(_) => "export",
            DomainError::Input(_) => "input",
            DomainError::Config(_) => "config",
        }
    }
}
