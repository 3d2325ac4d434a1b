//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Catalog, DomainError, ReportLayout};

/// Source of the product catalog. Loaded once at startup.
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    /// Load the whole catalog. Any structural error aborts the load.
    async fn load(&self) -> Result<Catalog, DomainError>;
}

/// Text-generation service (chat completion).
#[async_trait::async_trait]
pub trait AiPort: Send + Sync {
    /// Send a single user prompt and return the completion text.
    ///
    /// Exactly one request per call; no retries.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}

/// Renders a laid-out report into the bytes of one output file.
pub trait ReportWriterPort: Send + Sync {
    /// File extension without the dot, e.g. `"pdf"`.
    fn extension(&self) -> &'static str;

    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, DomainError>;
}
