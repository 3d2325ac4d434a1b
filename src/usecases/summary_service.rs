//! Summary service. Turns product reviews into a pros/cons/verdict summary.

use crate::domain::{build_prompt, DomainError, ProductRecord};
use crate::ports::AiPort;
use std::sync::Arc;
use tracing::{info, warn};

/// Service for AI review summaries.
///
/// One AI request per call. No caching and no retries.
pub struct SummaryService {
    ai: Arc<dyn AiPort>,
}

impl SummaryService {
    pub fn new(ai: Arc<dyn AiPort>) -> Self {
        Self { ai }
    }

    /// All reviews of `matches`, in product order then review order.
    pub fn collect_reviews(matches: &[&ProductRecord]) -> Vec<String> {
        matches
            .iter()
            .flat_map(|p| p.reviews.iter().cloned())
            .collect()
    }

    /// Summarize `reviews`. The AI is called even when `reviews` is empty.
    pub async fn summarize(&self, reviews: &[String]) -> Result<String, DomainError> {
        if reviews.is_empty() {
            warn!("summarizing an empty review list");
        }
        let prompt = build_prompt(reviews);
        let summary = self.ai.complete(&prompt).await?;
        info!(
            reviews = reviews.len(),
            summary_len = summary.len(),
            "summary generated"
        );
        Ok(summary)
    }
}
