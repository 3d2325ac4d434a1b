//! Mock AI adapter for running without an API key.
//!
//! Returns a canned pros/cons/verdict summary.

use crate::domain::DomainError;
use crate::ports::AiPort;
use std::time::Duration;
use tracing::info;

/// Mock AI adapter.
///
/// Returns predetermined responses without making API calls.
/// Simulates network latency with configurable delay.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (300ms).
    pub fn new() -> Self {
        Self { delay_ms: 300 }
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AiPort for MockAiAdapter {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        info!(prompt_len = prompt.len(), "[MOCK] Simulating AI summary");

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok("[MOCK] Pros:\n\
            - Reviewers mention the points that matter most to them\n\
            \n\
            Cons:\n\
            - This summary was not generated by a real model\n\
            \n\
            Verdict: Set SHOPGPT_AI_API_KEY (or GROQ_API_KEY) for real buying advice."
            .to_string())
    }
}
