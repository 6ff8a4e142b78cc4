//! All AI/LLM functionality

pub mod client;

use async_trait::async_trait;

use crate::errors::SummaryError;

/// A single-turn completion request with fixed sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: i64,
}

/// Seam between the summarizer and the hosted completion service.
///
/// The summarizer takes this as a constructor-injected dependency, so tests
/// can substitute a fake backend without touching the process environment.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a single-turn request and return the trimmed text of the first
    /// response candidate.
    async fn complete(&self, request: CompletionRequest) -> Result<String, SummaryError>;
}

// Re-export main types for convenience
pub use client::OpenAiClient;
