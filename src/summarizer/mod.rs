//! Hierarchical feedback summarization.
//!
//! Batches feedback items, summarizes each batch through the chat backend,
//! and condenses multiple batch summaries into a single paragraph. A second
//! pass can turn a finished summary into a short integrated analysis.

pub mod chunker;

use std::sync::Arc;

use tokio_retry::strategy::jitter;
use tokio_retry::{Retry, strategy::ExponentialBackoff};
use tracing::info;

use crate::ai::{ChatBackend, CompletionRequest};
use crate::core::models::{RetryPolicy, SummaryOptions};
use crate::errors::SummaryError;
use crate::prompt;

/// Sampling temperature for the chunk and reduction summarization steps.
pub const SUMMARY_TEMPERATURE: f64 = 0.5;

/// Sampling temperature for the integrated-analysis step.
pub const ANALYSIS_TEMPERATURE: f64 = 0.7;

/// Output token cap for every request.
pub const MAX_OUTPUT_TOKENS: i64 = 1000;

/// Hierarchical summarizer over a chat completion backend.
pub struct Summarizer {
    backend: Arc<dyn ChatBackend>,
    options: SummaryOptions,
}

impl Summarizer {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self::with_options(backend, SummaryOptions::default())
    }

    pub fn with_options(backend: Arc<dyn ChatBackend>, options: SummaryOptions) -> Self {
        Self { backend, options }
    }

    // Wrap a backend call with the configured retry schedule. The default
    // policy takes zero retries, so the operation runs exactly once.
    async fn with_retry(&self, request: CompletionRequest) -> Result<String, SummaryError> {
        let RetryPolicy {
            max_retries,
            base_delay_ms,
        } = self.options.retry;

        let text = if max_retries == 0 {
            self.backend.complete(request).await?
        } else {
            let strategy = ExponentialBackoff::from_millis(base_delay_ms)
                .map(jitter)
                .take(max_retries);

            Retry::spawn(strategy, || self.backend.complete(request.clone())).await?
        };

        Ok(text.trim().to_string())
    }

    /// Summarize one batch of feedback items for the given role.
    ///
    /// # Errors
    ///
    /// Propagates any backend failure; there is no local recovery beyond the
    /// configured retry policy.
    pub async fn summarize_chunk(
        &self,
        chunk: &[String],
        role: &str,
    ) -> Result<String, SummaryError> {
        self.with_retry(CompletionRequest {
            prompt: prompt::chunk_prompt(chunk, role),
            temperature: SUMMARY_TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        })
        .await
    }

    /// Produce one final summary for an entire feedback collection.
    ///
    /// Batches are summarized strictly in order, one request at a time. A
    /// single batch summary is returned verbatim; several are condensed with
    /// one further reduction request.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::EmptyFeedback`] for an empty collection, before
    /// any network call. Backend failures propagate unchanged.
    pub async fn hierarchical_summarize(
        &self,
        feedback: &[String],
        role: &str,
    ) -> Result<String, SummaryError> {
        if feedback.is_empty() {
            return Err(SummaryError::EmptyFeedback);
        }

        let chunk_size = self.options.effective_chunk_size();
        info!(
            "Summarizing {} {} feedback items in batches of {}",
            feedback.len(),
            role,
            chunk_size
        );

        let mut chunk_summaries = Vec::new();
        for chunk in chunker::chunks(feedback, chunk_size) {
            let summary = self.summarize_chunk(chunk, role).await?;
            chunk_summaries.push(summary);
        }

        // One batch means its summary already covers everything; a reduction
        // call would just summarize a summary.
        if chunk_summaries.len() == 1 {
            return Ok(chunk_summaries.into_iter().next().unwrap_or_default());
        }

        info!(
            "Condensing {} batch summaries into one",
            chunk_summaries.len()
        );

        self.with_retry(CompletionRequest {
            prompt: prompt::reduction_prompt(&chunk_summaries, role),
            temperature: SUMMARY_TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        })
        .await
    }

    /// Turn a finished summary into a short integrated analysis.
    ///
    /// Independent of the reducer; callers can feed it any summary text
    /// regardless of origin.
    ///
    /// # Errors
    ///
    /// Propagates any backend failure.
    pub async fn integrated_analysis(
        &self,
        summary: &str,
        role: &str,
    ) -> Result<String, SummaryError> {
        self.with_retry(CompletionRequest {
            prompt: prompt::analysis_prompt(summary, role),
            temperature: ANALYSIS_TEMPERATURE,
            max_tokens: MAX_OUTPUT_TOKENS,
        })
        .await
    }

    /// Summarize a student feedback collection end to end.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Summarizer::hierarchical_summarize`].
    pub async fn analyze_feedback(&self, feedback: &[String]) -> Result<String, SummaryError> {
        self.hierarchical_summarize(feedback, "student").await
    }
}
