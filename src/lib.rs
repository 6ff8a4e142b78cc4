/// feedback-digest - hierarchical summarization of feedback collections using ChatGPT.
///
/// Feedback items are split into fixed-size batches, each batch is summarized
/// with one chat-completion request, and multiple batch summaries are condensed
/// into a single final summary. An optional second pass turns that summary into
/// a short integrated analysis.
///
/// # Architecture
///
/// The crate uses:
/// - reqwest for the OpenAI chat-completions endpoint
/// - openai-api-rs for chat message types
/// - Tokio for the async runtime
/// - tokio-retry for the (opt-in) bounded backoff policy
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use feedback_digest::ai::OpenAiClient;
/// use feedback_digest::core::config::AppConfig;
/// use feedback_digest::summarizer::Summarizer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     feedback_digest::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client = OpenAiClient::new(
///         config.openai_api_key.clone(),
///         config.openai_org_id.clone(),
///         config.model().to_string(),
///     )?;
///
///     let summarizer = Summarizer::new(Arc::new(client));
///     let feedback = vec![
///         "The pacing was great.".to_string(),
///         "More hands-on exercises, please.".to_string(),
///     ];
///
///     let summary = summarizer.hierarchical_summarize(&feedback, "student").await?;
///     println!("{summary}");
///
///     let analysis = summarizer.integrated_analysis(&summary, "student").await?;
///     println!("{analysis}");
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod summarizer;

pub use errors::SummaryError;
pub use summarizer::Summarizer;

/// Configure structured logging for CLI and library consumers.
///
/// Sets up tracing-subscriber with a plain fmt layer. Call once at process
/// start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
