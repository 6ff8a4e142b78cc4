use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;

use feedback_digest::ai::OpenAiClient;
use feedback_digest::core::config::AppConfig;
use feedback_digest::core::models::{RetryPolicy, SummaryOptions};
use feedback_digest::summarizer::Summarizer;

/// Summarize a collection of feedback items with ChatGPT.
///
/// Feedback is read from a file (or stdin) as either a JSON array of strings
/// or newline-delimited text, one item per line.
#[derive(Debug, Parser)]
#[command(name = "feedback-digest", version, about)]
struct Cli {
    /// File with feedback items; reads stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Role label injected into the prompts (e.g. "student", "trainer")
    #[arg(long, default_value = "student")]
    role: String,

    /// Feedback items summarized per API call
    #[arg(long, default_value_t = 10)]
    chunk_size: usize,

    /// Also run the integrated-analysis pass over the final summary
    #[arg(long)]
    analysis: bool,

    /// Model identifier; overrides OPENAI_MODEL
    #[arg(long)]
    model: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,

    /// Additional attempts after a failed request (exponential backoff)
    #[arg(long, default_value_t = 0)]
    max_retries: usize,
}

fn read_feedback(input: Option<&PathBuf>) -> Result<Vec<String>> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).context("Failed to parse feedback JSON array")
    } else {
        Ok(raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    feedback_digest::setup_logging();

    let cli = Cli::parse();

    let config = AppConfig::from_env().map_err(|e| anyhow!("Config error: {e}"))?;
    let model = cli
        .model
        .clone()
        .unwrap_or_else(|| config.model().to_string());

    let feedback = read_feedback(cli.input.as_ref())?;
    info!("Loaded {} feedback items", feedback.len());

    let client = OpenAiClient::with_timeout(
        config.openai_api_key.clone(),
        config.openai_org_id.clone(),
        model,
        Duration::from_secs(cli.timeout_secs),
    )?;

    let options = SummaryOptions {
        chunk_size: cli.chunk_size,
        retry: RetryPolicy {
            max_retries: cli.max_retries,
            ..RetryPolicy::default()
        },
    };
    let summarizer = Summarizer::with_options(Arc::new(client), options);

    let summary = summarizer
        .hierarchical_summarize(&feedback, &cli.role)
        .await?;
    println!("{summary}");

    if cli.analysis {
        let analysis = summarizer.integrated_analysis(&summary, &cli.role).await?;
        println!("\n{analysis}");
    }

    Ok(())
}
