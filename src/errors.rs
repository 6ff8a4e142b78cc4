use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAi(String),

    #[error("No feedback items to summarize")]
    EmptyFeedback,
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::Http(error.to_string())
    }
}
