use std::error::Error;

use feedback_digest::errors::SummaryError;

#[test]
fn test_summary_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SummaryError::Config("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_summary_error_display() {
    let error = SummaryError::Config("OPENAI_API_KEY missing".to_string());
    assert_eq!(
        format!("{error}"),
        "Configuration error: OPENAI_API_KEY missing"
    );

    let error = SummaryError::OpenAi("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: Model unavailable"
    );

    let error = SummaryError::Http("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = SummaryError::EmptyFeedback;
    assert_eq!(format!("{error}"), "No feedback items to summarize");
}

#[test]
fn test_reqwest_error_maps_to_http() {
    // Build a reqwest::Error without doing any network I/O.
    let req_err = reqwest::Client::new().get("not a url").build().unwrap_err();
    let error = SummaryError::from(req_err);
    assert!(matches!(error, SummaryError::Http(_)));
}
