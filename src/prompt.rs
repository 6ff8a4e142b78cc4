/// Bullet marker used when joining feedback items into a prompt.
pub const BULLET: &str = "- ";

/// Word cap requested from the model for the integrated analysis.
pub const ANALYSIS_WORD_LIMIT: usize = 100;

/// Join items into a newline-separated bullet list.
pub fn bullet_join(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", BULLET, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for summarizing one chunk of raw feedback items.
pub fn chunk_prompt(items: &[String], role: &str) -> String {
    format!(
        "You are an expert analyst. Summarize the following {} feedback points \
         into a concise paragraph:\n\n{}",
        role,
        bullet_join(items)
    )
}

/// Prompt for condensing several chunk summaries into one paragraph.
pub fn reduction_prompt(summaries: &[String], role: &str) -> String {
    format!(
        "You are an expert analyst. Summarize the following summarized {} \
         feedback points into a concise paragraph:\n\n{}",
        role,
        bullet_join(summaries)
    )
}

/// Prompt for the second-pass integrated analysis over a finished summary.
pub fn analysis_prompt(summary: &str, role: &str) -> String {
    format!(
        "You are an expert educational analyst.\n\n\
         Here is the summary of {} feedback about a session:\n{}\n\n\
         Please provide: an integrated analysis highlighting the overall \
         performance of trainers and the quality of sessions in less than \
         {} words.",
        role, summary, ANALYSIS_WORD_LIMIT
    )
}
