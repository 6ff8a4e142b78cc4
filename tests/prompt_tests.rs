use feedback_digest::prompt::{
    ANALYSIS_WORD_LIMIT, analysis_prompt, bullet_join, chunk_prompt, reduction_prompt,
};

#[test]
fn test_bullet_join_prefixes_every_item() {
    let items = vec![
        "Great pacing".to_string(),
        "Too much theory".to_string(),
        "Loved the labs".to_string(),
    ];

    let joined = bullet_join(&items);
    assert_eq!(joined, "- Great pacing\n- Too much theory\n- Loved the labs");
}

#[test]
fn test_bullet_join_empty_items() {
    assert_eq!(bullet_join(&[]), "");
}

#[test]
fn test_chunk_prompt_embeds_role_and_items() {
    let items = vec![
        "Clear explanations".to_string(),
        "Slides were dense".to_string(),
    ];

    let prompt = chunk_prompt(&items, "student");
    assert!(prompt.contains("student feedback points"));
    assert!(prompt.contains("- Clear explanations"));
    assert!(prompt.contains("- Slides were dense"));
    assert!(prompt.starts_with("You are an expert analyst."));
}

#[test]
fn test_reduction_prompt_marks_summarized_input() {
    let summaries = vec![
        "First batch praised the pacing.".to_string(),
        "Second batch wanted more exercises.".to_string(),
    ];

    let prompt = reduction_prompt(&summaries, "trainer");
    assert!(prompt.contains("summarized trainer feedback points"));
    assert!(prompt.contains("- First batch praised the pacing."));
    assert!(prompt.contains("- Second batch wanted more exercises."));
}

#[test]
fn test_analysis_prompt_embeds_summary_role_and_word_limit() {
    let prompt = analysis_prompt("Sessions were well received overall.", "student");
    assert!(prompt.contains("Sessions were well received overall."));
    assert!(prompt.contains("summary of student feedback"));
    assert!(prompt.contains(&format!("less than {} words", ANALYSIS_WORD_LIMIT)));
}
