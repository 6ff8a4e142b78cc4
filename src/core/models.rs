/// Default number of feedback items summarized per API call.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Retry behavior for backend calls.
///
/// The default is a single attempt (no retries), matching the original
/// fire-once call pattern. Callers opt in to exponential backoff by raising
/// `max_retries`.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure.
    pub max_retries: usize,
    /// Base delay for the exponential backoff schedule.
    pub base_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_delay_ms: 100,
        }
    }
}

/// Tuning knobs for the summarizer.
#[derive(Debug, Clone, Copy)]
pub struct SummaryOptions {
    pub chunk_size: usize,
    pub retry: RetryPolicy,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            retry: RetryPolicy::default(),
        }
    }
}

impl SummaryOptions {
    /// Chunk size with the zero case clamped away; chunking requires a
    /// positive batch size.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}
