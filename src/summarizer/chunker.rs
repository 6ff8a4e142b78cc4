//! Fixed-size batching of feedback items.

use std::slice::Chunks;

/// Split `items` into contiguous batches of at most `chunk_size` elements.
///
/// The iterator is lazy and preserves the original order; every batch is full
/// except possibly the last, and an empty input yields no batches.
/// `chunk_size` must be non-zero.
pub fn chunks<T>(items: &[T], chunk_size: usize) -> Chunks<'_, T> {
    items.chunks(chunk_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_count_matches_ceiling_division() {
        for (n, k, expected) in [(0, 10, 0), (1, 10, 1), (10, 10, 1), (11, 10, 2), (15, 10, 2), (30, 10, 3)] {
            let items: Vec<usize> = (0..n).collect();
            assert_eq!(
                chunks(&items, k).count(),
                expected,
                "n={n} k={k}"
            );
        }
    }

    #[test]
    fn test_all_chunks_full_except_last() {
        let items: Vec<usize> = (0..23).collect();
        let batches: Vec<&[usize]> = chunks(&items, 10).collect();

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 10);
        assert_eq!(batches[1].len(), 10);
        assert_eq!(batches[2].len(), 3);
    }

    #[test]
    fn test_concatenation_round_trips() {
        let items: Vec<usize> = (0..17).collect();
        let rejoined: Vec<usize> = chunks(&items, 5).flatten().copied().collect();
        assert_eq!(rejoined, items);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let items: Vec<String> = vec![];
        assert_eq!(chunks(&items, 10).count(), 0);
    }
}
