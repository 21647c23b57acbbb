//! Chunk splitter for large diffs.
//!
//! Splits a raw diff into fixed-size character chunks so that each one
//! fits in a single request to the completion service. Slicing is
//! purely positional; hunk and file boundaries are ignored.

/// Split `diff` into chunks of at most `max_chars` characters.
///
/// Chunks are contiguous and non-overlapping, and concatenating them in
/// order reproduces `diff` exactly. Every chunk except possibly the
/// last holds exactly `max_chars` characters. An empty diff produces no
/// chunks; what that means is the caller's decision.
pub fn chunk_diff(diff: &str, max_chars: usize) -> Vec<String> {
    debug_assert!(max_chars > 0);

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut taken = 0;

    // char_indices keeps the cut points on character boundaries, so
    // multi-byte content never gets split mid-codepoint.
    for (offset, _) in diff.char_indices() {
        if taken == max_chars {
            chunks.push(diff[start..offset].to_string());
            start = offset;
            taken = 0;
        }
        taken += 1;
    }
    if start < diff.len() {
        chunks.push(diff[start..].to_string());
    }

    chunks
}
