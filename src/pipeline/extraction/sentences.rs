use std::sync::LazyLock;

use regex::Regex;

/// Runs of terminal punctuation. "Dr." and similar abbreviations split too;
/// sentences only scope context indicators, so that is acceptable.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence boundary regex"));

/// Split text into sentences, dropping empty and whitespace-only fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
