use super::SENTENCE_LIMIT;
use crate::router::segment::split_sentences;

const MIN_CHARS: usize = 20;

/// Bullet out the substantial sentences among the first five. The header is
/// emitted even when nothing qualifies; unlike question generation there is
/// no fallback message.
pub fn extract(doc: &str) -> String {
    let sentences = split_sentences(doc);
    let points: Vec<String> = sentences
        .iter()
        .take(SENTENCE_LIMIT)
        .filter(|s| s.chars().count() > MIN_CHARS)
        .map(|s| format!("• {}", s))
        .collect();

    format!("Key points from the document:\n{}", points.join("\n"))
}
