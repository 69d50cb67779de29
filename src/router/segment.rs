use std::sync::LazyLock;

use regex::Regex;

static BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split `text` into sentences at every point where `.`, `!` or `?` is
/// immediately followed by whitespace. The punctuation stays with the
/// preceding sentence; the whitespace run is consumed.
///
/// Deliberately naive: abbreviations and decimals false-split ("Mr. Smith"
/// becomes two fragments). Recomputed per call, no caching.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in BOUNDARY_RE.find_iter(text) {
        // Keep the single terminal punctuation byte with the sentence.
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}
