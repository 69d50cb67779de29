use crate::router::segment::split_sentences;

const SUMMARY_SENTENCES: usize = 3;

/// Leading-sentence summary: the first three sentences space-joined, with a
/// trailing ellipsis. Documents with fewer sentences are joined as-is.
pub fn summarize(doc: &str) -> String {
    let sentences = split_sentences(doc);
    let summary = sentences
        .iter()
        .take(SUMMARY_SENTENCES)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    format!("Summary:\n{}...", summary)
}
