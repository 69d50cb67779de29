use super::SENTENCE_LIMIT;
use crate::router::segment::split_sentences;

const MIN_WORDS: usize = 5;
const NO_QUESTIONS: &str = "I couldn't generate meaningful questions from the document. \
     The content might be too short.";

/// Turn the first few sentences into comprehension questions, skipping
/// sentences too short to carry a point. The numeral is the sentence's
/// position among the first five, so skipped sentences leave gaps in the
/// emitted numbering.
pub fn generate(doc: &str) -> String {
    let sentences = split_sentences(doc);
    let mut questions = Vec::new();

    for (i, sentence) in sentences.iter().take(SENTENCE_LIMIT).enumerate() {
        if sentence.split_whitespace().count() > MIN_WORDS {
            questions.push(format!(
                "{}. What is the main point of: '{}...'",
                i + 1,
                sentence
            ));
        }
    }

    if questions.is_empty() {
        return NO_QUESTIONS.to_string();
    }

    format!(
        "Here are some questions based on the document:\n{}",
        questions.join("\n")
    )
}
