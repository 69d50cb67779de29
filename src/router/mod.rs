pub mod extract;
pub mod segment;

use tracing::debug;

use crate::session::Session;

const NO_DOCUMENT: &str =
    "No document has been uploaded yet. Please upload a document first.";
const UNKNOWN_INSTRUCTION: &str = "I'm not sure how to process that instruction. \
     Please try asking to generate questions, summarize, or extract key points.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Questions,
    Summary,
    KeyPoints,
    Entities,
}

/// Ranked classification rules, checked top to bottom; the first rule whose
/// keyword appears in the instruction wins, so an instruction matching
/// several categories always resolves to the earliest one.
const INTENT_RULES: &[(&[&str], Intent)] = &[
    (&["question", "quiz"], Intent::Questions),
    (&["summar"], Intent::Summary),
    (&["key point", "main point"], Intent::KeyPoints),
    (&["extract", "find"], Intent::Entities),
];

/// Classify a lower-cased instruction into an intent via substring search
/// over the ranked rule table.
pub fn classify(instruction: &str) -> Option<Intent> {
    INTENT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| instruction.contains(kw)))
        .map(|(_, intent)| *intent)
}

/// Answer one instruction against the session's document. Pure over the
/// session state and the instruction string; every input produces a
/// defined informational string, never an error.
pub fn route(session: &Session, instruction: &str) -> String {
    if !session.is_ready() {
        return NO_DOCUMENT.to_string();
    }

    let instruction = instruction.trim().to_lowercase();
    match classify(&instruction) {
        Some(intent) => {
            debug!("Instruction classified as {:?}", intent);
            let doc = session.content();
            match intent {
                Intent::Questions => extract::questions::generate(doc),
                Intent::Summary => extract::summary::summarize(doc),
                Intent::KeyPoints => extract::key_points::extract(doc),
                Intent::Entities => extract::entities::extract(doc, &instruction),
            }
        }
        None => {
            debug!("Instruction matched no intent rule");
            UNKNOWN_INSTRUCTION.to_string()
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(doc: &str) -> Session {
        let mut s = Session::new();
        s.upload(doc);
        s
    }

    #[test]
    fn no_document_guard_ignores_instruction() {
        let s = Session::new();
        for instruction in ["summarize", "generate questions", "", "garbage"] {
            assert_eq!(route(&s, instruction), NO_DOCUMENT);
        }
    }

    #[test]
    fn empty_upload_still_guarded() {
        let s = session_with("   ");
        assert_eq!(route(&s, "summarize"), NO_DOCUMENT);
    }

    #[test]
    fn classify_each_intent() {
        assert_eq!(classify("generate questions"), Some(Intent::Questions));
        assert_eq!(classify("make a quiz"), Some(Intent::Questions));
        assert_eq!(classify("summarize this"), Some(Intent::Summary));
        assert_eq!(classify("give me a summary"), Some(Intent::Summary));
        assert_eq!(classify("extract key points"), Some(Intent::KeyPoints));
        assert_eq!(classify("what are the main points"), Some(Intent::KeyPoints));
        assert_eq!(classify("find dates"), Some(Intent::Entities));
        assert_eq!(classify("extract the names"), Some(Intent::Entities));
        assert_eq!(classify("tell me a joke"), None);
    }

    #[test]
    fn priority_order_wins_ties() {
        // "extract key points" contains both "key point" and "extract";
        // the key-point rule outranks the entity rule.
        assert_eq!(classify("extract key points"), Some(Intent::KeyPoints));
        // "summarize and extract key points" matches three rules; "summar"
        // is ranked highest of those.
        assert_eq!(
            classify("summarize and extract key points"),
            Some(Intent::Summary)
        );
        assert_eq!(classify("quiz me on the summary"), Some(Intent::Questions));
    }

    #[test]
    fn instruction_is_case_insensitive() {
        let s = session_with("A long enough sentence about something. Short.");
        assert_eq!(route(&s, "SUMMARIZE"), route(&s, "summarize"));
    }

    #[test]
    fn unknown_instruction_message() {
        let s = session_with("Some document.");
        assert_eq!(route(&s, "dance for me"), UNKNOWN_INSTRUCTION);
    }

    #[test]
    fn route_is_idempotent() {
        let s = session_with(
            "The committee met on January 5th, 2024 to discuss the budget. \
             The proposal passed unanimously after a short debate.",
        );
        for instruction in ["summarize", "generate questions", "find dates"] {
            assert_eq!(route(&s, instruction), route(&s, instruction));
        }
    }

    #[test]
    fn summary_priority_end_to_end() {
        let s = session_with("A. B. C. D.");
        let out = route(&s, "summarize and extract key points");
        assert!(out.starts_with("Summary:"));
    }
}
