use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4}",
    )
    .unwrap()
});
static PROPER_NOUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap());

const NO_DATES: &str = "No dates found in the document.";
const NO_PROPER_NOUNS: &str = "No proper nouns found.";
const ENTITY_PROMPT: &str = "I can extract dates or proper nouns. \
     Please specify which one you'd like to extract.";

/// Entity extraction, sub-routed on keywords in the instruction (not the
/// document): "date" and "proper noun" are the two recognized entity kinds.
pub fn extract(doc: &str, instruction: &str) -> String {
    if instruction.contains("date") {
        extract_dates(doc)
    } else if instruction.contains("proper noun") {
        extract_proper_nouns(doc)
    } else {
        ENTITY_PROMPT.to_string()
    }
}

/// Scan for `<month> <day>[ordinal][,] <year>` dates, month name or
/// three-letter abbreviation, case-insensitive.
fn extract_dates(doc: &str) -> String {
    let dates: Vec<&str> = DATE_RE.find_iter(doc).map(|m| m.as_str()).collect();
    if dates.is_empty() {
        return NO_DATES.to_string();
    }
    format!("Dates found in the document:\n{}", dates.join("\n"))
}

/// Scan for runs of capitalized words, deduplicated in first-seen order.
fn extract_proper_nouns(doc: &str) -> String {
    let mut seen = HashSet::new();
    let mut nouns = Vec::new();
    for m in PROPER_NOUN_RE.find_iter(doc) {
        if seen.insert(m.as_str()) {
            nouns.push(m.as_str());
        }
    }
    if nouns.is_empty() {
        return NO_PROPER_NOUNS.to_string();
    }
    format!("Proper nouns found in the document:\n{}", nouns.join("\n"))
}
