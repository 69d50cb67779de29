pub mod entities;
pub mod key_points;
pub mod questions;
pub mod summary;

/// Sentences considered by the question and key-point extractors.
pub(crate) const SENTENCE_LIMIT: usize = 5;
