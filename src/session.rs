/// In-memory state for one analysis session: the current document and
/// whether anything has been uploaded yet. Replaced wholesale on each
/// upload; nothing is appended or versioned.
#[derive(Debug, Default)]
pub struct Session {
    content: String,
    uploaded: bool,
}

pub const UPLOAD_ACK: &str =
    "Document received and ready for processing. Please provide your instruction.";

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` (leading/trailing whitespace stripped) as the current
    /// document. Always succeeds; an empty upload leaves the session not
    /// ready and routing degrades to the "no document" message.
    pub fn upload(&mut self, text: &str) -> &'static str {
        self.content = text.trim().to_string();
        self.uploaded = true;
        UPLOAD_ACK
    }

    pub fn is_ready(&self) -> bool {
        self.uploaded && !self.content.is_empty()
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
