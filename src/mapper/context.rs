use crate::hebrew;

/// Word-level facts computed once before the per-character walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordContext {
    /// The word uses full pointing (dagesh, rafe, shin or sin dot somewhere).
    pub is_dotted: bool,
}

impl WordContext {
    pub fn analyze(word: &str) -> Self {
        Self {
            is_dotted: hebrew::is_dotted(word),
        }
    }
}
