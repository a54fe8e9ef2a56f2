// Word token type

/// A lowercase word extracted from a title.
///
/// The text holds no whitespace and is already case-folded by the tokenizer.
/// `part_of_speech` is filled in only when a word was looked up in a
/// part-of-speech table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    /// The word itself.
    pub text: String,

    /// Length of the word in characters.
    pub char_len: usize,

    /// Part-of-speech label, if known.
    pub part_of_speech: Option<String>,
}

impl WordToken {
    /// Create a new token without a part-of-speech tag.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        debug_assert!(!text.chars().any(char::is_whitespace));
        let char_len = text.chars().count();
        Self {
            text,
            char_len,
            part_of_speech: None,
        }
    }

    /// Attach a part-of-speech label (or clear it with `None`).
    pub fn with_part_of_speech(mut self, label: Option<impl Into<String>>) -> Self {
        self.part_of_speech = label.map(Into::into);
        self
    }

    /// Whether this token is tagged with a verb label.
    pub fn is_verb(&self) -> bool {
        self.part_of_speech
            .as_deref()
            .is_some_and(crate::pos::is_verb_label)
    }
}
