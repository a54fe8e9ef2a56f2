// Character classification and word-level string utilities

// ---------------------------------------------------------------------------
// Vowels
// ---------------------------------------------------------------------------

/// Vowels recognised by the spelling rules (lowercase): a e i o u
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Check whether a character is one of the lowercase vowels `a e i o u`.
///
/// Uppercase vowels and `y` are not vowels here; callers work on lowercased
/// words.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// Check whether a character is punctuation.
///
/// Punctuation is the ASCII punctuation class (`!"#$%&'()*+,-./:;<=>?@[\]^_`
/// and `` `{|}~ ``). Non-ASCII symbols such as the em dash are kept, and so
/// are accented letters.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Check whether a character belongs to a "word" for boundary purposes:
/// letters, digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

// ---------------------------------------------------------------------------
// String utilities
// ---------------------------------------------------------------------------

/// Remove every punctuation character from `word`.
///
/// Letters, digits and any other characters are kept in order.
pub fn strip_punctuation(word: &str) -> String {
    word.chars().filter(|&c| !is_punctuation(c)).collect()
}

/// Check whether some word in `text` starts with `prefix`.
///
/// A match counts only at a word boundary: the prefix sits at the start of
/// the text or right after a non-word character. Matching is exact; fold
/// the case of both arguments first for case-insensitive matching.
///
/// An empty prefix never matches.
pub fn has_word_with_prefix(text: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    text.match_indices(prefix).any(|(start, _)| {
        text[..start]
            .chars()
            .next_back()
            .is_none_or(|prev| !is_word_char(prev))
    })
}
