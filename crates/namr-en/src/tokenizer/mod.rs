// Title tokenizer and candidate word filter

use namr_core::case::fold_case;
use namr_core::token::WordToken;
use namr_lexicon::StopwordLookup;

/// Lower bound of the word length filter, in characters.
pub const MIN_WORD_CHARS: usize = 5;

/// Upper bound of the word length filter, in characters.
pub const MAX_WORD_CHARS: usize = 15;

/// Why a word was removed by [`filter_words`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason<'a> {
    /// Exact match in the stopword list.
    Stopword,
    /// Contains the given domain stopword stem.
    Stem(&'a str),
    /// Failed the length filter.
    Length,
}

/// Lowercase `title` and split it on runs of whitespace.
///
/// Returns an empty vector for empty or all-whitespace input.
pub fn tokenize(title: &str) -> Vec<WordToken> {
    fold_case(title)
        .split_whitespace()
        .map(WordToken::new)
        .collect()
}

/// Length filter applied to every word.
///
/// The condition is `len < MAX_WORD_CHARS || len > MIN_WORD_CHARS`, which
/// holds for every length: no word is ever dropped here.
pub fn passes_length_filter(char_len: usize) -> bool {
    char_len < MAX_WORD_CHARS || char_len > MIN_WORD_CHARS
}

/// Decide whether a single word is dropped, and why.
///
/// Checks run in order: exact stopword, stem containment, length.
pub fn drop_reason<'a>(word: &WordToken, stopwords: &'a dyn StopwordLookup) -> Option<DropReason<'a>> {
    if stopwords.is_stopword(&word.text) {
        return Some(DropReason::Stopword);
    }
    if let Some(stem) = stopwords.matching_stem(&word.text) {
        return Some(DropReason::Stem(stem));
    }
    if !passes_length_filter(word.char_len) {
        return Some(DropReason::Length);
    }
    None
}

/// Remove stopwords, stem matches and out-of-bounds words, keeping the
/// original order of the survivors.
pub fn filter_words(words: Vec<WordToken>, stopwords: &dyn StopwordLookup) -> Vec<WordToken> {
    words
        .into_iter()
        .filter(|word| match drop_reason(word, stopwords) {
            Some(reason) => {
                tracing::trace!(word = %word.text, ?reason, "dropped word");
                false
            }
            None => true,
        })
        .collect()
}

/// Tokenize `title` and filter the result: the candidate words a name can
/// be built from.
pub fn candidate_words(title: &str, stopwords: &dyn StopwordLookup) -> Vec<WordToken> {
    let words = filter_words(tokenize(title), stopwords);
    tracing::debug!(
        count = words.len(),
        words = ?words.iter().map(|w| w.text.as_str()).collect::<Vec<_>>(),
        "candidate words"
    );
    words
}
