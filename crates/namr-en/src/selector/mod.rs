// Candidate word selection

use namr_core::character::strip_punctuation;
use namr_core::token::WordToken;
use namr_lexicon::{PartOfSpeechLookup, StopwordLookup};

use crate::error::NamingError;
use crate::tokenizer::candidate_words;

/// How the candidate word was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// It was the only word left after filtering.
    Only,
    /// Verbs were preferred and it was the first verb.
    FirstVerb,
    /// The last word was longer than the first.
    LongerLast,
    /// Fallback: the first word.
    First,
}

/// Attach part-of-speech labels to every word.
pub fn tag_parts_of_speech(words: Vec<WordToken>, pos: &dyn PartOfSpeechLookup) -> Vec<WordToken> {
    words
        .into_iter()
        .map(|word| {
            let label = pos.part_of_speech(&word.text).map(str::to_string);
            word.with_part_of_speech(label)
        })
        .collect()
}

/// Pick one word from the filtered, tagged candidates.
///
/// - a single word is returned as-is;
/// - with `prefer_verb`, the first verb-tagged word wins;
/// - otherwise the last word if it is longer than the first, else the first.
///
/// Lengths compare the words as written, punctuation included.
pub fn choose(words: &[WordToken], prefer_verb: bool) -> Option<(&WordToken, Selection)> {
    match words {
        [] => None,
        [only] => Some((only, Selection::Only)),
        [first, .., last] => {
            let verb = if prefer_verb {
                words.iter().find(|w| w.is_verb())
            } else {
                None
            };
            Some(match verb {
                Some(verb) => (verb, Selection::FirstVerb),
                None if last.char_len > first.char_len => (last, Selection::LongerLast),
                None => (first, Selection::First),
            })
        }
    }
}

/// Choose a word and strip its punctuation.
///
/// Fails with [`NamingError::NoCandidate`] when there are no words or the
/// chosen word is nothing but punctuation.
pub fn choose_candidate(words: &[WordToken], prefer_verb: bool) -> Result<String, NamingError> {
    let (word, selection) = choose(words, prefer_verb).ok_or(NamingError::NoCandidate)?;
    let candidate = strip_punctuation(&word.text);
    if candidate.is_empty() {
        tracing::debug!(word = %word.text, "chosen word is only punctuation");
        return Err(NamingError::NoCandidate);
    }
    tracing::debug!(%candidate, ?selection, prefer_verb, "selected word");
    Ok(candidate)
}

/// Select the word a name is built from.
pub fn select_word(
    title: &str,
    stopwords: &dyn StopwordLookup,
    pos: &dyn PartOfSpeechLookup,
    prefer_verb: bool,
) -> Result<String, NamingError> {
    let words = tag_parts_of_speech(candidate_words(title, stopwords), pos);
    choose_candidate(&words, prefer_verb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use namr_core::pos::{POS_NOUN, POS_VERB_INTRANSITIVE, POS_VERB_TRANSITIVE};
    use namr_lexicon::{PartOfSpeechTable, StopwordSet};

    fn stopwords() -> StopwordSet {
        StopwordSet::from_words(["the", "for", "and", "of", "a", "to"])
    }

    fn table() -> PartOfSpeechTable {
        PartOfSpeechTable::from_pairs([
            ("rocket", POS_NOUN),
            ("launch", POS_VERB_TRANSITIVE),
            ("launch", POS_NOUN),
            ("orbit", POS_VERB_INTRANSITIVE),
            ("galaxy", POS_NOUN),
        ])
    }

    fn words(texts: &[&str]) -> Vec<WordToken> {
        texts.iter().map(|t| WordToken::new(*t)).collect()
    }

    // -- choose --

    #[test]
    fn choose_empty() {
        assert_eq!(choose(&[], false), None);
    }

    #[test]
    fn choose_single_word() {
        let w = words(&["rocket"]);
        let (word, sel) = choose(&w, true).unwrap();
        assert_eq!(word.text, "rocket");
        assert_eq!(sel, Selection::Only);
    }

    #[test]
    fn longer_last_word_wins() {
        let w = words(&["sky", "galaxy"]);
        let (word, sel) = choose(&w, false).unwrap();
        assert_eq!(word.text, "galaxy");
        assert_eq!(sel, Selection::LongerLast);
    }

    #[test]
    fn first_word_wins_when_last_is_not_longer() {
        let w = words(&["galaxy", "sky"]);
        assert_eq!(choose(&w, false).unwrap().0.text, "galaxy");

        let w = words(&["moon", "star"]);
        let (word, sel) = choose(&w, false).unwrap();
        assert_eq!(word.text, "moon");
        assert_eq!(sel, Selection::First);
    }

    #[test]
    fn middle_words_only_matter_for_verbs() {
        let w = words(&["sky", "constellation", "galaxy"]);
        assert_eq!(choose(&w, false).unwrap().0.text, "galaxy");
    }

    #[test]
    fn first_verb_wins_when_preferred() {
        let w = tag_parts_of_speech(words(&["rocket", "orbit", "launch", "galaxy"]), &table());
        let (word, sel) = choose(&w, true).unwrap();
        assert_eq!(word.text, "orbit");
        assert_eq!(sel, Selection::FirstVerb);
    }

    #[test]
    fn verbs_ignored_unless_preferred() {
        let w = tag_parts_of_speech(words(&["rocket", "orbit", "galaxy"]), &table());
        assert_eq!(choose(&w, false).unwrap().0.text, "rocket");
    }

    #[test]
    fn no_verb_falls_back_to_length_rule() {
        let w = tag_parts_of_speech(words(&["sky", "galaxy"]), &table());
        let (word, sel) = choose(&w, true).unwrap();
        assert_eq!(word.text, "galaxy");
        assert_eq!(sel, Selection::LongerLast);
    }

    // -- tag_parts_of_speech --

    #[test]
    fn tagging_uses_first_entry() {
        let w = tag_parts_of_speech(words(&["launch", "nebula"]), &table());
        assert_eq!(w[0].part_of_speech.as_deref(), Some(POS_VERB_TRANSITIVE));
        assert_eq!(w[1].part_of_speech, None);
    }

    // -- choose_candidate --

    #[test]
    fn candidate_is_stripped() {
        let w = words(&["rocket!"]);
        assert_eq!(choose_candidate(&w, false).unwrap(), "rocket");
    }

    #[test]
    fn punctuation_counts_toward_length() {
        // "sky!!!!" (7) is longer than "galaxy" (6) as written
        let w = words(&["galaxy", "sky!!!!"]);
        assert_eq!(choose_candidate(&w, false).unwrap(), "sky");
    }

    #[test]
    fn punctuation_only_candidate_fails() {
        let w = words(&["--"]);
        assert_eq!(choose_candidate(&w, false), Err(NamingError::NoCandidate));
    }

    #[test]
    fn no_words_fails() {
        assert_eq!(choose_candidate(&[], false), Err(NamingError::NoCandidate));
    }

    // -- select_word --

    #[test]
    fn select_from_title() {
        let sw = stopwords();
        let pos = table();
        assert_eq!(
            select_word("A Sky for the Galaxy", &sw, &pos, false).unwrap(),
            "galaxy"
        );
    }

    #[test]
    fn select_equal_lengths_keeps_first() {
        let sw = stopwords();
        let pos = table();
        // "rocket" and "galaxy" are both six characters
        assert_eq!(
            select_word("A Rocket for the Galaxy", &sw, &pos, false).unwrap(),
            "rocket"
        );
    }

    #[test]
    fn select_prefers_verb() {
        let sw = stopwords();
        let pos = table();
        assert_eq!(
            select_word("Rocket to Launch and Orbit", &sw, &pos, true).unwrap(),
            "launch"
        );
    }

    #[test]
    fn select_fails_on_stopwords_only() {
        let sw = stopwords();
        let pos = table();
        assert_eq!(
            select_word("The Data of the Tools", &sw, &pos, false),
            Err(NamingError::NoCandidate)
        );
    }

    #[test]
    fn select_fails_on_empty_title() {
        let sw = stopwords();
        let pos = table();
        assert_eq!(select_word("   ", &sw, &pos, false), Err(NamingError::NoCandidate));
    }
}
