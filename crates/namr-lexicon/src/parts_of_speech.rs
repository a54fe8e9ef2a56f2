// Part-of-speech table: word to grammatical category label

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use namr_core::case::fold_case;

use crate::format::{data_lines, split_fields};
use crate::{LexiconError, PartOfSpeechLookup};

/// Read-only mapping from word to part-of-speech label.
///
/// When a word occurs more than once in the source data the first label is
/// kept.
#[derive(Debug, Clone, Default)]
pub struct PartOfSpeechTable {
    entries: HashMap<String, String>,
}

impl PartOfSpeechTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(word, label)` pairs. Words are case-folded;
    /// the first pair for a word wins.
    pub fn from_pairs<I, W, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, L)>,
        W: AsRef<str>,
        L: Into<String>,
    {
        let mut table = Self::new();
        for (word, label) in pairs {
            table.insert_first(fold_case(word.as_ref()), label.into());
        }
        table
    }

    /// Parse a `word<TAB>label` table.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut table = Self::new();
        for line in data_lines(text) {
            let (word, label) =
                split_fields(line.text).ok_or(LexiconError::MissingTab { line: line.number })?;
            if word.is_empty() || label.is_empty() {
                return Err(LexiconError::EmptyField { line: line.number });
            }
            table.insert_first(fold_case(word), label.to_string());
        }
        Ok(table)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert_first(&mut self, word: String, label: String) {
        match self.entries.entry(word) {
            Entry::Occupied(existing) => {
                tracing::trace!(word = %existing.key(), kept = %existing.get(), dropped = %label, "duplicate part-of-speech entry");
            }
            Entry::Vacant(slot) => {
                slot.insert(label);
            }
        }
    }
}

impl PartOfSpeechLookup for PartOfSpeechTable {
    fn part_of_speech(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown() {
        let table = PartOfSpeechTable::from_pairs([("sort", "Verb (transitive)"), ("table", "Noun")]);
        assert_eq!(table.part_of_speech("sort"), Some("Verb (transitive)"));
        assert_eq!(table.part_of_speech("table"), Some("Noun"));
        assert_eq!(table.part_of_speech("chair"), None);
    }

    #[test]
    fn first_entry_wins() {
        let table = PartOfSpeechTable::from_pairs([("archive", "Noun"), ("archive", "Verb (transitive)")]);
        assert_eq!(table.part_of_speech("archive"), Some("Noun"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn parse_table() {
        let text = "# words\nsort\tVerb (transitive)\nsort\tNoun\nTable\tNoun\n";
        let table = PartOfSpeechTable::parse(text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.part_of_speech("sort"), Some("Verb (transitive)"));
        assert_eq!(table.part_of_speech("table"), Some("Noun"));
    }

    #[test]
    fn parse_missing_tab() {
        let err = PartOfSpeechTable::parse("sort\tNoun\nbroken line\n").unwrap_err();
        assert!(matches!(err, LexiconError::MissingTab { line: 2 }));
    }

    #[test]
    fn parse_empty_label() {
        let err = PartOfSpeechTable::parse("sort\t \n").unwrap_err();
        assert!(matches!(err, LexiconError::EmptyField { line: 1 }));
    }

    #[test]
    fn empty_table() {
        let table = PartOfSpeechTable::new();
        assert!(table.is_empty());
        assert_eq!(table.part_of_speech("sort"), None);
    }
}
