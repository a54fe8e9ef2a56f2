//! Word lists consulted by the namr naming pipeline.
//!
//! Both lists are static, read-only data: they are loaded once (from the
//! embedded English data or from a directory on disk) and only queried
//! afterwards.
//!
//! # Architecture
//!
//! - [`format`] -- line-oriented data file parsing
//! - [`stopwords`] -- exact-match stopwords plus domain stopword stems
//! - [`parts_of_speech`] -- word to part-of-speech label table
//! - [`embedded`] -- the English data compiled into the binary
//!
//! The naming pipeline depends only on the [`StopwordLookup`] and
//! [`PartOfSpeechLookup`] traits, so tests can substitute small fixture
//! vocabularies.

pub mod embedded;
pub mod format;
pub mod parts_of_speech;
pub mod stopwords;

use std::path::{Path, PathBuf};

pub use parts_of_speech::PartOfSpeechTable;
pub use stopwords::{DOMAIN_STOPWORD_STEMS, StopwordSet};

/// File name of the stopword list inside a data directory.
pub const STOPWORDS_FILE: &str = "stopwords.txt";

/// File name of the part-of-speech table inside a data directory.
pub const PARTS_OF_SPEECH_FILE: &str = "parts_of_speech.tsv";

/// Error type for word list parsing and loading.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("line {line}: expected `word<TAB>label`")]
    MissingTab { line: usize },
    #[error("line {line}: empty word or label")]
    EmptyField { line: usize },
    #[error("line {line}: stopword {word:?} contains whitespace")]
    InvalidWord { line: usize, word: String },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<LexiconError>,
    },
}

/// Exact-match stopword lookup with domain stem matching.
pub trait StopwordLookup {
    /// Whether `word` (already lowercased) is an English stopword.
    fn is_stopword(&self, word: &str) -> bool;

    /// The first domain stopword stem contained anywhere in `word`, if any.
    fn matching_stem(&self, word: &str) -> Option<&str>;
}

/// Word to part-of-speech label lookup.
pub trait PartOfSpeechLookup {
    /// The label of `word`, or `None` if the word is not in the table.
    fn part_of_speech(&self, word: &str) -> Option<&str>;
}

/// The complete set of word lists used by the naming pipeline.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub stopwords: StopwordSet,
    pub parts_of_speech: PartOfSpeechTable,
}

impl Lexicon {
    /// The English lexicon compiled into the binary.
    pub fn english() -> Self {
        Self {
            stopwords: embedded::english_stopwords().clone(),
            parts_of_speech: embedded::english_parts_of_speech().clone(),
        }
    }

    /// Build a lexicon from the text of a stopword list and, optionally, a
    /// part-of-speech table. A missing table falls back to the embedded one.
    pub fn from_texts(stopwords: &str, parts_of_speech: Option<&str>) -> Result<Self, LexiconError> {
        let stopwords = StopwordSet::parse(stopwords)?;
        let parts_of_speech = match parts_of_speech {
            Some(text) => PartOfSpeechTable::parse(text)?,
            None => embedded::english_parts_of_speech().clone(),
        };
        Ok(Self {
            stopwords,
            parts_of_speech,
        })
    }

    /// Load a lexicon from a data directory.
    ///
    /// The directory must contain [`STOPWORDS_FILE`]; [`PARTS_OF_SPEECH_FILE`]
    /// is optional and falls back to the embedded table.
    pub fn from_dir(dir: &Path) -> Result<Self, LexiconError> {
        let stopwords_path = dir.join(STOPWORDS_FILE);
        let stopwords = StopwordSet::parse(&read_data_file(&stopwords_path)?)
            .map_err(|e| e.in_file(&stopwords_path))?;

        let pos_path = dir.join(PARTS_OF_SPEECH_FILE);
        let parts_of_speech = if pos_path.is_file() {
            PartOfSpeechTable::parse(&read_data_file(&pos_path)?)
                .map_err(|e| e.in_file(&pos_path))?
        } else {
            tracing::debug!(path = %pos_path.display(), "no part-of-speech table, using embedded");
            embedded::english_parts_of_speech().clone()
        };

        tracing::info!(
            dir = %dir.display(),
            stopwords = stopwords.len(),
            parts_of_speech = parts_of_speech.len(),
            "loaded lexicon"
        );
        Ok(Self {
            stopwords,
            parts_of_speech,
        })
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordLookup for Lexicon {
    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.is_stopword(word)
    }

    fn matching_stem(&self, word: &str) -> Option<&str> {
        self.stopwords.matching_stem(word)
    }
}

impl PartOfSpeechLookup for Lexicon {
    fn part_of_speech(&self, word: &str) -> Option<&str> {
        self.parts_of_speech.part_of_speech(word)
    }
}

impl LexiconError {
    fn in_file(self, path: &Path) -> Self {
        LexiconError::InFile {
            path: path.to_path_buf(),
            source: Box::new(self),
        }
    }
}

fn read_data_file(path: &Path) -> Result<String, LexiconError> {
    std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A fresh, empty scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("namr-lexicon-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn english_lexicon_has_both_tables() {
        let lex = Lexicon::english();
        assert!(lex.is_stopword("the"));
        assert!(!lex.is_stopword("rocket"));
        assert_eq!(lex.part_of_speech("rocket"), Some("Noun"));
        assert_eq!(lex.matching_stem("dataset"), Some("data"));
    }

    #[test]
    fn from_texts_with_custom_table() {
        let lex = Lexicon::from_texts("the\nof\n", Some("zoom\tVerb (transitive)\n")).unwrap();
        assert!(lex.is_stopword("of"));
        assert!(!lex.is_stopword("and"));
        assert_eq!(lex.part_of_speech("zoom"), Some("Verb (transitive)"));
        assert_eq!(lex.part_of_speech("rocket"), None);
    }

    #[test]
    fn from_texts_without_table_uses_embedded() {
        let lex = Lexicon::from_texts("the\n", None).unwrap();
        assert_eq!(lex.part_of_speech("rocket"), Some("Noun"));
    }

    #[test]
    fn from_texts_reports_bad_table_line() {
        let err = Lexicon::from_texts("the\n", Some("zoom Verb\n")).unwrap_err();
        assert!(matches!(err, LexiconError::MissingTab { line: 1 }));
    }

    #[test]
    fn from_dir_loads_files() {
        let dir = scratch_dir("load");
        std::fs::write(dir.join(STOPWORDS_FILE), "# custom\nfoo\nbar\n").unwrap();
        std::fs::write(dir.join(PARTS_OF_SPEECH_FILE), "baz\tNoun\n").unwrap();

        let lex = Lexicon::from_dir(&dir).unwrap();
        assert!(lex.is_stopword("foo"));
        assert!(!lex.is_stopword("the"));
        assert_eq!(lex.part_of_speech("baz"), Some("Noun"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_dir_without_table_uses_embedded() {
        let dir = scratch_dir("no-table");
        std::fs::write(dir.join(STOPWORDS_FILE), "foo\n").unwrap();

        let lex = Lexicon::from_dir(&dir).unwrap();
        assert_eq!(lex.part_of_speech("rocket"), Some("Noun"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_dir_missing_stopwords_is_io_error() {
        let dir = scratch_dir("missing");
        let err = Lexicon::from_dir(&dir).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn from_dir_parse_error_names_file() {
        let dir = scratch_dir("bad");
        std::fs::write(dir.join(STOPWORDS_FILE), "foo\n").unwrap();
        std::fs::write(dir.join(PARTS_OF_SPEECH_FILE), "baz\n").unwrap();

        let err = Lexicon::from_dir(&dir).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(PARTS_OF_SPEECH_FILE), "{msg}");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
