// Stopword set: exact-match English stopwords plus domain stopword stems

use hashbrown::HashSet;

use namr_core::case::fold_case;

use crate::format::data_lines;
use crate::{LexiconError, StopwordLookup};

/// Word fragments marking a word as too generic for a package name.
///
/// A word is dropped when it contains any of these anywhere, so "dataset"
/// (via "data") and "readable" (via "read") are both excluded.
pub const DOMAIN_STOPWORD_STEMS: &[&str] = &[
    "libr", "analys", "class", "method", "object", "model", "import", "data", "function",
    "format", "plug-in", "plugin", "api", "client", "access", "interfac", "tool", "comput",
    "help", "calcul", "read", "stat", "math", "numer", "file", "plot", "wrap", "writ", "pack",
    "dist", "algo", "code", "frame", "viz", "vis", "auto", "explor", "funct", "esti", "equa",
    "bayes", "learn",
];

/// Read-only set of stopwords and stopword stems.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
    stems: Vec<String>,
}

impl StopwordSet {
    /// Build a set from the given words and the default domain stems.
    ///
    /// Words are case-folded.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| fold_case(w.as_ref())).collect(),
            stems: DOMAIN_STOPWORD_STEMS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the domain stems.
    pub fn with_stems<I, S>(mut self, stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stems = stems.into_iter().map(|s| fold_case(s.as_ref())).collect();
        self
    }

    /// Parse a stopword list (one word per line, `#` comments) and attach
    /// the default domain stems.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut words = Vec::new();
        for line in data_lines(text) {
            let word = line.text.trim();
            if word.chars().any(char::is_whitespace) {
                return Err(LexiconError::InvalidWord {
                    line: line.number,
                    word: word.to_string(),
                });
            }
            words.push(word);
        }
        Ok(Self::from_words(words))
    }

    /// Number of exact-match stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no exact-match stopwords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The domain stems, in matching order.
    pub fn stems(&self) -> &[String] {
        &self.stems
    }
}

impl StopwordLookup for StopwordSet {
    fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn matching_stem(&self, word: &str) -> Option<&str> {
        self.stems
            .iter()
            .find(|stem| word.contains(stem.as_str()))
            .map(String::as_str)
    }
}
