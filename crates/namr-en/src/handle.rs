// Namer: top-level integration point for name generation.
//
// Owns the lexicon and the naming options and runs the pipeline:
// select word -> spelling transform -> optional acronym -> suffix.
//
// Design notes:
// - The lexicon is read-only after construction, so a `Namer` is `Send +
//   Sync` and can be shared between threads without locking.
// - Options are stored in the handle; `generate_name_with` overrides them
//   for a single call.

use std::path::Path;

use namr_core::case::fold_case;
use namr_core::token::WordToken;
use namr_lexicon::{Lexicon, LexiconError};

use crate::acronym;
use crate::error::NamingError;
use crate::selector;
use crate::spelling::apply_spelling_transform;
use crate::suffix::decorate_with_suffix;
use crate::tokenizer::candidate_words;

/// Options controlling name generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameOptions {
    /// Append the title's first acronym (lowercased) to the name.
    pub include_acronym: bool,
    /// Prefer the first verb among the candidate words.
    pub prefer_verb: bool,
}

/// Name generator owning its word lists.
#[derive(Debug, Clone)]
pub struct Namer {
    lexicon: Lexicon,
    options: NameOptions,
}

impl Namer {
    /// Create a namer over the given lexicon with default options.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            options: NameOptions::default(),
        }
    }

    /// Create a namer over the embedded English lexicon.
    pub fn english() -> Self {
        Self::new(Lexicon::english())
    }

    /// Create a namer from a data directory (see [`Lexicon::from_dir`]).
    pub fn from_dir(dir: &Path) -> Result<Self, LexiconError> {
        Ok(Self::new(Lexicon::from_dir(dir)?))
    }

    /// The lexicon this namer consults.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The options used by [`Namer::generate_name`].
    pub fn options(&self) -> NameOptions {
        self.options
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// Generate a name from `title` with the stored options.
    pub fn generate_name(&self, title: &str) -> Result<String, NamingError> {
        self.generate_name_with(title, self.options)
    }

    /// Generate a name from `title` with explicit options.
    pub fn generate_name_with(
        &self,
        title: &str,
        options: NameOptions,
    ) -> Result<String, NamingError> {
        let word = self.select_word(title, options.prefer_verb)?;
        let mut name = apply_spelling_transform(&word);

        if options.include_acronym {
            if let Some(acronym) = self.find_acronym(title)? {
                name.push_str(&fold_case(&acronym));
            }
        }

        let name = decorate_with_suffix(title, &name);
        tracing::debug!(title, %name, "generated name");
        Ok(name)
    }

    /// Select the word a name would be built from.
    pub fn select_word(&self, title: &str, prefer_verb: bool) -> Result<String, NamingError> {
        selector::select_word(title, &self.lexicon, &self.lexicon, prefer_verb)
    }

    /// Find the first acronym of `title` (see [`acronym::find_acronym`]).
    pub fn find_acronym(&self, title: &str) -> Result<Option<String>, NamingError> {
        acronym::find_acronym(title, &self.lexicon, &self.lexicon)
    }

    /// The filtered candidate words of `title` with part-of-speech tags.
    pub fn words(&self, title: &str) -> Vec<WordToken> {
        selector::tag_parts_of_speech(candidate_words(title, &self.lexicon), &self.lexicon)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set whether to append the title's acronym.
    pub fn set_include_acronym(&mut self, value: bool) {
        self.options.include_acronym = value;
    }

    /// Set whether to prefer verbs when selecting the word.
    pub fn set_prefer_verb(&mut self, value: bool) {
        self.options.prefer_verb = value;
    }

    /// Replace all options.
    pub fn set_options(&mut self, options: NameOptions) {
        self.options = options;
    }

    /// Get the library version string.
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

impl Default for Namer {
    fn default() -> Self {
        Self::english()
    }
}
