//! Package name generation from English titles.
//!
//! A name is built from a single informative word of the title:
//!
//! 1. [`tokenizer`] lowercases and splits the title, then drops stopwords
//!    and words containing overly generic stems;
//! 2. [`selector`] picks one word (optionally preferring verbs) and strips
//!    its punctuation;
//! 3. [`spelling`] rewrites it toward a terse "-r" form;
//! 4. [`acronym`] optionally appends the title's first acronym;
//! 5. [`suffix`] adds a thematic prefix or suffix.
//!
//! The free functions below use the embedded English lexicon; construct a
//! [`Namer`] to use other word lists.
//!
//! ```
//! let name = namr_en::generate_name("Tidy Weather Reports", false, false).unwrap();
//! assert_eq!(name, "tidyreportsr");
//! assert_eq!(namr_en::apply_spelling_transform("reader"), "readr");
//! ```

pub mod acronym;
pub mod error;
pub mod handle;
pub mod package_name;
pub mod selector;
pub mod spelling;
pub mod suffix;
pub mod tokenizer;

use std::sync::LazyLock;

pub use error::NamingError;
pub use handle::{NameOptions, Namer};
pub use package_name::is_valid_package_name;
pub use spelling::apply_spelling_transform;
pub use suffix::decorate_with_suffix;

/// Process-wide namer over the embedded English lexicon.
static ENGLISH: LazyLock<Namer> = LazyLock::new(Namer::english);

/// Generate a name from `title` using the English lexicon.
pub fn generate_name(
    title: &str,
    include_acronym: bool,
    prefer_verb: bool,
) -> Result<String, NamingError> {
    ENGLISH.generate_name_with(
        title,
        NameOptions {
            include_acronym,
            prefer_verb,
        },
    )
}

/// Select the word a name would be built from, using the English lexicon.
pub fn select_word(title: &str, prefer_verb: bool) -> Result<String, NamingError> {
    ENGLISH.select_word(title, prefer_verb)
}

/// Find the first acronym of `title`, using the English lexicon for the
/// reduplication check.
pub fn find_acronym(title: &str) -> Result<Option<String>, NamingError> {
    ENGLISH.find_acronym(title)
}
