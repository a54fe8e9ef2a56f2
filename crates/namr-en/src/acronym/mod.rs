// Acronym detection in the original, case-preserved title

use namr_core::case::{eq_folded, is_acronym};
use namr_lexicon::{PartOfSpeechLookup, StopwordLookup};

use crate::error::NamingError;
use crate::selector::select_word;

/// All acronyms in `title`, in order.
///
/// The title is split on single spaces, not on runs of whitespace, and a
/// token is an acronym only if the whole token is two or more uppercase
/// letters: "NASA" counts, "NASA," and "(GUI)" do not.
pub fn acronyms(title: &str) -> Vec<&str> {
    title.split(' ').filter(|token| is_acronym(token)).collect()
}

/// Find the acronym to append to a name built from `title`.
///
/// Returns the first acronym with its original case, or `None` if the title
/// has none. Fails with [`NamingError::Reduplication`] when the word the
/// selector picks (without verb preference) is itself one of the acronyms,
/// and propagates [`NamingError::NoCandidate`] from the selector.
pub fn find_acronym(
    title: &str,
    stopwords: &dyn StopwordLookup,
    pos: &dyn PartOfSpeechLookup,
) -> Result<Option<String>, NamingError> {
    let found = acronyms(title);
    let chosen = select_word(title, stopwords, pos, false)?;
    if found.iter().any(|acronym| eq_folded(acronym, &chosen)) {
        tracing::debug!(%chosen, "selected word is already an acronym");
        return Err(NamingError::Reduplication);
    }
    let first = found.first().map(|acronym| acronym.to_string());
    tracing::debug!(acronym = ?first, "acronym lookup");
    Ok(first)
}
