// Naming failures

/// Error type for name generation.
///
/// Both variants end the current call; no fallback name is produced. The
/// messages are meant to be shown to the end user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    /// No word survived filtering, or the chosen word was only punctuation.
    #[error("couldn't make a good name from the title, try making it more specific")]
    NoCandidate,

    /// Acronym inclusion was requested but the chosen word is itself one of
    /// the title's acronyms.
    #[error("title is already an acronym")]
    Reduplication,
}
