// Case folding and acronym detection

/// Minimum number of letters in an acronym.
pub const MIN_ACRONYM_LEN: usize = 2;

/// Fold `text` to lowercase.
///
/// All word matching in namr is done on folded text; this is the one place
/// the folding rule is defined.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Compare two strings case-insensitively.
pub fn eq_folded(a: &str, b: &str) -> bool {
    fold_case(a) == fold_case(b)
}

/// Check whether `token` is an acronym: two or more uppercase ASCII letters
/// and nothing else.
///
/// "NASA" and "GUI" are acronyms; "NASA's", "R2D2", "Api" and "A" are not.
pub fn is_acronym(token: &str) -> bool {
    token.len() >= MIN_ACRONYM_LEN && token.chars().all(|c| c.is_ascii_uppercase())
}
