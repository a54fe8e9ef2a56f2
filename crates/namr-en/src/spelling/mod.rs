// Spelling transform: make a word look like a terse "-r" abbreviation

use namr_core::character::is_vowel;

/// The rewrite applied to a word. Rules are tried in declaration order and
/// the first that matches is the only one applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellingRule {
    /// Vowel then final `r`: drop the vowel ("reader" -> "readr").
    DropVowelBeforeFinalR,
    /// Leading vowel then `r`: drop the vowel ("archive" -> "rchive").
    DropLeadingVowel,
    /// Consonant then final `r`: prepend `r` ("instr" -> "rinstr").
    PrependR,
    /// Anything else: append `r` ("tidy" -> "tidyr").
    AppendR,
}

/// Find the rule that applies to `word`.
///
/// Rules that look at two characters never match shorter words, so one- and
/// zero-character words always get [`SpellingRule::AppendR`].
pub fn spelling_rule(word: &[char]) -> SpellingRule {
    match word {
        [.., v, 'r'] if is_vowel(*v) => SpellingRule::DropVowelBeforeFinalR,
        [v, 'r', ..] if is_vowel(*v) => SpellingRule::DropLeadingVowel,
        [.., _, 'r'] => SpellingRule::PrependR,
        _ => SpellingRule::AppendR,
    }
}

/// Apply `rule` to `word`.
pub fn apply_rule(rule: SpellingRule, word: &[char]) -> String {
    match rule {
        SpellingRule::DropVowelBeforeFinalR => {
            let n = word.len();
            word[..n - 2].iter().chain(&word[n - 1..]).collect()
        }
        SpellingRule::DropLeadingVowel => word[1..].iter().collect(),
        SpellingRule::PrependR => std::iter::once(&'r').chain(word).collect(),
        SpellingRule::AppendR => word.iter().chain(std::iter::once(&'r')).collect(),
    }
}

/// Rewrite `word` with the first matching [`SpellingRule`].
///
/// The transform is not idempotent: "tidy" becomes "tidyr", and a second
/// pass turns that into "rtidyr".
pub fn apply_spelling_transform(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let rule = spelling_rule(&chars);
    let out = apply_rule(rule, &chars);
    tracing::trace!(word, ?rule, %out, "spelling transform");
    out
}
