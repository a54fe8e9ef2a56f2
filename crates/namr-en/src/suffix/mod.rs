// Thematic suffix decoration

use namr_core::case::fold_case;
use namr_core::character::has_word_with_prefix;

/// Where the decoration goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affix {
    Prefix(&'static str),
    Suffix(&'static str),
}

impl Affix {
    /// Attach this affix to `name`.
    pub fn attach(self, name: &str) -> String {
        match self {
            Affix::Prefix(prefix) => format!("{prefix}{name}"),
            Affix::Suffix(suffix) => format!("{name}{suffix}"),
        }
    }
}

/// Decoration rules in priority order: a title word starting with the
/// keyword selects the affix.
pub const SUFFIX_RULES: &[(&str, Affix)] = &[
    ("tidy", Affix::Prefix("tidy")),
    ("viz", Affix::Suffix("viz")),
    ("vis", Affix::Suffix("vis")),
    ("plot", Affix::Suffix("plot")),
    ("markdown", Affix::Suffix("down")),
];

/// The first rule whose keyword starts a word of `title` (case-insensitive).
pub fn matching_rule(title: &str) -> Option<(&'static str, Affix)> {
    let title = fold_case(title);
    SUFFIX_RULES
        .iter()
        .copied()
        .find(|(keyword, _)| has_word_with_prefix(&title, keyword))
}

/// Decorate `name` with the affix chosen by `title`, or return it unchanged.
pub fn decorate_with_suffix(title: &str, name: &str) -> String {
    match matching_rule(title) {
        Some((keyword, affix)) => {
            tracing::debug!(keyword, ?affix, "suffix rule matched");
            affix.attach(name)
        }
        None => name.to_string(),
    }
}
