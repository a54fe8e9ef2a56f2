// Part-of-speech labels
//
// Labels are free-form strings taken from the part-of-speech table. The
// well-known labels below are the ones shipped in the embedded English
// table; a custom table may use others.

pub const POS_NOUN: &str = "Noun";
pub const POS_PLURAL: &str = "Plural";
pub const POS_NOUN_PHRASE: &str = "Noun Phrase";
pub const POS_VERB_PARTICIPLE: &str = "Verb (usu participle)";
pub const POS_VERB_TRANSITIVE: &str = "Verb (transitive)";
pub const POS_VERB_INTRANSITIVE: &str = "Verb (intransitive)";
pub const POS_ADJECTIVE: &str = "Adjective";
pub const POS_ADVERB: &str = "Adverb";
pub const POS_CONJUNCTION: &str = "Conjunction";
pub const POS_PREPOSITION: &str = "Preposition";
pub const POS_INTERJECTION: &str = "Interjection";
pub const POS_PRONOUN: &str = "Pronoun";
pub const POS_DEFINITE_ARTICLE: &str = "Definite Article";
pub const POS_INDEFINITE_ARTICLE: &str = "Indefinite Article";
pub const POS_NOMINATIVE: &str = "Nominative";

/// Substring marking a verb label.
const VERB_MARKER: &str = "Verb";

/// Check whether a part-of-speech label denotes a verb.
///
/// Any label containing "Verb" counts, so all of "Verb (transitive)",
/// "Verb (intransitive)" and "Verb (usu participle)" are verbs.
pub fn is_verb_label(label: &str) -> bool {
    label.contains(VERB_MARKER)
}
