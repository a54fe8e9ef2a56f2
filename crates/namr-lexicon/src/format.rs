// Line-oriented data file format shared by the word lists
//
// Both data files are UTF-8 text, one record per line. Blank lines and lines
// whose first non-blank character is '#' carry no record.

/// Comment marker at the start of a line.
pub const COMMENT_MARKER: char = '#';

/// Field separator in tabular data files.
pub const FIELD_SEPARATOR: char = '\t';

/// A record-carrying line of a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLine<'a> {
    /// 1-based line number within the file.
    pub number: usize,
    /// Line content as written, without the line terminator.
    pub text: &'a str,
}

/// Iterate over the record-carrying lines of `text`, skipping blank lines
/// and comments.
pub fn data_lines(text: &str) -> impl Iterator<Item = DataLine<'_>> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            None
        } else {
            Some(DataLine {
                number: i + 1,
                text: line,
            })
        }
    })
}

/// Split a tabular record into its two fields, trimming each.
///
/// Returns `None` when the record has no separator.
pub fn split_fields(record: &str) -> Option<(&str, &str)> {
    record
        .split_once(FIELD_SEPARATOR)
        .map(|(key, value)| (key.trim(), value.trim()))
}
