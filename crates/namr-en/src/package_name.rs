// Package name validity

/// Minimum length of a package name.
pub const MIN_PACKAGE_NAME_LEN: usize = 2;

/// Check whether `name` is usable as a package name: at least two
/// characters, an ASCII letter first, only ASCII letters, digits and `.`,
/// and no trailing `.`.
pub fn is_valid_package_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= MIN_PACKAGE_NAME_LEN
        && bytes[0].is_ascii_alphabetic()
        && bytes[bytes.len() - 1] != b'.'
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'.')
}
