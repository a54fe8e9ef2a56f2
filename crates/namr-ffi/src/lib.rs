// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// namr-ffi: C-compatible FFI layer for Namer.
//
// Memory management rules:
// - Opaque `Namer` pointer: created by `namr_new` or `namr_new_from_texts`,
//   freed by `namr_free`.
// - Returned strings: caller must free with `namr_free_str`.
// - Error strings written to `error_out`: caller must free with `namr_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char};
use std::ptr;
use std::sync::LazyLock;

use namr_en::{NameOptions, Namer, NamingError};
use namr_lexicon::Lexicon;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a namer over the embedded English lexicon.
///
/// Returns an opaque pointer; free it with `namr_free`. `error_out` is
/// accepted for symmetry with `namr_new_from_texts` and is never written.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namr_new(_error_out: *mut *mut c_char) -> *mut Namer {
    Box::into_raw(Box::new(Namer::english()))
}

/// Create a namer from word list texts.
///
/// - `stopwords`: contents of a `stopwords.txt` file (required)
/// - `parts_of_speech`: contents of a `parts_of_speech.tsv` file (NULL for
///   the embedded English table)
///
/// Returns NULL on failure. On failure, if `error_out` is non-NULL, it
/// receives a heap-allocated error string that the caller must free with
/// `namr_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namr_new_from_texts(
    stopwords: *const c_char,
    parts_of_speech: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut Namer {
    let Some(stopwords) = cstr_to_str(stopwords) else {
        set_error(error_out, "stopwords is null or not UTF-8");
        return ptr::null_mut();
    };
    let parts_of_speech = if parts_of_speech.is_null() {
        None
    } else {
        match cstr_to_str(parts_of_speech) {
            Some(text) => Some(text),
            None => {
                set_error(error_out, "parts_of_speech is not UTF-8");
                return ptr::null_mut();
            }
        }
    };

    match Lexicon::from_texts(stopwords, parts_of_speech) {
        Ok(lexicon) => Box::into_raw(Box::new(Namer::new(lexicon))),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a namer created by `namr_new` or `namr_new_from_texts`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namr_free(handle: *mut Namer) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Name generation ─────────────────────────────────────────────

/// Generate a package name from `title`.
///
/// Non-zero `include_acronym` appends the title's first acronym; non-zero
/// `prefer_verb` prefers a verb when selecting the word.
///
/// Returns a heap-allocated C string, or NULL on error with the message
/// written to `error_out`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namr_generate_name(
    handle: *const Namer,
    title: *const c_char,
    include_acronym: u8,
    prefer_verb: u8,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let Some(title) = cstr_to_str(title) else {
        set_error(error_out, "title is null or not UTF-8");
        return ptr::null_mut();
    };
    let options = NameOptions {
        include_acronym: include_acronym != 0,
        prefer_verb: prefer_verb != 0,
    };
    naming_result(handle.generate_name_with(title, options), error_out)
}

/// Select the word a name would be built from.
///
/// Returns a heap-allocated C string, or NULL on error with the message
/// written to `error_out`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namr_select_word(
    handle: *const Namer,
    title: *const c_char,
    prefer_verb: u8,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let Some(title) = cstr_to_str(title) else {
        set_error(error_out, "title is null or not UTF-8");
        return ptr::null_mut();
    };
    naming_result(handle.select_word(title, prefer_verb != 0), error_out)
}

/// Find the first acronym of `title`.
///
/// Returns a heap-allocated C string, or NULL. NULL with `error_out` left
/// untouched means the title has no acronym.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namr_find_acronym(
    handle: *const Namer,
    title: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let Some(title) = cstr_to_str(title) else {
        set_error(error_out, "title is null or not UTF-8");
        return ptr::null_mut();
    };
    match handle.find_acronym(title) {
        Ok(Some(acronym)) => str_to_c(&acronym),
        Ok(None) => ptr::null_mut(),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

// ── Word transforms ─────────────────────────────────────────────

/// Apply the spelling transform to `word`.
///
/// Returns a heap-allocated C string. Caller must free with `namr_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namr_spelling_transform(word: *const c_char) -> *mut c_char {
    let Some(word) = cstr_to_str(word) else { return ptr::null_mut(); };
    str_to_c(&namr_en::apply_spelling_transform(word))
}

/// Attach the thematic prefix or suffix chosen by `title` to `name`.
///
/// Returns a heap-allocated C string. Caller must free with `namr_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namr_decorate(title: *const c_char, name: *const c_char) -> *mut c_char {
    let Some(title) = cstr_to_str(title) else { return ptr::null_mut(); };
    let Some(name) = cstr_to_str(name) else { return ptr::null_mut(); };
    str_to_c(&namr_en::decorate_with_suffix(title, name))
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn namr_version() -> *const c_char {
    static VERSION: LazyLock<CString> =
        LazyLock::new(|| CString::new(Namer::get_version()).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by namr functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn namr_free_str(s: *mut c_char) {
    free_c_str(s);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe { *out = str_to_c(msg); }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn naming_result(result: Result<String, NamingError>, error_out: *mut *mut c_char) -> *mut c_char {
    match result {
        Ok(s) => str_to_c(&s),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}
