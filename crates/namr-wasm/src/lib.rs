// WASM bindings for the namr package namer.
//
// Provides a `WasmNamr` class exported via wasm-bindgen that wraps the
// `Namer` from namr-en. Word lists are serialized to JavaScript values
// using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const namr = new WasmNamr();                     // embedded English lists
//   const custom = new WasmNamr(stopwordsText, posText);
//   namr.generateName("Tidy Weather Reports");       // => "tidyreportsr"
//   namr.setIncludeAcronym(true);
//   namr.findAcronym("Weather Data from NOAA");      // => "NOAA"
//   namr.spellingTransform("reader");                // => "readr"
//   namr.decorate("package for plotting things", "my"); // => "myplot"
//   namr.words("Tidy Weather Reports");              // => [{ text: "tidy", ... }, ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use namr_core::token::WordToken;
use namr_en::{NameOptions, Namer, NamingError};
use namr_lexicon::{Lexicon, LexiconError};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a candidate word.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsWord {
    text: String,
    char_len: usize,
    part_of_speech: Option<String>,
}

impl From<WordToken> for JsWord {
    fn from(token: WordToken) -> Self {
        JsWord {
            text: token.text,
            char_len: token.char_len,
            part_of_speech: token.part_of_speech,
        }
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn naming_error_to_js(e: NamingError) -> JsError {
    JsError::new(&e.to_string())
}

fn lexicon_error_to_js(e: LexiconError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmNamr
// ============================================================================

/// Package name generator for WebAssembly.
#[wasm_bindgen]
pub struct WasmNamr {
    namer: Namer,
}

#[wasm_bindgen]
impl WasmNamr {
    /// Create a new instance.
    ///
    /// - `stopwords`: contents of a `stopwords.txt` file (optional; the
    ///   embedded English list when omitted)
    /// - `parts_of_speech`: contents of a `parts_of_speech.tsv` file
    ///   (optional; the embedded English table when omitted)
    #[wasm_bindgen(constructor)]
    pub fn new(
        stopwords: Option<String>,
        parts_of_speech: Option<String>,
    ) -> Result<WasmNamr, JsError> {
        let namer = match stopwords {
            Some(text) => Namer::new(
                Lexicon::from_texts(&text, parts_of_speech.as_deref())
                    .map_err(lexicon_error_to_js)?,
            ),
            None if parts_of_speech.is_some() => {
                return Err(JsError::new("parts of speech given without stopwords"));
            }
            None => Namer::english(),
        };
        Ok(WasmNamr { namer })
    }

    /// Generate a package name from a title with the current options.
    #[wasm_bindgen(js_name = "generateName")]
    pub fn generate_name(&self, title: &str) -> Result<String, JsError> {
        self.namer.generate_name(title).map_err(naming_error_to_js)
    }

    /// Select the word a name would be built from.
    #[wasm_bindgen(js_name = "selectWord")]
    pub fn select_word(&self, title: &str, prefer_verb: bool) -> Result<String, JsError> {
        self.namer
            .select_word(title, prefer_verb)
            .map_err(naming_error_to_js)
    }

    /// Find the first acronym of a title.
    ///
    /// Returns null when the title has none; throws when the selected word
    /// is itself the acronym.
    #[wasm_bindgen(js_name = "findAcronym")]
    pub fn find_acronym(&self, title: &str) -> Result<Option<String>, JsError> {
        self.namer.find_acronym(title).map_err(naming_error_to_js)
    }

    /// Apply the spelling transform to a word.
    #[wasm_bindgen(js_name = "spellingTransform")]
    pub fn spelling_transform(&self, word: &str) -> String {
        namr_en::apply_spelling_transform(word)
    }

    /// Attach the thematic prefix or suffix chosen by `title` to `name`.
    pub fn decorate(&self, title: &str, name: &str) -> String {
        namr_en::decorate_with_suffix(title, name)
    }

    /// List the candidate words of a title.
    ///
    /// Returns a JavaScript array of objects with fields `text`, `charLen`,
    /// `partOfSpeech` (null when untagged).
    pub fn words(&self, title: &str) -> Result<JsValue, JsError> {
        let words = js_words(self.namer.words(title));
        serde_wasm_bindgen::to_value(&words).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        Namer::get_version().to_string()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set whether to append the title's first acronym.
    #[wasm_bindgen(js_name = "setIncludeAcronym")]
    pub fn set_include_acronym(&mut self, value: bool) {
        self.namer.set_include_acronym(value);
    }

    /// Set whether to prefer a verb when selecting the word.
    #[wasm_bindgen(js_name = "setPreferVerb")]
    pub fn set_prefer_verb(&mut self, value: bool) {
        self.namer.set_prefer_verb(value);
    }

    /// Reset both options to their defaults.
    #[wasm_bindgen(js_name = "resetOptions")]
    pub fn reset_options(&mut self) {
        self.namer.set_options(NameOptions::default());
    }
}

fn js_words(words: Vec<WordToken>) -> Vec<JsWord> {
    words.into_iter().map(JsWord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_become_dtos() {
        let namer = Namer::english();
        let words = js_words(namer.words("Tidy Weather Reports"));
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text, "tidy");
        assert_eq!(words[2].char_len, 7);
    }

    #[test]
    fn untagged_word_has_no_part_of_speech() {
        let dto = JsWord::from(WordToken::new("zyzzyva"));
        assert_eq!(
            dto,
            JsWord {
                text: "zyzzyva".to_string(),
                char_len: 7,
                part_of_speech: None,
            }
        );
    }
}
