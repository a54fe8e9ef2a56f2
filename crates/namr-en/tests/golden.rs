//! Golden tests: end-to-end name generation with the embedded English
//! lexicon, driven by `tests/golden/names.json`.

use std::path::PathBuf;

use namr_en::{NameOptions, Namer, NamingError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    title: String,
    #[serde(default)]
    include_acronym: bool,
    #[serde(default)]
    prefer_verb: bool,
    expected: Option<String>,
    error: Option<String>,
}

fn load_cases() -> Vec<Case> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/names.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn error_name(err: &NamingError) -> &'static str {
    match err {
        NamingError::NoCandidate => "NoCandidate",
        NamingError::Reduplication => "Reduplication",
    }
}

#[test]
fn golden_names() {
    let namer = Namer::english();
    let cases = load_cases();
    assert!(!cases.is_empty());

    let mut mismatches = Vec::new();
    for case in &cases {
        let options = NameOptions {
            include_acronym: case.include_acronym,
            prefer_verb: case.prefer_verb,
        };
        let actual = namer.generate_name_with(&case.title, options);
        let ok = match (&actual, &case.expected, &case.error) {
            (Ok(name), Some(expected), None) => name == expected,
            (Err(err), None, Some(expected)) => error_name(err) == expected,
            _ => false,
        };
        if !ok {
            mismatches.push(format!(
                "{:?} (acronym={}, verb={}): got {:?}, expected {:?}/{:?}",
                case.title, case.include_acronym, case.prefer_verb, actual, case.expected, case.error
            ));
        }
    }

    if !mismatches.is_empty() {
        eprintln!("\n=== NAME MISMATCHES: {}/{} ===", mismatches.len(), cases.len());
        for m in &mismatches {
            eprintln!("{m}");
        }
    }
    assert!(mismatches.is_empty(), "{} golden mismatches", mismatches.len());
}

#[test]
fn free_functions_match_english_namer() {
    let namer = Namer::english();
    for case in load_cases() {
        let options = NameOptions {
            include_acronym: case.include_acronym,
            prefer_verb: case.prefer_verb,
        };
        assert_eq!(
            namr_en::generate_name(&case.title, case.include_acronym, case.prefer_verb),
            namer.generate_name_with(&case.title, options),
            "{:?}",
            case.title
        );
    }
}
