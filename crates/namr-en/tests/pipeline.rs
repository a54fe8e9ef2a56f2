//! Properties of the public API with the embedded English lexicon.

use std::thread;

use namr_en::{
    NamingError, apply_spelling_transform, decorate_with_suffix, find_acronym, generate_name,
    is_valid_package_name, select_word,
};

#[test]
fn spelling_examples() {
    assert_eq!(apply_spelling_transform("tidy"), "tidyr");
    assert_eq!(apply_spelling_transform("archive"), "rchive");
    assert_eq!(apply_spelling_transform("reader"), "readr");
    assert_eq!(apply_spelling_transform("instr"), "rinstr");
}

#[test]
fn suffix_examples() {
    assert_eq!(decorate_with_suffix("package for plotting things", "my"), "myplot");
    assert_eq!(decorate_with_suffix("vizulizer 2000 the reboot", "my"), "myviz");
}

#[test]
fn acronym_found_in_original_case() {
    assert_eq!(
        find_acronym("Weather Balloons for NASA").unwrap(),
        Some("NASA".to_string())
    );
}

#[test]
fn acronym_only_title_is_reduplication() {
    assert_eq!(find_acronym("NASA"), Err(NamingError::Reduplication));
}

#[test]
fn selector_tie_break() {
    // last is longer than first
    assert_eq!(select_word("rocket trajectories", false).unwrap(), "trajectories");
    // last is not longer than first
    assert_eq!(select_word("trajectories rocket", false).unwrap(), "trajectories");
    assert_eq!(select_word("rocket genome", false).unwrap(), "rocket");
}

#[test]
fn filtered_out_title_has_no_candidate() {
    assert_eq!(
        generate_name("The Data Analysis Toolkit", false, false),
        Err(NamingError::NoCandidate)
    );
    assert_eq!(select_word("of the and", false), Err(NamingError::NoCandidate));
}

#[test]
fn any_surviving_word_gives_a_non_empty_name() {
    let titles = [
        "Rocket",
        "ox",
        "Weather Balloons",
        "A Genome Browser for Ocean Sciences",
        "Simulate Storms, Rivers, and Forests",
        "Tidy Spectra",
        "zzz",
    ];
    for title in titles {
        for (acronym, verb) in [(false, false), (false, true), (true, false), (true, true)] {
            let name = generate_name(title, acronym, verb).unwrap();
            assert!(!name.is_empty(), "{title:?} gave an empty name");
        }
    }
}

#[test]
fn generated_names_are_usually_valid_package_names() {
    for title in ["Weather Balloons", "Rocket Trajectories", "Tidy Spectra", "Ocean Storms"] {
        let name = generate_name(title, false, false).unwrap();
        assert!(is_valid_package_name(&name), "{name:?} from {title:?}");
    }
}

#[test]
fn concurrent_calls_agree() {
    let expected = generate_name("Weather Balloons for NASA", true, false).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| generate_name("Weather Balloons for NASA", true, false)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), expected);
    }
}
