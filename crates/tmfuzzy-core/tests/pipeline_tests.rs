//! End-to-end scoring tests for the English ruleset and general behavior

use tmfuzzy_core::{fuzzy_match, FuzzyMatcher, Language, MatcherConfig, Outcome, Tier};

#[test]
fn test_identity() {
    for s in [
        "",
        "hello",
        "The cat sat on the mat",
        "will you do it",
        "東京に行きます",
        "12345",
    ] {
        assert_eq!(fuzzy_match(s, s), 100, "identity failed for {:?}", s);
    }
}

#[test]
fn test_symmetric_pairs() {
    let pairs = [
        ("The cat sat on the mat", "A cat sat on a mat"),
        ("quick brown fox", "quick brown fox"),
        ("apple banana", "xyz qrs"),
    ];
    for (a, b) in pairs {
        assert_eq!(fuzzy_match(a, b), fuzzy_match(b, a), "{:?} / {:?}", a, b);
    }
}

#[test]
fn test_language_comes_from_first_input() {
    // English rules strip the kanji from both sides, leaving nothing to match
    assert_eq!(fuzzy_match("東京 Tokyo", "東京"), 0);
    // Japanese rules keep both scripts: one of two tokens matches
    assert_eq!(fuzzy_match("東京", "東京 Tokyo"), 50);
}

#[test]
fn test_score_range() {
    let pairs = [
        ("", "something"),
        ("a", "b"),
        ("color", "colour"),
        ("running quickly", "run quick"),
        ("will you do it", "do you will it"),
        ("the the the", "a a a"),
        ("!!!", "???"),
        ("私は学生です", "彼は先生です"),
    ];
    for (a, b) in pairs {
        let report = FuzzyMatcher::new().explain(a, b);
        assert!(report.score <= 100);
        assert_eq!(i64::from(report.score), report.raw_score.clamp(0, 100));
    }
}

#[test]
fn test_length_mismatch_early_out() {
    let report = FuzzyMatcher::new().explain("a b c", "a b c d e f g h i j");
    assert_eq!(report.outcome, Outcome::LengthMismatch);
    assert_eq!(report.score, 0);
}

#[test]
fn test_stopword_robustness() {
    assert!(fuzzy_match("The cat sat on the mat", "A cat sat on a mat") >= 80);
}

#[test]
fn test_substring_tolerance() {
    let report = FuzzyMatcher::new().explain("running quickly", "run quick");
    assert!(report.score > 0);
    assert_eq!(report.matches.len(), 2);
    assert!(report.matches.iter().all(|m| m.tier == Tier::Containment));
}

#[test]
fn test_edit_distance_tolerance() {
    let report = FuzzyMatcher::new().explain("color", "colour");
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].tier, Tier::EditDistance);
    assert_eq!(report.matches[0].distance, Some(1));
    assert_eq!(report.score, 70);
}

#[test]
fn test_word_order_penalty() {
    let shuffled = fuzzy_match("will you do it", "do you will it");
    // Same tokens in the same order; the doubled space defeats the identical fast path
    let in_order = fuzzy_match("will you do it", "will you do  it");
    assert_eq!(in_order, 100);
    assert!(shuffled < in_order);
    assert!(shuffled >= 80);
}

#[test]
fn test_order_penalty_is_configurable() {
    let config = MatcherConfig::from_json(r#"{"order_penalty": 0.0}"#).unwrap();
    let matcher = FuzzyMatcher::with_config(config);
    assert_eq!(matcher.score("will you do it", "do you will it"), 100);
}

#[test]
fn test_empty_strings() {
    assert_eq!(fuzzy_match("", ""), 100);
    assert_eq!(fuzzy_match("hello", ""), 0);
    assert_eq!(fuzzy_match("", "hello"), 0);
}

#[test]
fn test_punctuation_and_case_ignored() {
    assert_eq!(fuzzy_match("Hello, World!", "hello world"), 100);
    assert_eq!(fuzzy_match("Version 2 release", "version release"), 100);
}

#[test]
fn test_report_serializes() {
    let report = FuzzyMatcher::new().explain("color", "colour");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["language"], "en");
    assert_eq!(json["outcome"], "scored");
    assert_eq!(json["matches"][0]["tier"], "edit_distance");
    assert_eq!(json["matches"][0]["distance"], 1);
}

#[test]
fn test_shared_across_threads() {
    let matcher = FuzzyMatcher::new();
    let matcher = &matcher;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || matcher.score("The cat sat on the mat", "A cat sat on a mat"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 80);
        }
    });
}

#[test]
fn test_detected_language_reported() {
    assert_eq!(
        FuzzyMatcher::new().explain("cat", "dog").language,
        Language::English
    );
    assert_eq!(
        FuzzyMatcher::new().explain("猫", "犬").language,
        Language::Japanese
    );
}
