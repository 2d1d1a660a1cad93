//! End-to-end scoring tests for the Japanese ruleset

use pretty_assertions::assert_eq;
use tmfuzzy_core::{fuzzy_match, FuzzyMatcher, Outcome, Tier};

#[test]
fn test_punctuation_only_difference() {
    assert_eq!(fuzzy_match("東京タワー。", "東京タワー"), 100);
    assert_eq!(fuzzy_match("「はい」", "はい"), 100);
}

#[test]
fn test_stopwords_removed() {
    let report = FuzzyMatcher::new().explain("私は学生です", "彼は学生です");
    assert!(report.stopwords_removed);
    assert_eq!(report.longer, vec!["学生".to_string()]);
    assert_eq!(report.score, 100);
}

#[test]
fn test_inflection_via_edit_distance() {
    let report = FuzzyMatcher::new().explain("東京に行きます", "東京に行きました");
    assert_eq!(report.outcome, Outcome::Scored);
    let last = report.matches.last().unwrap();
    assert_eq!(last.token, "きました");
    assert_eq!(last.candidate, "きます");
    assert_eq!(last.tier, Tier::EditDistance);
    assert_eq!(last.distance, Some(2));
    assert!(report.score >= 70 && report.score < 100);
}

#[test]
fn test_compound_via_containment() {
    let report = FuzzyMatcher::new().explain("東京都に住んでいます", "東京に住んでいます");
    assert_eq!(report.matches[0].tier, Tier::Containment);
    assert_eq!(report.shorter[0], "東京都");
    assert!(report.score >= 90 && report.score < 100);
}

#[test]
fn test_unrelated_sentences() {
    assert_eq!(fuzzy_match("猫が好き", "電車で帰る"), 0);
}
