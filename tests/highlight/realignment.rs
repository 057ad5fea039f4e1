//! Projecting lemma matches onto surface text.

use super::common::{JOHN_LEMMAS, JOHN_TEXT};
use lectio::highlight::realign::project_index;
use lectio::{realign, realign_text};

#[test]
fn single_term_window_covers_short_passage() {
    let lemmas = ["amo", "amas", "amat"];
    let surface = ["amo", "amas", "amavit"];
    let out = realign(&lemmas, &surface, &["amat"], 0, false);
    assert_eq!(out, vec!["amo amas amavit"]);
}

#[test]
fn one_window_per_occurrence() {
    let out = realign_text(JOHN_LEMMAS, JOHN_TEXT, "θεός", 0, false);
    assert_eq!(out.len(), 2);
    let surface: Vec<&str> = JOHN_TEXT.split_whitespace().collect();
    // θεός at 11 and 13: windows [1, 17) and [3, 17).
    assert_eq!(out[0], surface[1..].join(" "));
    assert_eq!(out[1], surface[3..].join(" "));
}

#[test]
fn unmatched_term_yields_nothing() {
    assert!(realign_text(JOHN_LEMMAS, JOHN_TEXT, "σάρξ", 0, false).is_empty());
    assert!(realign_text("", JOHN_TEXT, "λόγος", 0, false).is_empty());
    assert!(realign_text(JOHN_LEMMAS, JOHN_TEXT, "", 0, false).is_empty());
}

#[test]
fn unordered_search_looks_one_token_further_back() {
    // Every λόγος has ὁ directly before it and never after it.
    let ordered = realign_text(JOHN_LEMMAS, JOHN_TEXT, "λόγος ὁ", 0, true);
    let unordered = realign_text(JOHN_LEMMAS, JOHN_TEXT, "λόγος ὁ", 0, false);
    assert!(ordered.is_empty());
    assert_eq!(unordered.len(), 3);
}

#[test]
fn slop_widens_the_acceptance_window() {
    let tight = realign_text(JOHN_LEMMAS, JOHN_TEXT, "ἐν λόγος", 0, true);
    let loose = realign_text(JOHN_LEMMAS, JOHN_TEXT, "ἐν λόγος", 3, true);
    assert!(tight.is_empty());
    assert_eq!(loose.len(), 1);
}

#[test]
fn projection_scales_by_length_ratio() {
    // Twice as many surface tokens as lemmas.
    let lemmas: Vec<String> = (0..10).map(|i| format!("l{i}")).collect();
    let surface: Vec<String> = (0..20).map(|i| format!("s{i}")).collect();
    let query = vec!["l9".to_string()];
    let out = realign(&lemmas, &surface, &query, 0, false);
    // 9 * 2 = 18, window [8, 20).
    let expected: Vec<&str> = surface[8..].iter().map(String::as_str).collect();
    assert_eq!(out, vec![expected.join(" ")]);
}

#[test]
fn half_way_projection_rounds_to_even() {
    assert_eq!(project_index(5, 0.5), 2);
    assert_eq!(project_index(7, 0.5), 4);
    assert_eq!(project_index(3, 1.0), 3);
}
