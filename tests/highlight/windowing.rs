//! Snippet windowing around engine highlights.

use super::common::tagged;
use lectio::{window, POST_TAG, PRE_TAG};

#[test]
fn quick_fox_keeps_whole_neighbours() {
    let fragment = format!("the quick {} jumps over", tagged("fox"));
    let out = window(&fragment, 4, 4, PRE_TAG, POST_TAG);
    assert_eq!(out, format!(" quick {} jumps", tagged("fox")));
    assert!(!out.contains("the"));
    assert!(!out.contains("over"));
}

#[test]
fn window_spans_first_to_last_highlight() {
    let fragment = format!(
        "one two three {} four five six {} seven eight nine",
        tagged("alpha"),
        tagged("omega")
    );
    let out = window(&fragment, 3, 3, PRE_TAG, POST_TAG);
    assert_eq!(
        out,
        format!(" three {} four five six {} seven", tagged("alpha"), tagged("omega"))
    );
}

#[test]
fn counts_characters_not_bytes() {
    let fragment = format!("ἐν ἀρχῇ ἦν ὁ {} καὶ ὁ λόγος ἦν", tagged("λόγος"));
    let out = window(&fragment, 3, 3, PRE_TAG, POST_TAG);
    assert_eq!(out, format!(" ἦν ὁ {} καὶ", tagged("λόγος")));
}

#[test]
fn fragment_without_tags_is_unchanged() {
    assert_eq!(window("no highlight here", 2, 2, PRE_TAG, POST_TAG), "no highlight here");
}

#[test]
fn short_context_is_not_trimmed() {
    let fragment = format!("a {} b", tagged("x"));
    assert_eq!(window(&fragment, 30, 30, PRE_TAG, POST_TAG), fragment);
}
