//! Search-as-you-type completions.

use super::common::{make_hit_json, make_response, tagged};
use lectio::{
    extract_suggestions, suggest, FnEngine, SearchConfig, SearchEngine, SearchRequest, Searcher,
    PRE_TAG, POST_TAG,
};
use serde_json::Value;

fn fox_engine() -> impl SearchEngine {
    FnEngine(|_: &[String], _: &Value| -> lectio::Result<Value> {
        Ok(make_response(
            3,
            vec![
                make_hit_json("urn:1", "", "", &[format!("{} jumps", tagged("fox")).as_str()]),
                make_hit_json("urn:2", "", "", &[format!("{} runs", tagged("fox")).as_str()]),
                make_hit_json("urn:3", "", "", &[format!("the {} runs!", tagged("fox")).as_str()]),
            ],
        ))
    })
}

#[test]
fn continuations_are_sorted_and_unique() {
    let searcher = Searcher::new(SearchConfig::default(), fox_engine());
    let request = SearchRequest::default().with_corpora(["nt"]);
    assert_eq!(suggest(&searcher, "fox", &request), vec!["jumps", "runs"]);
}

#[test]
fn no_corpus_means_no_suggestions() {
    let searcher = Searcher::new(SearchConfig::default(), fox_engine());
    assert!(suggest(&searcher, "fox", &SearchRequest::default()).is_empty());
}

#[test]
fn blank_partial_word_means_no_suggestions() {
    let searcher = Searcher::new(SearchConfig::default(), fox_engine());
    let request = SearchRequest::default().with_corpora(["nt"]);
    assert!(suggest(&searcher, "  ", &request).is_empty());
}

#[test]
fn budget_cuts_at_next_word_boundary() {
    let fragment = format!(
        "{} ἀρχῇ ἦν ὁ λόγος, καὶ ὁ λόγος ἦν πρὸς τὸν θεόν",
        tagged("Ἐν")
    );
    let out = extract_suggestions([fragment.as_str()], PRE_TAG, POST_TAG, 10);
    assert_eq!(out, vec!["ἀρχῇ ἦν ὁ λόγος"]);
}
