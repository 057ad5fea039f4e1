//! Raw engine hits into uniform hits.

use super::common::{john_lemma_response, logos_response, tagged, JOHN_TEXT};
use lectio::{
    normalize, parse_params, EngineResponse, Field, ResultNormalizer, SearchConfig,
    SearchRequest,
};
use serde_json::json;

fn raw_hits(value: serde_json::Value) -> Vec<lectio::RawHit> {
    EngineResponse::from_value(value).unwrap().hits.hits
}

#[test]
fn text_hits_keep_engine_order_and_windowed_fragments() {
    let request = SearchRequest::new("logos").with_corpora(["nt"]);
    let hits = normalize(raw_hits(logos_response()), &request);
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].id, "urn:cts:greekLit:tlg0031.tlg004:1.1");
    assert_eq!(hits[0].fragments, vec![format!("en arche en ho {}", tagged("logos"))]);
    assert_eq!(hits[0].source["lemmas"], "en arche eimi ho logos");
}

#[test]
fn narrow_window_trims_long_fragments() {
    let config = SearchConfig {
        window_before: 5,
        window_after: 5,
        ..SearchConfig::default()
    };
    let fragment = format!(
        "alpha beta gamma delta {} epsilon zeta eta theta",
        tagged("logos")
    );
    let raw = raw_hits(json!({ "hits": { "total": 1, "hits": [
        { "_id": "urn:1", "_source": {}, "highlight": { "text": [fragment] } }
    ] } }));
    let hits = ResultNormalizer::new(&config).normalize(raw, &SearchRequest::new("logos"));
    assert_eq!(
        hits[0].fragments,
        vec![format!(" delta {} epsilon", tagged("logos"))]
    );
}

#[test]
fn lemma_hits_show_surface_text() {
    let request = SearchRequest::new("ἀρχή")
        .with_corpora(["nt"])
        .with_field(Field::Lemmas);
    let hits = normalize(raw_hits(john_lemma_response()), &request);
    let expected: Vec<&str> = JOHN_TEXT.split_whitespace().take(11).collect();
    assert_eq!(hits[0].fragments, vec![expected.join(" ")]);
}

#[test]
fn lemma_phrase_needs_all_terms_nearby() {
    let near = SearchRequest::new("ὁ λόγος")
        .with_field(Field::Lemmas)
        .with_in_order(true);
    let hits = normalize(raw_hits(john_lemma_response()), &near);
    // ὁ is followed by λόγος at 3, 6 and 15; the ὁ at 10 precedes θεός.
    assert_eq!(hits[0].fragments.len(), 3);

    let absent = SearchRequest::new("ὁ σάρξ").with_field(Field::Lemmas);
    let hits = normalize(raw_hits(john_lemma_response()), &absent);
    assert!(hits[0].fragments.is_empty());
}

#[test]
fn unbounded_lemma_slop_keeps_every_anchor() {
    let request = parse_params(
        [
            ("corpus", "nt"),
            ("field", "lemmas"),
            ("q", "ὁ λόγος"),
            ("slop", "18446744073709551615"),
        ],
        &SearchConfig::default(),
    )
    .unwrap();
    let hits = normalize(raw_hits(john_lemma_response()), &request);
    // Every ὁ (3, 6, 10 and 15) has a λόγος somewhere in the verse.
    assert_eq!(hits[0].fragments.len(), 4);
}

#[test]
fn browsing_returns_no_fragments() {
    let hits = normalize(raw_hits(logos_response()), &SearchRequest::new(""));
    assert!(hits.iter().all(|h| h.fragments.is_empty()));
}
