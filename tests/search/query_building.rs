//! Engine request bodies as a whole, built through the public API.

use lectio::{
    build_basic_query, build_query, Field, Fuzziness, QueryBuilder, SearchConfig, SearchError,
    SearchRequest, SortOrder,
};
use serde_json::json;

#[test]
fn advanced_body_matches_engine_layout() {
    let request = SearchRequest::new("ἀρχῇ λόγος")
        .with_corpora(["nt", "tlg0527"])
        .with_fuzziness(Fuzziness::Auto)
        .with_slop(2)
        .with_in_order(true)
        .with_sort(SortOrder::UrnDesc)
        .with_page(2, 10);
    let query = build_query(&request).unwrap();

    assert_eq!(query.indices(), ["nt".to_string(), "tlg0527".to_string()]);
    let body = query.body();
    assert_eq!(
        body["query"]["bool"]["must"],
        json!([{ "span_near": {
            "clauses": [
                { "span_multi": { "match": { "fuzzy": { "text": { "value": "ἀρχῇ", "fuzziness": "AUTO" } } } } },
                { "span_multi": { "match": { "fuzzy": { "text": { "value": "λόγος", "fuzziness": "AUTO" } } } } }
            ],
            "slop": 2,
            "in_order": true
        } }])
    );
    assert_eq!(body["sort"], json!([{ "urn": { "order": "desc" } }]));
    assert_eq!(body["from"], 10);
    assert_eq!(body["size"], 10);
    assert_eq!(
        body["highlight"],
        json!({
            "fields": { "text": { "fragment_size": 1000 } },
            "pre_tags": ["</small><strong>"],
            "post_tags": ["</strong><small>"],
            "encoder": "html"
        })
    );
    assert_eq!(
        body["aggs"]["corpus"]["filters"]["filters"]["NT"],
        json!({ "match": { "_type": "nt" } })
    );
}

#[test]
fn wildcard_in_lemma_query_is_rejected_with_characters() {
    for (query, expected) in [("λόγ*", "\"*\""), ("λ?γος", "\"?\"")] {
        let request = SearchRequest::new(query)
            .with_corpora(["nt"])
            .with_field(Field::Lemmas);
        match build_query(&request) {
            Err(SearchError::InvalidQuery { field, characters }) => {
                assert_eq!(field, "lemmas");
                assert_eq!(characters, expected);
            }
            other => panic!("expected InvalidQuery for {query:?}, got {other:?}"),
        }
    }
}

#[test]
fn wildcards_allowed_on_text_field() {
    let request = SearchRequest::new("λόγ*").with_corpora(["nt"]);
    let query = build_query(&request).unwrap();
    let clause = &query.body()["query"]["bool"]["must"][0]["span_near"]["clauses"][0];
    assert_eq!(clause, &json!({ "span_multi": { "match": { "wildcard": { "text": "λόγ*" } } } }));
}

#[test]
fn autocomplete_field_highlights_its_own_field() {
    let request = SearchRequest::new("λόγ")
        .with_corpora(["nt"])
        .with_field(Field::Autocomplete)
        .with_fragment_size(1000);
    let query = build_query(&request).unwrap();
    assert!(query.body()["highlight"]["fields"]["autocomplete"].is_object());
}

#[test]
fn basic_body_uses_exact_spans() {
    let request = SearchRequest::new("ἐν ἀρχ*").with_corpora(["nt"]);
    let query = build_basic_query(&request).unwrap();
    assert_eq!(
        query.body()["query"],
        json!({ "span_near": {
            "clauses": [
                { "span_term": { "text": "ἐν" } },
                { "span_multi": { "match": { "wildcard": { "text": "ἀρχ*" } } } }
            ],
            "slop": 0,
            "in_order": true
        } })
    );
}

#[test]
fn configured_tags_and_facets_flow_into_body() {
    let mut config = SearchConfig {
        pre_tag: "<mark>".into(),
        post_tag: "</mark>".into(),
        fragment_size: 500,
        ..SearchConfig::default()
    };
    config.corpus_facets.clear();
    config.corpus_facets.insert("Homer".into(), "tlg0012".into());

    let request = SearchRequest::new("μῆνιν").with_corpora(["tlg0012"]);
    let query = QueryBuilder::new(&config).build(&request).unwrap();
    let body = query.body();
    assert_eq!(body["highlight"]["pre_tags"], json!(["<mark>"]));
    assert_eq!(body["highlight"]["fields"]["text"]["fragment_size"], 500);
    assert_eq!(
        body["aggs"]["corpus"]["filters"]["filters"],
        json!({ "Homer": { "match": { "_type": "tlg0012" } } })
    );
}
