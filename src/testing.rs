//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use serde_json::{json, Value};

use crate::config::{POST_TAG, PRE_TAG};

/// Wrap `term` in the default highlight tags.
pub fn tagged(term: &str) -> String {
    format!("{}{}{}", PRE_TAG, term, POST_TAG)
}

/// One engine hit as the engine returns it.
///
/// This is the canonical implementation used across all tests.
pub fn make_hit_json(id: &str, text: &str, lemmas: &str, highlights: &[&str]) -> Value {
    let mut hit = json!({
        "_id": id,
        "_source": { "text": text, "lemmas": lemmas },
    });
    if !highlights.is_empty() {
        hit["highlight"] = json!({ "text": highlights, "autocomplete": highlights });
    }
    hit
}

/// A complete engine response with the default corpus facets.
pub fn make_response(total: u64, hits: Vec<Value>) -> Value {
    json!({
        "hits": { "total": total, "hits": hits },
        "aggregations": {
            "corpus": { "buckets": {
                "NT": { "doc_count": total },
                "Philo": { "doc_count": 0 },
                "LXX": { "doc_count": 0 }
            } }
        }
    })
}

/// A rendered passage line: one `w` span per word inside a `<p>`.
pub fn make_line(words: &[&str]) -> String {
    let spans: Vec<String> = words
        .iter()
        .map(|w| format!(r#"<span class="w">{}</span>"#, w))
        .collect();
    format!(r#"<p class="s">{}</p>"#, spans.join(" "))
}
