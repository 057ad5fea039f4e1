//! Shared test utilities and fixtures.

#![allow(dead_code)]

use lectio::{
    build_basic_query, build_query, request_signature, SearchRequest, SnapshotRecorder,
};
use serde_json::Value;
use std::path::Path;

// Re-export canonical test utilities from lectio::testing
pub use lectio::testing::{make_hit_json, make_line, make_response, tagged};

// ============================================================================
// CORPUS FIXTURES
// ============================================================================

/// Lemma stream of John 1:1, one lemma per surface token.
pub const JOHN_LEMMAS: &str =
    "ἐν ἀρχή εἰμί ὁ λόγος καί ὁ λόγος εἰμί πρός ὁ θεός καί θεός εἰμί ὁ λόγος";

/// Surface text of John 1:1.
pub const JOHN_TEXT: &str =
    "Ἐν ἀρχῇ ἦν ὁ λόγος, καὶ ὁ λόγος ἦν πρὸς τὸν θεόν, καὶ θεὸς ἦν ὁ λόγος.";

/// Engine response for a text search for `logos`.
pub fn logos_response() -> Value {
    make_response(
        3,
        vec![
            make_hit_json(
                "urn:cts:greekLit:tlg0031.tlg004:1.1",
                "en arche en ho logos",
                "en arche eimi ho logos",
                &[format!("en arche en ho {}", tagged("logos")).as_str()],
            ),
            make_hit_json(
                "urn:cts:greekLit:tlg0031.tlg004:1.14",
                "kai ho logos sarx egeneto",
                "kai ho logos sarx ginomai",
                &[format!("kai ho {} sarx egeneto", tagged("logos")).as_str()],
            ),
            make_hit_json("urn:cts:greekLit:tlg0018.tlg001:1", "logos", "logos", &[]),
        ],
    )
}

/// Engine response for a lemma search over John 1:1.
pub fn john_lemma_response() -> Value {
    make_response(
        1,
        vec![make_hit_json(
            "urn:cts:greekLit:tlg0031.tlg004:1.1",
            JOHN_TEXT,
            JOHN_LEMMAS,
            &[],
        )],
    )
}

/// Record `response` as the answer to the advanced query for `request`.
pub fn record_advanced(dir: &Path, request: &SearchRequest, response: &Value) {
    let query = build_query(request).expect("fixture request must build");
    SnapshotRecorder::new(dir)
        .record("advanced_search", &request_signature(request), &query, &[], response)
        .expect("fixture snapshot must be written");
}

/// Record `response` as the answer to the basic query for `request`.
pub fn record_basic(dir: &Path, request: &SearchRequest, response: &Value) {
    let query = build_basic_query(request).expect("fixture request must build");
    SnapshotRecorder::new(dir)
        .record("basic_search", &request_signature(request), &query, &[], response)
        .expect("fixture snapshot must be written");
}
