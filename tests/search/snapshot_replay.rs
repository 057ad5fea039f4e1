//! Recording searches and replaying them offline.

use super::common::{john_lemma_response, logos_response, record_advanced, record_basic};
use lectio::{
    Field, FnEngine, SearchConfig, SearchPage, SearchRequest, Searcher, SnapshotEngine,
};
use serde_json::Value;

fn replay(dir: &std::path::Path) -> Searcher<SnapshotEngine> {
    Searcher::new(SearchConfig::default(), SnapshotEngine::load(dir).unwrap())
}

#[test]
fn replayed_search_matches_recorded_response() {
    let dir = tempfile::tempdir().unwrap();
    let request = SearchRequest::new("logos").with_corpora(["nt", "tlg0018"]);
    record_advanced(dir.path(), &request, &logos_response());

    let page = replay(dir.path()).advanced_search(&request).unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(
        page.ids(),
        vec![
            "urn:cts:greekLit:tlg0031.tlg004:1.1",
            "urn:cts:greekLit:tlg0031.tlg004:1.14",
            "urn:cts:greekLit:tlg0018.tlg001:1",
        ]
    );
    assert!(page.hits[0].fragments[0].contains("logos"));
    assert!(page.hits[2].fragments.is_empty());
    assert_eq!(page.aggregations["corpus"]["buckets"]["NT"]["doc_count"], 3);
}

#[test]
fn unrecorded_request_is_an_empty_page() {
    let dir = tempfile::tempdir().unwrap();
    let recorded = SearchRequest::new("logos").with_corpora(["nt"]);
    record_advanced(dir.path(), &recorded, &logos_response());

    let searcher = replay(dir.path());
    let other = SearchRequest::new("logos").with_corpora(["nt"]).with_slop(3);
    assert_eq!(searcher.advanced_search(&other).unwrap(), SearchPage::empty());
}

#[test]
fn basic_and_advanced_are_kept_apart() {
    let dir = tempfile::tempdir().unwrap();
    let request = SearchRequest::new("logos").with_corpora(["nt"]);
    record_basic(dir.path(), &request, &logos_response());

    let searcher = replay(dir.path());
    assert_eq!(searcher.basic_search(&request).unwrap().total, 3);
    assert!(searcher.advanced_search(&request).unwrap().is_empty());
}

#[test]
fn lemma_search_replays_with_realigned_fragments() {
    let dir = tempfile::tempdir().unwrap();
    let request = SearchRequest::new("λόγος")
        .with_corpora(["nt"])
        .with_field(Field::Lemmas);
    record_advanced(dir.path(), &request, &john_lemma_response());

    let page = replay(dir.path()).advanced_search(&request).unwrap();
    assert_eq!(page.hits.len(), 1);
    // λόγος occurs three times in the lemma stream.
    assert_eq!(page.hits[0].fragments.len(), 3);
    assert!(page.hits[0].fragments.iter().all(|f| f.contains("λόγος")));
}

#[test]
fn live_searches_are_recorded_for_replay() {
    let dir = tempfile::tempdir().unwrap();
    let config = SearchConfig {
        save_requests: true,
        snapshot_dir: dir.path().to_path_buf(),
        ..SearchConfig::default()
    };
    let live = Searcher::new(
        config,
        FnEngine(|_: &[String], _: &Value| -> lectio::Result<Value> { Ok(logos_response()) }),
    );
    let request = SearchRequest::new("logos").with_corpora(["nt"]);
    let live_page = live.advanced_search(&request).unwrap();

    let replayed = replay(dir.path()).advanced_search(&request).unwrap();
    assert_eq!(replayed, live_page);
}
