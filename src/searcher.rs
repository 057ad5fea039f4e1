// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search orchestration: validate, build, call the engine, normalize, record.
//!
//! ```text
//! SearchRequest ──validate──▶ QueryBuilder ──▶ SearchEngine ──▶ EngineResponse
//!                                                                   │
//!                          SearchPage ◀── ResultNormalizer ◀────────┘
//!                                                                   │
//!                                          SnapshotRecorder ◀───────┘ (optional)
//! ```
//!
//! Only request validation fails loudly. A missing engine, an empty corpus
//! selection, a transport failure or an undecodable response all produce
//! [`SearchPage::empty`], so callers render "no results" the same way in
//! every case.

use serde_json::Value;

use crate::config::SearchConfig;
use crate::engine::snapshot::{request_signature, SnapshotRecorder, ADVANCED_SEARCH, BASIC_SEARCH};
use crate::engine::{EngineResponse, SearchEngine};
use crate::error::Result;
use crate::query::{validate_query, EngineQuery, QueryBuilder};
use crate::results::ResultNormalizer;
use crate::types::{SearchPage, SearchRequest};

/// Runs searches against an optional engine.
pub struct Searcher<E> {
    config: SearchConfig,
    engine: Option<E>,
    recorder: Option<SnapshotRecorder>,
}

impl<E: SearchEngine> Searcher<E> {
    pub fn new(config: SearchConfig, engine: E) -> Self {
        Self::with_engine(config, Some(engine))
    }

    /// A searcher with no engine; every search returns the empty page.
    pub fn disconnected(config: SearchConfig) -> Self {
        Self::with_engine(config, None)
    }

    pub fn with_engine(config: SearchConfig, engine: Option<E>) -> Self {
        let recorder = config
            .save_requests
            .then(|| SnapshotRecorder::new(config.snapshot_dir.clone()));
        Self {
            config,
            engine,
            recorder,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.engine.is_some()
    }

    /// Proximity search over the request's field.
    ///
    /// # Errors
    ///
    /// [`crate::SearchError::InvalidQuery`] for wildcards in a lemma query.
    /// Nothing else escapes.
    pub fn advanced_search(&self, request: &SearchRequest) -> Result<SearchPage> {
        validate_query(request)?;
        let Some(engine) = self.ready(request) else {
            return Ok(SearchPage::empty());
        };
        let query = QueryBuilder::new(&self.config).build(request)?;
        Ok(self.run(engine, ADVANCED_SEARCH, query, request))
    }

    /// Exact phrase search over the request's field, with short fragments.
    pub fn basic_search(&self, request: &SearchRequest) -> Result<SearchPage> {
        validate_query(request)?;
        let Some(engine) = self.ready(request) else {
            return Ok(SearchPage::empty());
        };
        let query = QueryBuilder::new(&self.config).build_basic(request)?;
        Ok(self.run(engine, BASIC_SEARCH, query, request))
    }

    fn ready(&self, request: &SearchRequest) -> Option<&E> {
        let Some(engine) = self.engine.as_ref() else {
            tracing::debug!("no search engine configured");
            return None;
        };
        if request.has_no_corpora() {
            tracing::debug!("no corpus selected");
            return None;
        }
        Some(engine)
    }

    fn run(&self, engine: &E, category: &str, query: EngineQuery, request: &SearchRequest) -> SearchPage {
        let raw = match engine.search(query.indices(), query.body()) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, corpora = ?request.corpora, "search engine failed");
                return SearchPage::empty();
            }
        };
        let response = match EngineResponse::from_ref(&raw) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "unexpected search engine response");
                return SearchPage::empty();
            }
        };

        let total = response.hits.total.value();
        let hits = ResultNormalizer::new(&self.config).normalize(response.hits.hits, request);
        let page = SearchPage {
            hits,
            total,
            aggregations: response.aggregations,
        };

        tracing::info!(
            category,
            field = request.field.as_str(),
            query = %request.query,
            total,
            returned = page.hits.len(),
            "search complete"
        );

        self.record(category, request, &query, &page, &raw);
        page
    }

    fn record(
        &self,
        category: &str,
        request: &SearchRequest,
        query: &EngineQuery,
        page: &SearchPage,
        raw: &Value,
    ) {
        let Some(recorder) = &self.recorder else {
            return;
        };
        if request.field.is_autocomplete() {
            return;
        }
        let signature = request_signature(request);
        if let Err(err) = recorder.record(category, &signature, query, &page.ids(), raw) {
            tracing::warn!(error = %err, signature = %signature, "could not record search snapshot");
        }
    }
}
