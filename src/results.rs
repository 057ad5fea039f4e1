// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result normalization: raw engine hits into uniform `Hit` records.
//!
//! Text searches keep the engine's highlights, trimmed by the snippet
//! windower. Lemma searches cannot use engine highlights (the lemma stream
//! is not what readers want to see), so their fragments are rebuilt from the
//! stored `text` field by the lemma realigner. Browsing without a query
//! yields hits with no fragments. Engine order is preserved throughout.

use crate::config::SearchConfig;
use crate::engine::RawHit;
use crate::highlight::{realign_text, window};
use crate::types::{Field, Hit, SearchRequest};

/// Converts raw hits using the windowing budget and tags from a config.
#[derive(Debug, Clone)]
pub struct ResultNormalizer<'a> {
    config: &'a SearchConfig,
}

impl<'a> ResultNormalizer<'a> {
    pub fn new(config: &'a SearchConfig) -> Self {
        Self { config }
    }

    pub fn normalize(&self, raw_hits: Vec<RawHit>, request: &SearchRequest) -> Vec<Hit> {
        let has_query = !request.query.trim().is_empty();
        raw_hits
            .into_iter()
            .map(|raw| {
                let fragments = if !has_query {
                    Vec::new()
                } else if request.field.is_lemma() {
                    self.lemma_fragments(&raw, request)
                } else {
                    self.text_fragments(&raw, request.field)
                };
                Hit {
                    id: raw.id,
                    source: raw.source,
                    fragments,
                }
            })
            .collect()
    }

    fn text_fragments(&self, raw: &RawHit, field: Field) -> Vec<String> {
        raw.highlight
            .get(field.as_str())
            .map(|fragments| {
                fragments
                    .iter()
                    .map(|f| {
                        window(
                            f,
                            self.config.window_before,
                            self.config.window_after,
                            &self.config.pre_tag,
                            &self.config.post_tag,
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn lemma_fragments(&self, raw: &RawHit, request: &SearchRequest) -> Vec<String> {
        let (slop, in_order) = request.effective_proximity();
        realign_text(
            raw.source_str(Field::Lemmas.as_str()),
            raw.source_str(Field::Text.as_str()),
            &request.query,
            slop,
            in_order,
        )
    }
}

/// Normalize with the default configuration.
pub fn normalize(raw_hits: Vec<RawHit>, request: &SearchRequest) -> Vec<Hit> {
    ResultNormalizer::new(&SearchConfig::default()).normalize(raw_hits, request)
}
