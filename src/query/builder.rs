// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine request bodies for advanced and basic searches.
//!
//! The body layout (advanced):
//!
//! ```text
//! {
//!   "query":     { "bool": { "must": [ { "span_near": { clauses, slop, in_order } } ] } },
//!   "sort":      "urn" | [ { "urn": { "order": "desc" } } ],
//!   "from":      (page - 1) * page_size,
//!   "size":      page_size,
//!   "aggs":      { "corpus": { "filters": { "filters": { <facet>: { "match": { "_type": .. } } } } } },
//!   "highlight": { "fields": { <field>: { "fragment_size": n } }, pre_tags, post_tags, "encoder": "html" }
//! }
//! ```
//!
//! `must` is empty for an empty query (browse mode), and `highlight` is left
//! out for empty queries and for lemma searches, whose highlighting is
//! rebuilt from the text field afterwards.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::types::{Field, Fuzziness, SearchRequest, SortOrder};

const WILDCARDS: [char; 2] = ['*', '?'];

/// Matching rule for a single query term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// `*` / `?` pattern match on the literal term.
    Wildcard { field: Field, pattern: String },
    /// Edit-distance match.
    Fuzzy {
        field: Field,
        value: String,
        fuzziness: Fuzziness,
    },
    /// Exact single-term span (basic search only).
    Term { field: Field, value: String },
}

impl Clause {
    /// Wildcard terms get a pattern clause, everything else a fuzzy one.
    pub fn for_term(field: Field, term: &str, fuzziness: Fuzziness) -> Self {
        if term.contains(WILDCARDS) {
            Clause::Wildcard {
                field,
                pattern: term.to_string(),
            }
        } else {
            Clause::Fuzzy {
                field,
                value: term.to_string(),
                fuzziness,
            }
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Clause::Wildcard { field, pattern } => {
                json!({ "span_multi": { "match": { "wildcard": { field.as_str(): pattern } } } })
            }
            Clause::Fuzzy {
                field,
                value,
                fuzziness,
            } => json!({
                "span_multi": { "match": { "fuzzy": {
                    field.as_str(): { "value": value, "fuzziness": fuzziness.as_str() }
                } } }
            }),
            Clause::Term { field, value } => json!({ "span_term": { field.as_str(): value } }),
        }
    }
}

/// Ordered clauses that must all match within `slop` tokens of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProximityGroup {
    pub clauses: Vec<Clause>,
    pub slop: usize,
    pub in_order: bool,
}

impl ProximityGroup {
    pub fn to_json(&self) -> Value {
        let clauses: Vec<Value> = self.clauses.iter().map(Clause::to_json).collect();
        json!({ "span_near": { "clauses": clauses, "slop": self.slop, "in_order": self.in_order } })
    }
}

/// A finished engine request. Immutable once built; handed to the engine as is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineQuery {
    indices: Vec<String>,
    body: Value,
}

impl EngineQuery {
    /// Indices (corpora) to search.
    pub fn indices(&self) -> &[String] {
        &self.indices
    }

    /// Request body as sent to the engine.
    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_parts(self) -> (Vec<String>, Value) {
        (self.indices, self.body)
    }
}

/// Reject wildcard characters in lemma queries before anything is built.
pub fn validate_query(request: &SearchRequest) -> Result<()> {
    if !request.field.is_lemma() {
        return Ok(());
    }
    let found: Vec<String> = WILDCARDS
        .iter()
        .filter(|c| request.query.contains(**c))
        .map(|c| format!("\"{}\"", c))
        .collect();
    if found.is_empty() {
        Ok(())
    } else {
        Err(SearchError::InvalidQuery {
            field: request.field.as_str().to_string(),
            characters: found.join(", "),
        })
    }
}

/// Engine sort specification.
pub fn sort_clause(sort: SortOrder) -> Value {
    match sort {
        SortOrder::Urn => json!("urn"),
        SortOrder::UrnDesc => json!([{ "urn": { "order": "desc" } }]),
    }
}

/// The fixed corpus-type facet: one named filter per document type.
pub fn corpus_aggregations(config: &SearchConfig) -> Value {
    let filters: Map<String, Value> = config
        .corpus_facets
        .iter()
        .map(|(name, doc_type)| (name.clone(), json!({ "match": { "_type": doc_type } })))
        .collect();
    json!({ "corpus": { "filters": { "filters": filters } } })
}

/// Builds engine queries with the fragment sizes, tags and facets from a
/// `SearchConfig`.
#[derive(Debug, Clone)]
pub struct QueryBuilder<'a> {
    config: &'a SearchConfig,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(config: &'a SearchConfig) -> Self {
        Self { config }
    }

    /// Advanced (form) search.
    pub fn build(&self, request: &SearchRequest) -> Result<EngineQuery> {
        validate_query(request)?;

        let field = request.field;
        let terms = request.terms();
        let mut must: Vec<Value> = Vec::new();

        if !terms.is_empty() {
            let fuzziness = if field.is_lemma() {
                Fuzziness::Zero
            } else {
                request.fuzziness
            };
            let (slop, in_order) = request.effective_proximity();
            let group = ProximityGroup {
                clauses: terms
                    .iter()
                    .map(|t| Clause::for_term(field, t, fuzziness))
                    .collect(),
                slop,
                in_order,
            };
            must.push(group.to_json());
        }

        let mut body = json!({
            "query": { "bool": { "must": must } },
            "sort": sort_clause(request.sort),
            "from": request.offset(),
            "size": request.page_size,
            "aggs": corpus_aggregations(self.config),
        });

        if !terms.is_empty() && !field.is_lemma() {
            let size = request.fragment_size.unwrap_or(self.config.fragment_size);
            body["highlight"] = self.highlight_clause(field, size);
        }

        tracing::debug!(
            field = field.as_str(),
            terms = terms.len(),
            corpora = ?request.corpora,
            "built advanced query"
        );

        Ok(EngineQuery {
            indices: request.corpora.clone(),
            body,
        })
    }

    /// Basic (quick) search: exact spans, adjacent and in order.
    pub fn build_basic(&self, request: &SearchRequest) -> Result<EngineQuery> {
        validate_query(request)?;

        let field = request.field;
        let clauses: Vec<Clause> = request
            .terms()
            .into_iter()
            .map(|term| {
                if term.contains(WILDCARDS) {
                    Clause::Wildcard {
                        field,
                        pattern: term.to_string(),
                    }
                } else {
                    Clause::Term {
                        field,
                        value: term.to_string(),
                    }
                }
            })
            .collect();
        let group = ProximityGroup {
            clauses,
            slop: 0,
            in_order: true,
        };

        let body = json!({
            "query": group.to_json(),
            "sort": sort_clause(request.sort),
            "from": request.offset(),
            "size": request.page_size,
            "highlight": self.highlight_clause(field, self.config.basic_fragment_size),
            "aggs": corpus_aggregations(self.config),
        });

        tracing::debug!(field = field.as_str(), "built basic query");

        Ok(EngineQuery {
            indices: request.corpora.clone(),
            body,
        })
    }

    fn highlight_clause(&self, field: Field, fragment_size: usize) -> Value {
        json!({
            "fields": { field.as_str(): { "fragment_size": fragment_size } },
            "pre_tags": [self.config.pre_tag],
            "post_tags": [self.config.post_tag],
            "encoder": "html",
        })
    }
}

/// Advanced query with the default configuration.
pub fn build_query(request: &SearchRequest) -> Result<EngineQuery> {
    QueryBuilder::new(&SearchConfig::default()).build(request)
}

/// Basic query with the default configuration.
pub fn build_basic_query(request: &SearchRequest) -> Result<EngineQuery> {
    QueryBuilder::new(&SearchConfig::default()).build_basic(request)
}
