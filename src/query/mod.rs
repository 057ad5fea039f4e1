// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query construction: from a search form to an engine request body.
//!
//! Raw parameters come in as strings, get validated into a `SearchRequest`,
//! and leave as a frozen `EngineQuery`. Every term becomes one span clause
//! (wildcard or fuzzy) and all clauses share a single proximity group, so a
//! multi-word query means "these words near each other", not "these words
//! anywhere in the passage".

pub mod builder;
pub mod params;

pub use builder::{
    build_basic_query, build_query, corpus_aggregations, sort_clause, validate_query, Clause,
    EngineQuery, ProximityGroup, QueryBuilder,
};
pub use params::parse_params;
