// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request-surface parsing.
//!
//! The hosting application hands over raw `key=value` pairs straight from the
//! query string. Unknown keys are ignored; known keys are validated here so
//! the query builder only ever sees well-formed requests.

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::types::{Field, SearchRequest};

/// Parse raw request parameters into a `SearchRequest`.
///
/// `corpus` may repeat and may also carry several identifiers joined by `+`.
/// `lemma_search` is the form checkbox equivalent of `field=lemmas`.
pub fn parse_params<I, K, V>(pairs: I, config: &SearchConfig) -> Result<SearchRequest>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut request = SearchRequest {
        page_size: config.per_page,
        ..SearchRequest::default()
    };
    let mut corpora: Vec<String> = Vec::new();
    let mut lemma_search = false;

    for (key, value) in pairs {
        let value = value.as_ref().trim();
        match key.as_ref() {
            "corpus" => corpora.extend(value.split('+').map(str::to_string)),
            "field" => request.field = value.parse()?,
            "q" => request.query = value.to_string(),
            "page" => request.page = parse_positive("page", value)?,
            "per_page" => request.page_size = parse_positive("per_page", value)?,
            "fuzziness" => request.fuzziness = value.parse()?,
            "phrase_search" => request.phrase_search = parse_bool("phrase_search", value)?,
            "slop" => request.slop = parse_slop(value)?,
            "in_order" => request.in_order = parse_bool("in_order", value)?,
            "sort" => request.sort = value.parse()?,
            "lemma_search" => lemma_search = parse_bool("lemma_search", value)?,
            other => tracing::trace!(key = other, "ignoring unknown search parameter"),
        }
    }

    if lemma_search {
        request.field = Field::Lemmas;
    }
    Ok(request.with_corpora(corpora))
}

fn parse_positive(name: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SearchError::parameter(name, value, "must be a positive integer")),
    }
}

fn parse_slop(value: &str) -> Result<usize> {
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse::<usize>()
        .map_err(|_| SearchError::parameter("slop", value, "must be a non-negative integer"))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "y" | "yes" => Ok(true),
        "false" | "off" | "0" | "n" | "no" | "" => Ok(false),
        _ => Err(SearchError::parameter(name, value, "expected a boolean")),
    }
}
