// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine seam.
//!
//! This crate never talks to a search cluster itself. The hosting
//! application owns the client and hands it in through [`SearchEngine`];
//! tests and the CLI use [`snapshot::SnapshotEngine`], which answers from
//! recorded request/response pairs.

pub mod snapshot;

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::Result;

/// One synchronous round trip to a text-search engine.
///
/// Implementations return the raw JSON response; decoding happens in
/// [`crate::results`]. Timeouts and retries are the implementation's
/// business.
pub trait SearchEngine {
    fn search(&self, indices: &[String], body: &Value) -> Result<Value>;
}

impl<E: SearchEngine + ?Sized> SearchEngine for Box<E> {
    fn search(&self, indices: &[String], body: &Value) -> Result<Value> {
        (**self).search(indices, body)
    }
}

/// Adapts a closure into a [`SearchEngine`].
pub struct FnEngine<F>(pub F);

impl<F> SearchEngine for FnEngine<F>
where
    F: Fn(&[String], &Value) -> Result<Value>,
{
    fn search(&self, indices: &[String], body: &Value) -> Result<Value> {
        (self.0)(indices, body)
    }
}

/// The parts of an engine response we consume.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineResponse {
    pub hits: HitsEnvelope,
    #[serde(default)]
    pub aggregations: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HitsEnvelope {
    pub total: TotalHits,
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

/// Older engines report a bare count, newer ones `{ "value": n, "relation": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TotalHits {
    Count(u64),
    Object { value: u64 },
}

impl TotalHits {
    pub fn value(&self) -> u64 {
        match *self {
            TotalHits::Count(n) | TotalHits::Object { value: n } => n,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: Map<String, Value>,
    /// Highlighted fragments per field; absent when no highlight was requested.
    #[serde(default)]
    pub highlight: HashMap<String, Vec<String>>,
}

impl RawHit {
    /// String value of a source field, or "" when missing or not a string.
    pub fn source_str(&self, field: &str) -> &str {
        self.source
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

impl EngineResponse {
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decode without taking ownership of the raw response.
    pub fn from_ref(value: &Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }
}
