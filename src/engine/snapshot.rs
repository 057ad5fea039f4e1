// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recorded engine traffic.
//!
//! With `save_requests` on, every search writes one snapshot: the request
//! signature, the indices and body sent, the ids that came back, and the raw
//! response. [`SnapshotEngine`] loads a directory of them and replays the
//! response whenever it sees an identical request, which lets the whole
//! pipeline run offline.
//!
//! Layout: `<dir>/<category>/<crc32 of signature>.json`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::SearchEngine;
use crate::error::{Result, SearchError};
use crate::query::EngineQuery;
use crate::types::SearchRequest;

/// Category for advanced (form) searches.
pub const ADVANCED_SEARCH: &str = "advanced_search";
/// Category for basic searches.
pub const BASIC_SEARCH: &str = "basic_search";

/// One recorded round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub signature: String,
    pub indices: Vec<String>,
    pub request: Value,
    /// Returned ids, without any text, for quick inspection.
    pub ids: Vec<String>,
    pub response: Value,
}

/// Stable key for a request:
/// `corpora&field&query&fuzziness&in_order&slop&sort`, with corpora joined
/// by `+` and spaces in the query replaced by `+`.
pub fn request_signature(request: &SearchRequest) -> String {
    format!(
        "{}&{}&{}&{}&{}&{}&{}",
        request.corpora.join("+"),
        request.field,
        request.query.replace(' ', "+"),
        request.fuzziness,
        if request.in_order { "True" } else { "False" },
        request.slop,
        request.sort,
    )
}

fn snapshot_path(dir: &Path, category: &str, signature: &str) -> PathBuf {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(signature.as_bytes());
    dir.join(category)
        .join(format!("{:08x}.json", hasher.finalize()))
}

/// Writes snapshots below a directory.
#[derive(Debug, Clone)]
pub struct SnapshotRecorder {
    dir: PathBuf,
}

impl SnapshotRecorder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write (or overwrite) the snapshot for `signature`.
    pub fn record(
        &self,
        category: &str,
        signature: &str,
        query: &EngineQuery,
        ids: &[&str],
        response: &Value,
    ) -> Result<PathBuf> {
        let path = snapshot_path(&self.dir, category, signature);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SearchError::io(parent, e))?;
        }
        let snapshot = Snapshot {
            signature: signature.to_string(),
            indices: query.indices().to_vec(),
            request: query.body().clone(),
            ids: ids.iter().map(|s| s.to_string()).collect(),
            response: response.clone(),
        };
        let json =
            serde_json::to_string_pretty(&snapshot).map_err(|e| SearchError::snapshot(&path, e))?;
        fs::write(&path, json).map_err(|e| SearchError::io(&path, e))?;
        tracing::debug!(path = %path.display(), signature, "recorded search snapshot");
        Ok(path)
    }
}

/// Answers requests from recorded snapshots.
#[derive(Debug, Clone, Default)]
pub struct SnapshotEngine {
    snapshots: Vec<Snapshot>,
}

impl SnapshotEngine {
    pub fn new(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    /// Load every `*.json` snapshot in `dir` and its category sub-directories.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut snapshots = Vec::new();
        load_dir(dir, &mut snapshots, 1)?;
        tracing::info!(count = snapshots.len(), dir = %dir.display(), "loaded search snapshots");
        Ok(Self { snapshots })
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn find(&self, signature: &str) -> Option<&Snapshot> {
        self.snapshots.iter().find(|s| s.signature == signature)
    }
}

fn load_dir(dir: &Path, out: &mut Vec<Snapshot>, depth: usize) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| SearchError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| SearchError::io(dir, e))?.path();
        if path.is_dir() {
            if depth > 0 {
                load_dir(&path, out, depth - 1)?;
            }
        } else if path.extension().is_some_and(|ext| ext == "json") {
            let raw = fs::read_to_string(&path).map_err(|e| SearchError::io(&path, e))?;
            match serde_json::from_str::<Snapshot>(&raw) {
                Ok(snapshot) => out.push(snapshot),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping unreadable snapshot");
                }
            }
        }
    }
    Ok(())
}

impl SearchEngine for SnapshotEngine {
    fn search(&self, indices: &[String], body: &Value) -> Result<Value> {
        self.snapshots
            .iter()
            .find(|s| s.indices == indices && &s.request == body)
            .map(|s| s.response.clone())
            .ok_or_else(|| {
                SearchError::Engine(format!(
                    "no recorded response for a request against {}",
                    indices.join("+")
                ))
            })
    }
}
