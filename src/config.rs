// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Read from an optional JSON file, then overlaid with `LECTIO_*` environment
//! variables. Every field has a default, so an empty object (or no file at
//! all) is a valid configuration.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SearchError};

/// Marker the engine inserts before a highlighted term. The surrounding
/// markup renders context in `<small>`, so the tags close and reopen it.
pub const PRE_TAG: &str = "</small><strong>";
/// Marker the engine inserts after a highlighted term.
pub const POST_TAG: &str = "</strong><small>";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Record every non-autocomplete request/response pair to `snapshot_dir`.
    pub save_requests: bool,
    pub snapshot_dir: PathBuf,
    pub per_page: usize,
    /// Highlight fragment size for advanced searches.
    pub fragment_size: usize,
    /// Highlight fragment size for basic searches.
    pub basic_fragment_size: usize,
    /// Highlight fragment size requested for autocomplete.
    pub suggest_fragment_size: usize,
    /// Characters of context kept before the first highlight.
    pub window_before: usize,
    /// Characters of context kept after the last highlight.
    pub window_after: usize,
    /// Characters of continuation kept for each suggestion.
    pub suggest_budget: usize,
    pub pre_tag: String,
    pub post_tag: String,
    /// Facet name -> document type for the corpus breakdown aggregation.
    pub corpus_facets: BTreeMap<String, String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let corpus_facets = [("NT", "nt"), ("Philo", "tlg0018"), ("LXX", "tlg0527")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            save_requests: false,
            snapshot_dir: PathBuf::from("./snapshots"),
            per_page: 10,
            fragment_size: 1000,
            basic_fragment_size: 300,
            suggest_fragment_size: 1000,
            window_before: 30,
            window_after: 30,
            suggest_budget: 30,
            pre_tag: PRE_TAG.to_string(),
            post_tag: POST_TAG.to_string(),
            corpus_facets,
        }
    }
}

impl SearchConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| SearchError::io(path, e))?;
        let config: SearchConfig = serde_json::from_str(&raw)
            .map_err(|e| SearchError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, optionally replaced by a file, then overlaid with the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        base.with_env(|key| std::env::var(key).ok())
    }

    /// Apply `LECTIO_*` overrides from `lookup`. Takes a closure so tests can
    /// feed a fixed environment.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LECTIO_SAVE_REQUESTS") {
            self.save_requests = parse_flag(&v);
        }
        if let Some(v) = lookup("LECTIO_SNAPSHOT_DIR") {
            self.snapshot_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("LECTIO_PER_PAGE") {
            self.per_page = v.parse().map_err(|_| {
                SearchError::Config(format!("LECTIO_PER_PAGE must be an integer, got {:?}", v))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(SearchError::Config("per_page must be at least 1".into()));
        }
        if self.pre_tag.is_empty() || self.post_tag.is_empty() {
            return Err(SearchError::Config(
                "pre_tag and post_tag must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
