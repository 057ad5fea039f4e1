// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by every stage of the search pipeline.
//!
//! Most of these never reach the hosting application. `Searcher` swallows
//! engine and response failures into an empty page, and the passage
//! highlighter hands back its input when the markup will not parse. The ones
//! that do escape are request-validation problems the user can fix.

use std::path::PathBuf;

/// Every failure mode the pipeline knows about.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Wildcards were used against the lemma field, which only supports exact terms.
    #[error(
        "Wildcard characters ({characters}) are not allowed in a {field} search. Remove them or search the text field."
    )]
    InvalidQuery {
        /// Field the query targeted.
        field: String,
        /// The offending characters, quoted and comma separated.
        characters: String,
    },

    /// A request parameter is missing, malformed or out of range.
    #[error("Invalid value {value:?} for parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name as it appears on the request surface.
        name: String,
        /// Raw value received.
        value: String,
        /// What was expected instead.
        reason: String,
    },

    /// The engine client reported a transport-level failure.
    #[error("Search engine request failed: {0}")]
    Engine(String),

    /// The engine answered, but not in the shape we consume.
    #[error("Search engine response could not be decoded: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Rendered passage markup is not well-formed.
    #[error("Passage markup could not be parsed: {0}")]
    MalformedMarkup(String),

    /// Reading or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A search snapshot could not be encoded for recording.
    #[error("Search snapshot {path} could not be encoded: {source}")]
    Snapshot {
        /// Snapshot file being written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration could not be loaded.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SearchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SearchError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn snapshot(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        SearchError::Snapshot {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parameter(name: &str, value: &str, reason: impl Into<String>) -> Self {
        SearchError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
