// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core request and result types.
//!
//! A search is described once by a `SearchRequest`, turned into an
//! `EngineQuery`, and comes back as a `SearchPage` of `Hit`s. None of these
//! outlive the call that created them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Index field a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Inflected surface text.
    #[default]
    Text,
    /// Lemmatized (dictionary headword) stream of the same text.
    Lemmas,
    /// Edge-ngram variant of the text field used for search-as-you-type.
    Autocomplete,
    /// Edge-ngram variant of the lemma field.
    AutocompleteLemmas,
}

impl Field {
    /// Name of the field in the engine mapping.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Text => "text",
            Field::Lemmas => "lemmas",
            Field::Autocomplete => "autocomplete",
            Field::AutocompleteLemmas => "autocomplete_lemmas",
        }
    }

    /// Lemma searches allow neither wildcards nor fuzziness, and cannot be
    /// highlighted by the engine directly.
    pub fn is_lemma(&self) -> bool {
        matches!(self, Field::Lemmas)
    }

    pub fn is_autocomplete(&self) -> bool {
        matches!(self, Field::Autocomplete | Field::AutocompleteLemmas)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Field::Text),
            "lemmas" | "lemma" => Ok(Field::Lemmas),
            "autocomplete" => Ok(Field::Autocomplete),
            "autocomplete_lemmas" => Ok(Field::AutocompleteLemmas),
            other => Err(SearchError::parameter(
                "field",
                other,
                "expected one of text, lemmas, autocomplete, autocomplete_lemmas",
            )),
        }
    }
}

/// Edit-distance tolerance for fuzzy term clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Fuzziness {
    #[default]
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    /// Let the engine pick based on term length.
    #[serde(rename = "AUTO")]
    Auto,
}

impl Fuzziness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Fuzziness::Zero => "0",
            Fuzziness::One => "1",
            Fuzziness::Two => "2",
            Fuzziness::Auto => "AUTO",
        }
    }
}

impl fmt::Display for Fuzziness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fuzziness {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Fuzziness::Zero),
            "1" => Ok(Fuzziness::One),
            "2" => Ok(Fuzziness::Two),
            "AUTO" | "auto" => Ok(Fuzziness::Auto),
            other => Err(SearchError::parameter(
                "fuzziness",
                other,
                "expected one of 0, 1, 2, AUTO",
            )),
        }
    }
}

/// Result ordering. Both variants sort on the passage URN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Urn,
    UrnDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Urn => "urn",
            SortOrder::UrnDesc => "urn_desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urn" => Ok(SortOrder::Urn),
            "urn_desc" => Ok(SortOrder::UrnDesc),
            other => Err(SearchError::parameter(
                "sort",
                other,
                "expected urn or urn_desc",
            )),
        }
    }
}

/// A normalized advanced-search request.
///
/// Construct with [`SearchRequest::new`] and the `with_*` builders, or parse
/// raw request parameters with [`crate::query::parse_params`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Corpus (index) identifiers, deduplicated, in selection order.
    pub corpora: Vec<String>,
    pub field: Field,
    /// Raw query text; terms are whitespace separated.
    pub query: String,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    pub fuzziness: Fuzziness,
    /// Exact phrase: forces slop 0 and ordered matching.
    pub phrase_search: bool,
    /// Proximity tolerance in tokens.
    pub slop: usize,
    pub in_order: bool,
    pub sort: SortOrder,
    /// Highlight fragment size override (autocomplete asks for wide fragments).
    pub fragment_size: Option<usize>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            corpora: Vec::new(),
            field: Field::Text,
            query: String::new(),
            page: 1,
            page_size: 10,
            fuzziness: Fuzziness::Zero,
            phrase_search: false,
            slop: 0,
            in_order: false,
            sort: SortOrder::Urn,
            fragment_size: None,
        }
    }
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_corpora<I, S>(mut self, corpora: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.corpora.clear();
        for corpus in corpora {
            let corpus = corpus.into();
            if !self.corpora.contains(&corpus) {
                self.corpora.push(corpus);
            }
        }
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.field = field;
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    pub fn with_fuzziness(mut self, fuzziness: Fuzziness) -> Self {
        self.fuzziness = fuzziness;
        self
    }

    pub fn with_slop(mut self, slop: usize) -> Self {
        self.slop = slop;
        self
    }

    pub fn with_in_order(mut self, in_order: bool) -> Self {
        self.in_order = in_order;
        self
    }

    pub fn with_phrase_search(mut self, phrase_search: bool) -> Self {
        self.phrase_search = phrase_search;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_fragment_size(mut self, fragment_size: usize) -> Self {
        self.fragment_size = Some(fragment_size);
        self
    }

    /// Whitespace-separated query terms.
    pub fn terms(&self) -> Vec<&str> {
        self.query.split_whitespace().collect()
    }

    /// True when nothing is selected, including the lone empty selection a
    /// form submits when every corpus box is cleared.
    pub fn has_no_corpora(&self) -> bool {
        self.corpora.iter().all(|c| c.trim().is_empty())
    }

    /// Slop and ordering after `phrase_search` is applied.
    pub fn effective_proximity(&self) -> (usize, bool) {
        if self.phrase_search {
            (0, true)
        } else {
            (self.slop, self.in_order)
        }
    }

    /// Offset of the first hit on the requested page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// One normalized search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Engine document id (the passage URN).
    pub id: String,
    /// Source fields exactly as stored in the index.
    pub source: Map<String, Value>,
    /// Highlighted snippets for text searches, realigned surface windows for
    /// lemma searches, empty when browsing without a query.
    pub fragments: Vec<String>,
}

/// A page of results plus the engine's total count and facet buckets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchPage {
    pub hits: Vec<Hit>,
    pub total: u64,
    /// Facet buckets, passed through from the engine unchanged.
    pub aggregations: Map<String, Value>,
}

impl SearchPage {
    /// The `([], 0, {})` answer used whenever no engine call is made.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.hits.iter().map(|h| h.id.as_str()).collect()
    }
}
