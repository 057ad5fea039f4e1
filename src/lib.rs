//! Span-proximity search and lemma-aware highlighting for corpus search.
//!
//! This crate sits between a search form and a full-text engine. It turns
//! form parameters into span-proximity engine queries, normalizes what comes
//! back, and produces the highlighted fragments a results page shows: trimmed
//! windows around engine highlights for text searches, and surface text
//! projected from lemma positions for lemma searches. A separate stage marks
//! matched sentences inside a fully rendered passage.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ query::params│────▶│query::builder│────▶│    engine    │
//! │(SearchRequest│     │ (EngineQuery)│     │(SearchEngine,│
//! │  from k=v)   │     │              │     │  snapshots)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!        ┌─────────────────────────────────────────┘
//!        ▼
//! ┌──────────────┐     ┌──────────────────────────────────┐
//! │   results    │────▶│ highlight::window (text fields)  │
//! │  (Hit, page) │────▶│ highlight::realign (lemma field) │
//! └──────────────┘     └──────────────────────────────────┘
//!
//! highlight::passage + highlight::markup: matched sentences in rendered markup
//! suggest: completions on top of `Searcher`
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use lectio::{Searcher, SearchConfig, SearchRequest, Field};
//!
//! let searcher = Searcher::new(SearchConfig::default(), my_engine);
//! let request = SearchRequest::new("en arche")
//!     .with_corpora(["nt"])
//!     .with_field(Field::Lemmas)
//!     .with_slop(2);
//! let page = searcher.advanced_search(&request)?;
//! for hit in &page.hits {
//!     println!("{}: {:?}", hit.id, hit.fragments);
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod query;
pub mod results;
pub mod searcher;
pub mod suggest;
mod types;
pub mod utils;

#[doc(hidden)]
pub mod testing;

pub use config::{SearchConfig, POST_TAG, PRE_TAG};
pub use engine::snapshot::{request_signature, Snapshot, SnapshotEngine, SnapshotRecorder};
pub use engine::{EngineResponse, FnEngine, RawHit, SearchEngine};
pub use error::{Result, SearchError};
pub use highlight::{
    highlight_passage, realign, realign_text, window, HighlightClasses, Passage,
    PassageHighlighter,
};
pub use query::{build_basic_query, build_query, parse_params, EngineQuery, QueryBuilder};
pub use results::{normalize, ResultNormalizer};
pub use searcher::Searcher;
pub use suggest::{extract_suggestions, suggest};
pub use types::{Field, Fuzziness, Hit, SearchPage, SearchRequest, SortOrder};
