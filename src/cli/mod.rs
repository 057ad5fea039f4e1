// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lectio command-line interface.
//!
//! `search` and `suggest` run the full pipeline against a directory of
//! recorded snapshots, so they work without a search cluster. `query`
//! prints the engine body for a set of form parameters. `window`, `realign`
//! and `highlight` expose the individual highlighting stages.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use lectio::{Field, Fuzziness, SortOrder};

#[derive(Parser)]
#[command(
    name = "lectio",
    about = "Proximity search and passage highlighting for lemmatized corpora",
    version
)]
pub struct Cli {
    /// JSON configuration file (environment variables override it)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Form parameters shared by `search` and `suggest`.
#[derive(Args)]
pub struct SearchArgs {
    /// Directory of recorded engine snapshots to answer from
    #[arg(long)]
    pub snapshots: PathBuf,

    /// Corpus to search (repeatable)
    #[arg(long = "corpus", required = true)]
    pub corpora: Vec<String>,

    /// Field to search: text, lemmas, autocomplete, autocomplete_lemmas
    #[arg(long, default_value = "text")]
    pub field: Field,

    /// Edit distance per term: 0, 1, 2 or AUTO
    #[arg(long, default_value = "0")]
    pub fuzziness: Fuzziness,

    /// Tokens allowed between terms
    #[arg(long, default_value = "0")]
    pub slop: usize,

    /// Terms must appear in query order
    #[arg(long)]
    pub in_order: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an advanced search against recorded snapshots
    Search {
        #[command(flatten)]
        args: SearchArgs,

        /// Search terms, whitespace separated
        query: String,

        /// Exact phrase (slop 0, in order)
        #[arg(long)]
        phrase: bool,

        /// Result order: urn or urn_desc
        #[arg(long, default_value = "urn")]
        sort: SortOrder,

        #[arg(long, default_value = "1")]
        page: usize,

        /// Hits per page (defaults to the configured page size)
        #[arg(long)]
        per_page: Option<usize>,

        /// Use the basic (exact span) query instead
        #[arg(long)]
        basic: bool,

        /// Print the page as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print the engine request body for form parameters
    ///
    /// Parameters are `key=value` pairs as a search form submits them,
    /// e.g. `corpus=nt+tlg0527 field=lemmas q="en arche" slop=2`.
    Query {
        params: Vec<String>,

        /// Build the basic (exact span) query instead
        #[arg(long)]
        basic: bool,
    },

    /// Trim a highlighted fragment to the context around its highlights
    Window {
        fragment: String,

        /// Characters kept before the first highlight
        #[arg(long, default_value = "30")]
        before: usize,

        /// Characters kept after the last highlight
        #[arg(long, default_value = "30")]
        after: usize,
    },

    /// Project lemma matches back onto the surface text
    Realign {
        /// Lemma stream
        #[arg(long)]
        lemmas: String,

        /// Surface text the lemmas were derived from
        #[arg(long)]
        surface: String,

        #[arg(long, default_value = "0")]
        slop: usize,

        #[arg(long)]
        in_order: bool,

        query: String,
    },

    /// Mark matched sentences in rendered passage markup
    Highlight {
        /// File containing the passage markup
        #[arg(long)]
        markup: PathBuf,

        /// Sentence to mark (repeatable)
        #[arg(long = "sentence")]
        sentences: Vec<String>,
    },

    /// Complete a partial word from recorded snapshots
    Suggest {
        #[command(flatten)]
        args: SearchArgs,

        partial: String,
    },
}
