use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectio::{
    highlight_passage, parse_params, realign_text, suggest, window, QueryBuilder, SearchConfig,
    SearchRequest, Searcher, SnapshotEngine,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, SearchArgs};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lectio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = SearchConfig::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Search {
            args,
            query,
            phrase,
            sort,
            page,
            per_page,
            basic,
            json,
        } => {
            let request = base_request(&args, &query)
                .with_phrase_search(phrase)
                .with_sort(sort)
                .with_page(page, per_page.unwrap_or(config.per_page));
            let searcher = replay_searcher(&args, config)?;
            let result = if basic {
                searcher.basic_search(&request)?
            } else {
                searcher.advanced_search(&request)?
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let config = searcher.config();
                let first = request.offset().saturating_add(1);
                display::print_page(&result, first, &config.pre_tag, &config.post_tag);
            }
        }
        Commands::Query { params, basic } => {
            let pairs = params
                .iter()
                .map(|p| {
                    p.split_once('=')
                        .with_context(|| format!("expected key=value, got {:?}", p))
                })
                .collect::<Result<Vec<_>>>()?;
            let request = parse_params(pairs, &config)?;
            let builder = QueryBuilder::new(&config);
            let query = if basic {
                builder.build_basic(&request)?
            } else {
                builder.build(&request)?
            };
            let (indices, body) = query.into_parts();
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                "index": indices,
                "body": body,
            }))?);
        }
        Commands::Window {
            fragment,
            before,
            after,
        } => {
            println!(
                "{}",
                window(&fragment, before, after, &config.pre_tag, &config.post_tag)
            );
        }
        Commands::Realign {
            lemmas,
            surface,
            slop,
            in_order,
            query,
        } => {
            for sentence in realign_text(&lemmas, &surface, &query, slop, in_order) {
                println!("{}", sentence);
            }
        }
        Commands::Highlight { markup, sentences } => {
            let raw = fs::read_to_string(&markup)
                .with_context(|| format!("reading {}", markup.display()))?;
            println!("{}", highlight_passage(&raw, &sentences));
        }
        Commands::Suggest { args, partial } => {
            let request = base_request(&args, "");
            let searcher = replay_searcher(&args, config)?;
            for completion in suggest(&searcher, &partial, &request) {
                println!("{}", completion);
            }
        }
    }
    Ok(())
}

fn base_request(args: &SearchArgs, query: &str) -> SearchRequest {
    SearchRequest::new(query)
        .with_corpora(args.corpora.iter().flat_map(|c| c.split('+')))
        .with_field(args.field)
        .with_fuzziness(args.fuzziness)
        .with_slop(args.slop)
        .with_in_order(args.in_order)
}

fn replay_searcher(args: &SearchArgs, config: SearchConfig) -> Result<Searcher<SnapshotEngine>> {
    if !args.snapshots.is_dir() {
        bail!("snapshot directory {} does not exist", args.snapshots.display());
    }
    let engine = SnapshotEngine::load(&args.snapshots)?;
    if engine.is_empty() {
        tracing::warn!(dir = %args.snapshots.display(), "no snapshots found; every search will be empty");
    }
    Ok(Searcher::new(config, engine))
}
