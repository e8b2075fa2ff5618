use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::info;

use manbaa::config::{read_config, Config};
use manbaa::debounce::DEFAULT_DELAY;
use manbaa::filters::SortBy;
use manbaa::language::Language;
use manbaa::logger::configure_logger;
use manbaa::page_context::MemoryContext;
use manbaa::paginator::LoadMore;
use manbaa::post::posts_from_json;
use manbaa::post_search::PostSearch;

/// Runs the site's search pipeline over an exported posts file, the way the
/// post-list page would.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Posts JSON file, as delivered by the data layer
    posts: PathBuf,

    /// Free-text query against title and description
    #[arg(short, long, default_value = "")]
    query: String,

    /// Inclusive lower date bound, YYYY-MM-DD
    #[arg(long, default_value = "")]
    from: String,

    /// Inclusive upper date bound, YYYY-MM-DD
    #[arg(long, default_value = "")]
    to: String,

    /// Result ordering
    #[arg(short, long, value_enum, default_value_t = SortBy::Newest)]
    sort: SortBy,

    /// Category slug ("all" shows every category)
    #[arg(short, long)]
    category: Option<String>,

    /// Site language, drives title collation. Defaults to the configured
    /// language, Arabic otherwise
    #[arg(short, long, value_enum)]
    lang: Option<Language>,

    /// Optional manbaa.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };
    configure_logger(&config).map_err(|e| anyhow::anyhow!("Error configuring logger: {}", e))?;

    let language = args
        .lang
        .or_else(|| config.defaults.language.as_deref().and_then(Language::from_code))
        .unwrap_or_default();

    let payload = fs::read_to_string(&args.posts)
        .with_context(|| format!("Could not read posts file {}", args.posts.display()))?;
    let posts = posts_from_json(&payload).context("Could not parse posts payload")?;
    info!("Loaded {} posts", posts.len());

    let delay = config
        .defaults
        .debounce_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DELAY);

    let now = Instant::now();
    let mut search = PostSearch::with_debounce_delay(MemoryContext::new("/posts"), delay);
    search.set_language(language);
    search.set_query(&args.query, now);
    search.set_date_from(&args.from);
    search.set_date_to(&args.to);
    search.set_sort(args.sort);
    search.set_category(args.category.as_deref());

    let (filtered, stats) = search.results(&posts);

    let step = config.defaults.load_more_step.unwrap_or(0);
    let window = LoadMore::from(&filtered, step);
    let visible = window.visible(0);

    for post in visible {
        println!("{}  {}", post.created_at.format("%Y-%m-%d"), post.title);
    }
    if window.has_more(0) {
        println!("... and {} more", stats.total - visible.len());
    }

    if stats.has_active_filters {
        println!("{} of {} post(s) — {}", stats.total, posts.len(), search.share_url());
    } else {
        println!("{} post(s)", stats.total);
    }

    Ok(())
}
