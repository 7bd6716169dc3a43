//! Command-line search for the Torrentz2 torrent index.
//!
//! Every `SearchFilters` field is exposed as a flag. Output is a human
//! listing by default, JSON with `--json`, or bare magnet links with
//! `--magnets-only`. Diagnostics go through `tracing`; set `RUST_LOG`
//! (e.g. `RUST_LOG=torrentz2_core=debug`) to see per-page fetches.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use torrentz2_core::{ClientConfig, SearchFilters, Torrentz2Scraper};

#[derive(Parser, Debug)]
#[command(name = "torrentz2", version, about = "Search the Torrentz2 index from the command line", long_about = None)]
struct Args {
    /// Search query
    query: String,

    /// First result page to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Number of result pages to fetch
    #[arg(long, default_value_t = 1)]
    max_pages: u32,

    /// Keep only results with at least this many seeds
    #[arg(long, default_value_t = 0)]
    min_seeds: u64,

    /// Keep only results with at least this many peers
    #[arg(long, default_value_t = 0)]
    min_peers: u64,

    /// Lower size bound (e.g. "700MB")
    #[arg(long)]
    min_size: Option<String>,

    /// Upper size bound (e.g. "2GB")
    #[arg(long)]
    max_size: Option<String>,

    /// Drop results whose title contains this keyword (repeatable)
    #[arg(long = "exclude", value_name = "KEYWORD")]
    exclude_keywords: Vec<String>,

    /// Sort field: seeds, peers or size
    #[arg(long)]
    sort_by: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long)]
    sort_order: Option<String>,

    /// Print results as JSON
    #[arg(long, conflicts_with = "magnets_only")]
    json: bool,

    /// Print only the magnet links
    #[arg(long)]
    magnets_only: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

impl Args {
    fn filters(&self) -> SearchFilters {
        SearchFilters {
            page: self.page,
            min_seeds: self.min_seeds,
            min_peers: self.min_peers,
            max_pages: self.max_pages,
            min_size: self.min_size.clone(),
            max_size: self.max_size.clone(),
            exclude_keywords: self.exclude_keywords.clone(),
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let scraper = Torrentz2Scraper::with_config(ClientConfig {
        timeout_secs: args.timeout,
        ..ClientConfig::default()
    })?;

    // The CLI wants the failure cause on stderr, so it uses the
    // explicit form rather than the never-failing facade.
    let (records, magnets) = scraper.try_search(&args.query, &args.filters()).await?;

    if args.magnets_only {
        for magnet in &magnets {
            println!("{magnet}");
        }
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        println!("No results for {:?}", args.query);
    } else {
        for record in &records {
            println!(
                "{:>6} seeds  {:>6} peers  {:>10}  {:>10}  {}",
                record.seeds, record.peers, record.size, record.uploaded, record.title
            );
            println!("        {}", record.magnet);
        }
        println!("{} result(s)", records.len());
    }

    Ok(())
}
