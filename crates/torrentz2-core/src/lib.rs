//! Torrentz2 Scraper Core Library
//!
//! Provides an async API for searching the Torrentz2 torrent index and
//! returning structured records with magnet links.
//!
//! # Overview
//!
//! This crate implements a single-flow scraping pipeline:
//! - HTTP client fetching search-results pages sequentially
//! - HTML parser extracting raw entries from result listings
//! - Label conversions turning counts, sizes and upload times into numbers
//! - Filtering (seed/peer minimums, size bounds, keyword exclusion) and
//!   stable sorting over the collected records
//!
//! # Example
//!
//! ```no_run
//! use torrentz2_core::{Result, SearchFilters, Torrentz2Scraper};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = Torrentz2Scraper::new()?;
//!
//!     let filters = SearchFilters {
//!         min_seeds: 10,
//!         sort_by: Some("seeds".to_string()),
//!         sort_order: Some("desc".to_string()),
//!         ..Default::default()
//!     };
//!
//!     // `search` never fails: on any internal error it logs a
//!     // diagnostic and returns two empty lists.
//!     let (records, magnets) = scraper.search("ubuntu iso", &filters).await;
//!
//!     for record in &records {
//!         println!("{} [{}] {} seeds", record.title, record.size, record.seeds);
//!     }
//!     for magnet in &magnets {
//!         println!("{magnet}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Failure behavior
//!
//! [`Torrentz2Scraper::search`] swallows every failure and returns empty
//! results, so "no matches" and "scrape failed" look the same to its
//! callers. Use [`Torrentz2Scraper::try_search`] when the failure cause
//! matters.

mod client;
mod convert;
mod error;
mod filter;
pub mod parser;
mod scraper;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, Torrentz2Client};

// Re-export error types
pub use error::{Result, Torrentz2Error};

// Re-export label conversions
pub use convert::{normalize_entry, parse_count, parse_relative_time, parse_size};

// Re-export filter/sort stage
pub use filter::{apply_filters, sort_records};

// Re-export parser seam
pub use parser::{EntryExtractor, ListingExtractor, parse_result_entries};

// Re-export main scraper API
pub use scraper::Torrentz2Scraper;

// Re-export data types
pub use types::{RawEntry, SearchFilters, TorrentRecord};

// Re-export URL helpers for convenience
pub use url::{BASE_URL, build_search_url};
