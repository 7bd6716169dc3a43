//! Main scraper API for Torrentz2
//!
//! Wires the fetch, parse, normalize and filter/sort stages together
//! behind a two-layer search API: `try_search` reports failures
//! explicitly, `search` never fails and returns empty results instead.

use tracing::warn;

use crate::client::{ClientConfig, Torrentz2Client};
use crate::convert::normalize_entry;
use crate::error::Result;
use crate::filter::{apply_filters, sort_records};
use crate::parser::{EntryExtractor, ListingExtractor};
use crate::types::{SearchFilters, TorrentRecord};

/// Main scraper API for the Torrentz2 index
///
/// Owns the HTTP client and an entry extractor. Pages are fetched
/// strictly sequentially; filtering and sorting run once over the
/// full accumulated list.
pub struct Torrentz2Scraper {
    client: Torrentz2Client,
    extractor: Box<dyn EntryExtractor + Send + Sync>,
}

impl Torrentz2Scraper {
    /// Create a new scraper with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new scraper with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_extractor(config, Box::new(ListingExtractor))
    }

    /// Create a new scraper with a custom entry extractor
    ///
    /// The extractor owns all page-layout assumptions; substituting it
    /// lets tests drive the pipeline without real Torrentz2 markup.
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_extractor(
        config: ClientConfig,
        extractor: Box<dyn EntryExtractor + Send + Sync>,
    ) -> Result<Self> {
        let client = Torrentz2Client::with_config(config)?;
        Ok(Self { client, extractor })
    }

    /// Search for torrents, reporting failures explicitly
    ///
    /// Fetches up to `max_pages` result pages starting at `page`,
    /// stopping early when a page yields no entries (end of results).
    /// The whole call is atomic: any failure on any page discards
    /// everything already collected.
    ///
    /// # Returns
    /// The filtered, optionally sorted records, paired with their
    /// magnet links in the same order.
    ///
    /// # Errors
    /// - `HttpError` on transport failure or a non-2xx status
    /// - `ParseError` if a page's markup lacks the expected structure
    /// - `InvalidTimeLabel` if an upload-time label is malformed
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> torrentz2_core::Result<()> {
    /// use torrentz2_core::{SearchFilters, Torrentz2Scraper};
    /// let scraper = Torrentz2Scraper::new()?;
    /// let filters = SearchFilters {
    ///     min_seeds: 10,
    ///     sort_by: Some("seeds".to_string()),
    ///     sort_order: Some("desc".to_string()),
    ///     ..Default::default()
    /// };
    /// let (records, magnets) = scraper.try_search("ubuntu", &filters).await?;
    /// for record in &records {
    ///     println!("{} ({} seeds)", record.title, record.seeds);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn try_search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<(Vec<TorrentRecord>, Vec<String>)> {
        // A zero page budget still fetches one page
        let page_budget = filters.max_pages.max(1);
        let mut records = Vec::new();

        for page in filters.page..filters.page + page_budget {
            let html = self.client.fetch_results_page(query, page).await?;
            let entries = self.extractor.entries(&html)?;

            // An empty page means the results ran out; stop paginating
            if entries.is_empty() {
                break;
            }

            for entry in entries {
                records.push(normalize_entry(entry)?);
            }
        }

        let mut records = apply_filters(records, filters);
        sort_records(
            &mut records,
            filters.sort_by.as_deref(),
            filters.sort_order.as_deref(),
        );

        let magnets = records.iter().map(|r| r.magnet.clone()).collect();
        Ok((records, magnets))
    }

    /// Search for torrents, never failing
    ///
    /// Wraps [`try_search`](Self::try_search): on any internal failure
    /// it emits a diagnostic and returns two empty sequences. An empty
    /// result therefore means either "no matches" or "the scrape
    /// failed" — callers that need to tell them apart should use
    /// `try_search`.
    pub async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> (Vec<TorrentRecord>, Vec<String>) {
        match self.try_search(query, filters).await {
            Ok(results) => results,
            Err(error) => {
                warn!(query, %error, "search failed, returning empty results");
                (Vec::new(), Vec::new())
            }
        }
    }
}
