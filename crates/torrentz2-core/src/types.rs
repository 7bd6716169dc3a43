//! Core data types for the Torrentz2 scraper
//!
//! Contains the main data structures used throughout the library.

use serde::{Deserialize, Serialize};

/// A single torrent result from a Torrentz2 search
///
/// Keeps the raw labels as scraped alongside the numeric values derived
/// from them, so callers can display the site's own wording while
/// filtering and sorting on canonical numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentRecord {
    /// Torrent title
    pub title: String,

    /// Raw upload-time label as scraped (e.g., "2 days")
    pub uploaded: String,

    /// Upload-time label normalized to elapsed seconds
    pub uploaded_secs: u64,

    /// Raw size label as scraped (e.g., "1.5GB")
    pub size: String,

    /// Size label converted to bytes
    pub size_bytes: u64,

    /// Number of participants with a complete copy
    pub seeds: u64,

    /// Number of participants with an incomplete copy
    pub peers: u64,

    /// Magnet URI for the torrent
    pub magnet: String,
}

/// One result block as extracted from the page, before normalization
///
/// All fields are the raw strings found in the markup. This is the
/// payload of the [`EntryExtractor`](crate::parser::EntryExtractor) seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Torrent title text
    pub title: String,
    /// Upload-time label (e.g., "2 days")
    pub uploaded: String,
    /// Size label (e.g., "1.5GB")
    pub size: String,
    /// Seed-count label (e.g., "1.3K")
    pub seeds: String,
    /// Peer-count label
    pub peers: String,
    /// Magnet URI
    pub magnet: String,
}

/// Optional filter and sort settings for a search
///
/// All fields have permissive defaults: one page starting at page 1,
/// no minimums, no size bounds, no exclusions, no sort.
///
/// `sort_by` and `sort_order` are free-form strings; unrecognized values
/// are tolerated (the list is left unsorted) rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    /// First result page to fetch (1-based)
    pub page: u32,

    /// Minimum seed count to keep a record
    pub min_seeds: u64,

    /// Minimum peer count to keep a record
    pub min_peers: u64,

    /// Number of result pages to fetch; 0 behaves as 1
    pub max_pages: u32,

    /// Lower size bound as a human-readable label (e.g., "700MB")
    pub min_size: Option<String>,

    /// Upper size bound as a human-readable label (e.g., "2GB")
    pub max_size: Option<String>,

    /// Case-insensitive substrings that disqualify a title
    pub exclude_keywords: Vec<String>,

    /// Sort field: "seeds", "peers" or "size"
    pub sort_by: Option<String>,

    /// Sort direction: "desc" for descending, anything else ascending
    pub sort_order: Option<String>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            page: 1,
            min_seeds: 0,
            min_peers: 0,
            max_pages: 1,
            min_size: None,
            max_size: None,
            exclude_keywords: Vec::new(),
            sort_by: None,
            sort_order: None,
        }
    }
}
