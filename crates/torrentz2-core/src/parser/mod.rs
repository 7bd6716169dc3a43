//! HTML parsers for Torrentz2
//!
//! The page-layout assumptions live behind the [`EntryExtractor`] trait
//! so the rest of the pipeline never touches markup directly and tests
//! can substitute a stub extractor.

pub mod listing;

pub use listing::{ListingExtractor, parse_result_entries};

use crate::error::Result;
use crate::types::RawEntry;

/// Capability interface over result-page markup
///
/// Implementations turn one page's HTML into raw entries. The
/// production implementation is [`ListingExtractor`]; tests can supply
/// their own to exercise the pipeline without real markup.
pub trait EntryExtractor {
    /// Extracts the raw result entries from one page of HTML
    ///
    /// An empty vector means the page holds no results (end of
    /// pagination), which is not an error.
    fn entries(&self, html: &str) -> Result<Vec<RawEntry>>;
}
