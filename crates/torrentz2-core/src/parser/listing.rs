//! Result-listing parser for Torrentz2
//!
//! Each result on a Torrentz2 search page is a `<dl>` block: the title
//! is an anchor opening in a new tab, the upload time is the span
//! carrying a descriptive `title` attribute, size/seeds/peers are the
//! third through fifth spans in document order, and the magnet anchor
//! sits inside the first span.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, Torrentz2Error};
use crate::parser::EntryExtractor;
use crate::types::RawEntry;

/// Parses a search-results page into raw entries
///
/// # Arguments
/// * `html` - Raw HTML string of one results page
///
/// # Returns
/// The raw entries in document order; empty if the page holds no
/// result blocks.
///
/// # Errors
/// Returns `ParseError` if a result block is missing a required field —
/// that signals the site's markup changed, not a per-entry anomaly.
/// A block without a magnet anchor is skipped, not errored.
pub fn parse_result_entries(html: &str) -> Result<Vec<RawEntry>> {
    let document = Html::parse_document(html);

    let block_selector = selector("dl")?;
    let title_selector = selector(r#"a[target="_blank"]"#)?;
    let uploaded_selector = selector("span[title]")?;
    let span_selector = selector("span")?;
    let magnet_selector = selector("a[href]")?;

    let mut entries = Vec::new();

    for block in document.select(&block_selector) {
        let title = required_text(&block, &title_selector, "title link")?;
        let uploaded = required_text(&block, &uploaded_selector, "upload-time span")?;

        let spans: Vec<ElementRef> = block.select(&span_selector).collect();
        let size = span_text(&spans, 2, "size column")?;
        let seeds = span_text(&spans, 3, "seeds column")?;
        let peers = span_text(&spans, 4, "peers column")?;

        // The magnet anchor lives in the first span. A block without one
        // is not a torrent row; skip it. Required-field checks above run
        // first so a structurally broken block still errors.
        let Some(magnet) = spans
            .first()
            .and_then(|span| span.select(&magnet_selector).next())
            .and_then(|anchor| anchor.value().attr("href"))
        else {
            continue;
        };

        entries.push(RawEntry {
            title,
            uploaded,
            size,
            seeds,
            peers,
            magnet: magnet.to_string(),
        });
    }

    Ok(entries)
}

/// Production extractor for the Torrentz2 result listing
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingExtractor;

impl EntryExtractor for ListingExtractor {
    fn entries(&self, html: &str) -> Result<Vec<RawEntry>> {
        parse_result_entries(html)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| Torrentz2Error::ParseError(format!("invalid selector {css:?}: {e:?}")))
}

fn required_text(block: &ElementRef, sel: &Selector, what: &str) -> Result<String> {
    block
        .select(sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or_else(|| Torrentz2Error::ParseError(format!("result block missing {what}")))
}

fn span_text(spans: &[ElementRef], index: usize, what: &str) -> Result<String> {
    spans
        .get(index)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or_else(|| Torrentz2Error::ParseError(format!("result block missing {what}")))
}
