//! Filtering and sorting of normalized torrent records

use crate::convert::parse_size;
use crate::types::{SearchFilters, TorrentRecord};

/// Applies the active filters as a conjunction
///
/// A record survives iff no excluded keyword appears as a
/// case-insensitive substring of its title, its seed and peer counts
/// meet the minimums, and its size falls within whichever bounds are
/// given. Size bounds are parsed with the lenient size parser, so an
/// unparseable bound becomes 0 bytes.
///
/// Relative input order is preserved.
pub fn apply_filters(records: Vec<TorrentRecord>, filters: &SearchFilters) -> Vec<TorrentRecord> {
    let min_bytes = filters.min_size.as_deref().map(parse_size);
    let max_bytes = filters.max_size.as_deref().map(parse_size);
    let excluded: Vec<String> = filters
        .exclude_keywords
        .iter()
        .map(|kw| kw.to_lowercase())
        .collect();

    records
        .into_iter()
        .filter(|record| {
            let title = record.title.to_lowercase();
            !excluded.iter().any(|kw| title.contains(kw.as_str()))
                && record.seeds >= filters.min_seeds
                && record.peers >= filters.min_peers
                && min_bytes.is_none_or(|min| record.size_bytes >= min)
                && max_bytes.is_none_or(|max| record.size_bytes <= max)
        })
        .collect()
}

/// Sorts records in place by the requested field
///
/// Recognized fields are "seeds", "peers" and "size" (matched
/// case-insensitively); anything else leaves the list untouched. A
/// `sort_order` of exactly "desc" sorts descending; any other value
/// sorts ascending. The sort is stable, so equal keys keep their
/// encounter order in both directions.
pub fn sort_records(records: &mut [TorrentRecord], sort_by: Option<&str>, sort_order: Option<&str>) {
    let Some(field) = sort_by else {
        return;
    };

    let key: fn(&TorrentRecord) -> u64 = match field.to_lowercase().as_str() {
        "seeds" => |r| r.seeds,
        "peers" => |r| r.peers,
        "size" => |r| r.size_bytes,
        _ => return,
    };

    if sort_order == Some("desc") {
        records.sort_by(|a, b| key(b).cmp(&key(a)));
    } else {
        records.sort_by(|a, b| key(a).cmp(&key(b)));
    }
}
