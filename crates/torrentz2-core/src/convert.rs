//! Label conversions for Torrentz2 listings
//!
//! Turns the raw strings found in result blocks into canonical numbers:
//! seed/peer counts (with a `K` suffix for thousands), file sizes with
//! unit suffixes, and relative upload-time labels.
//!
//! Count and size parsing are deliberately lenient and fall back to 0 —
//! a zero is a safe value for threshold filtering. Upload-time parsing
//! is strict and errors instead, since a malformed label there means the
//! site's format changed and is worth surfacing.

use regex::Regex;

use crate::error::{Result, Torrentz2Error};
use crate::types::{RawEntry, TorrentRecord};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_WEEK: u64 = 7 * SECS_PER_DAY;
// Months and years are approximations, not calendar-aware
const SECS_PER_MONTH: u64 = 30 * SECS_PER_DAY;
const SECS_PER_YEAR: u64 = 365 * SECS_PER_DAY;

/// Converts a seed/peer count label to an integer
///
/// Handles the `K` suffix Torrentz2 uses for thousands: `"1.3K"`
/// becomes 1300 (truncated). Anything that is neither a bare integer
/// nor a `K`-suffixed decimal yields 0.
///
/// # Example
/// ```
/// use torrentz2_core::parse_count;
/// assert_eq!(parse_count("1.3K"), 1300);
/// assert_eq!(parse_count("42"), 42);
/// assert_eq!(parse_count("abc"), 0);
/// ```
pub fn parse_count(label: &str) -> u64 {
    let label = label.trim();
    if let Some(magnitude) = label.strip_suffix('K') {
        let Ok(value) = magnitude.parse::<f64>() else {
            return 0;
        };
        (value * 1000.0) as u64
    } else {
        label.parse::<u64>().unwrap_or(0)
    }
}

/// Converts a size label to bytes
///
/// Accepts a decimal magnitude followed by a unit in B, KB, MB, GB or
/// TB (case-insensitive, whitespace before the unit allowed), with
/// binary multipliers (1 KB = 1024 B). An unrecognized unit or a
/// non-numeric magnitude yields 0.
///
/// # Example
/// ```
/// use torrentz2_core::parse_size;
/// assert_eq!(parse_size("1.5GB"), 1_610_612_736);
/// assert_eq!(parse_size("100MB"), 104_857_600);
/// assert_eq!(parse_size("bad"), 0);
/// ```
pub fn parse_size(label: &str) -> u64 {
    let label = label.trim();
    let unit_start = label
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(label.len());
    let (magnitude, unit) = label.split_at(unit_start);

    let Ok(value) = magnitude.trim().parse::<f64>() else {
        return 0;
    };

    let multiplier: u64 = match unit.to_ascii_uppercase().as_str() {
        "B" => 1,
        "KB" => 1 << 10,
        "MB" => 1 << 20,
        "GB" => 1 << 30,
        "TB" => 1 << 40,
        _ => return 0,
    };

    (value * multiplier as f64) as u64
}

/// Converts a relative upload-time label to elapsed seconds
///
/// The label must be `<quantity> <unit>` where the quantity is an
/// integer or the words "a"/"an" (meaning 1) and the unit is one of
/// second, minute, hour, day, week, month or year, optionally
/// pluralized. A month counts as 30 days and a year as 365 days.
///
/// # Errors
/// Returns [`Torrentz2Error::InvalidTimeLabel`] for any other shape.
///
/// # Example
/// ```
/// use torrentz2_core::parse_relative_time;
/// assert_eq!(parse_relative_time("a day").unwrap(), 86_400);
/// assert_eq!(parse_relative_time("2 days").unwrap(), 172_800);
/// assert!(parse_relative_time("xyz").is_err());
/// ```
pub fn parse_relative_time(label: &str) -> Result<u64> {
    let invalid = || Torrentz2Error::InvalidTimeLabel(label.to_string());

    let Ok(re) = Regex::new(r"^(a|an|\d+)\s+(second|minute|hour|day|week|month|year)s?$") else {
        return Err(invalid());
    };

    let normalized = label.trim().to_ascii_lowercase();
    let caps = re.captures(&normalized).ok_or_else(invalid)?;

    let quantity = match &caps[1] {
        "a" | "an" => 1,
        digits => digits.parse::<u64>().map_err(|_| invalid())?,
    };

    let unit_secs = match &caps[2] {
        "second" => 1,
        "minute" => SECS_PER_MINUTE,
        "hour" => SECS_PER_HOUR,
        "day" => SECS_PER_DAY,
        "week" => SECS_PER_WEEK,
        "month" => SECS_PER_MONTH,
        "year" => SECS_PER_YEAR,
        _ => return Err(invalid()),
    };

    Ok(quantity.saturating_mul(unit_secs))
}

/// Builds a [`TorrentRecord`] from a raw entry
///
/// Applies the three label conversions, keeping the raw labels alongside
/// the derived numbers.
///
/// # Errors
/// Returns [`Torrentz2Error::InvalidTimeLabel`] if the upload-time label
/// is malformed; count and size labels never fail.
pub fn normalize_entry(entry: RawEntry) -> Result<TorrentRecord> {
    let uploaded_secs = parse_relative_time(&entry.uploaded)?;
    Ok(TorrentRecord {
        title: entry.title,
        uploaded: entry.uploaded,
        uploaded_secs,
        size_bytes: parse_size(&entry.size),
        size: entry.size,
        seeds: parse_count(&entry.seeds),
        peers: parse_count(&entry.peers),
        magnet: entry.magnet,
    })
}
