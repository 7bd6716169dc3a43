//! Error types for the Torrentz2 scraper
//!
//! One enum covers the three failure classes the pipeline distinguishes:
//! transport/HTTP-status failures, unexpected page structure, and
//! malformed upload-time labels.

use thiserror::Error;

/// Error type for all Torrentz2 scraper operations
///
/// Count and size labels never produce errors (they fall back to 0);
/// everything here aborts the whole search call it occurs in.
#[derive(Error, Debug)]
pub enum Torrentz2Error {
    /// HTTP request failed (transport error or non-2xx status)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The results page did not have the expected structure.
    /// Usually means the site's markup changed.
    #[error("failed to parse results page: {0}")]
    ParseError(String),

    /// An upload-time label did not match `<quantity> <unit>`
    #[error("invalid upload-time label: {0:?}")]
    InvalidTimeLabel(String),
}

/// Result type alias for Torrentz2 operations
pub type Result<T> = std::result::Result<T, Torrentz2Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse_error() {
        let error = Torrentz2Error::ParseError("result block missing title link".to_string());
        assert_eq!(
            error.to_string(),
            "failed to parse results page: result block missing title link"
        );
    }

    #[test]
    fn test_error_display_invalid_time_label() {
        let error = Torrentz2Error::InvalidTimeLabel("xyz".to_string());
        assert_eq!(error.to_string(), "invalid upload-time label: \"xyz\"");
    }

    #[test]
    fn test_error_display_quotes_whitespace() {
        // The Debug formatting keeps leading/trailing whitespace visible
        let error = Torrentz2Error::InvalidTimeLabel(" 2 days".to_string());
        assert_eq!(error.to_string(), "invalid upload-time label: \" 2 days\"");
    }
}
