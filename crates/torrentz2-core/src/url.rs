//! URL helper functions for Torrentz2
//!
//! Provides the base endpoint and the search-URL builder.

/// Default base endpoint for the Torrentz2 index
pub const BASE_URL: &str = "https://torrentz2.nz";

/// Builds the search URL for a query and result page
///
/// URL-encodes the query term and appends the page number as a query
/// parameter.
///
/// # Arguments
/// * `base_url` - Base endpoint, without a trailing slash
/// * `query` - Search query string
/// * `page` - 1-based result page index
///
/// # Example
/// ```
/// use torrentz2_core::url::{build_search_url, BASE_URL};
/// let url = build_search_url(BASE_URL, "ubuntu iso", 2);
/// assert_eq!(url, "https://torrentz2.nz/search?q=ubuntu%20iso&page=2");
/// ```
pub fn build_search_url(base_url: &str, query: &str, page: u32) -> String {
    let encoded = urlencoding::encode(query);
    format!("{}/search?q={}&page={}", base_url, encoded, page)
}
