//! API utilities for talking to the deals service
//!
//! Adapters follow one convention: `Result<T, String>` where the error is a
//! human-readable description of what went wrong on the wire.

use crate::shared::config::app_config;

/// Base URL of the deals API, e.g. "http://localhost:8000/api"
pub fn api_base() -> String {
    app_config().api.base_url.clone()
}

/// Join a base URL and an API path ("/deals", "/scrape/import", ...)
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("http://localhost:8000/api/", "/deals"), "http://localhost:8000/api/deals");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Append a serialized query string, if there is one
pub fn with_query(url: String, query: &str) -> String {
    if query.is_empty() {
        url
    } else {
        format!("{}?{}", url, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_slashes() {
        assert_eq!(api_url("http://h/api", "/deals"), "http://h/api/deals");
        assert_eq!(api_url("http://h/api/", "deals"), "http://h/api/deals");
        assert_eq!(api_url("http://h/api/", "/deals/top"), "http://h/api/deals/top");
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("http://h/deals".into(), ""), "http://h/deals");
        assert_eq!(
            with_query("http://h/deals".into(), "limit=10"),
            "http://h/deals?limit=10"
        );
    }
}
