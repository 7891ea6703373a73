//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use super::fetch_error::FetchError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Name of the `<meta>` tag that may point the client at a different API origin.
pub const API_BASE_META: &str = "storefront-api-base";

/// Get the base URL for API requests
///
/// Reads `<meta name="storefront-api-base" content="...">` from the page shell.
///
/// # Returns
/// - Configured base like "https://shop.example.com" (trailing `/` removed)
/// - Empty string when the tag is absent, so requests stay same-origin
pub fn api_base() -> String {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return String::new();
    };
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    match document.query_selector(&selector) {
        Ok(Some(meta)) => normalize_base(&meta.get_attribute("content").unwrap_or_default()),
        _ => String::new(),
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/products/3");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

/// GET a JSON document and decode it into `T`.
///
/// Non-2xx responses become [`FetchError::Status`] without touching the body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}
