//! API utilities for frontend-backend communication
//!
//! The backend serves the bundle itself, so requests go to the page's own origin.

use contracts::shared::error::ErrorResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page, like "http://localhost:8080"
/// - Empty string if window is not available (relative URLs still work)
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/artists");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET `url` and decode the JSON body.
///
/// Non-2xx responses are decoded as [`ErrorResponse`] so the server's status and
/// message reach the page unchanged; transport and decode failures become a 500.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ErrorResponse> {
    let response = Request::get(url).send().await.map_err(|e| {
        log::error!("Request failed: {} ({})", url, e);
        ErrorResponse::from_status(500)
    })?;

    if !response.ok() {
        let status = response.status();
        return Err(response
            .json::<ErrorResponse>()
            .await
            .unwrap_or_else(|_| ErrorResponse::from_status(status)));
    }

    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to parse response: {} ({})", url, e);
        ErrorResponse::from_status(500)
    })
}
