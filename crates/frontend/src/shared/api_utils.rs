//! API utilities for frontend-backend communication
//!
//! Provides helper functions for locating the query service.

/// Port the query service listens on when no endpoint is configured
pub const API_PORT: u16 = 4000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the query service.
///
/// # Returns
/// - API base URL like "http://localhost:4000" or "https://example.com:4000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname, API_PORT)
}

fn base_url(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/graphql");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Content of `<meta name="...">` in the host page, if present and non-blank
pub fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element
        .get_attribute("content")
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}
