//! Runtime configuration
//!
//! Read once at startup from the host page and provided through context.

use crate::shared::api_utils::{api_url, meta_content};
use leptos::prelude::*;

/// `<meta>` tag overriding the query service endpoint
pub const ENDPOINT_META: &str = "graphql-endpoint";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub graphql_endpoint: String,
    /// Purchases fetched per scroll step
    pub purchases_page_size: u32,
    /// Dropdown options fetched per request
    pub dropdown_page_size: u32,
    /// How far below the viewport the next page starts loading
    pub sentinel_root_margin: String,
}

impl AppConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            graphql_endpoint: endpoint.into(),
            purchases_page_size: 10,
            dropdown_page_size: 1000,
            sentinel_root_margin: "200px".to_string(),
        }
    }

    pub fn from_document() -> Self {
        let endpoint = resolve_endpoint(meta_content(ENDPOINT_META), || api_url("/graphql"));
        log::info!("query service endpoint: {}", endpoint);
        Self::with_endpoint(endpoint)
    }
}

fn resolve_endpoint(configured: Option<String>, fallback: impl FnOnce() -> String) -> String {
    configured
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(fallback)
}

pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

/// Hook to read the application config.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found. Call provide_app_config in App.")
}
