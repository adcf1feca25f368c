//! Upload endpoint selection.
//!
//! The endpoint is an explicit, page-supplied value: a
//! `<meta name="pagesnap-api-base">` tag in the host document. When the tag
//! is absent or blank, loopback hosts fall back to the local development
//! backend and every other host falls back to same-origin relative
//! requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use wasm_bindgen::JsCast;

/// Name of the meta tag carrying the configured API base.
pub const API_BASE_META: &str = "pagesnap-api-base";

/// Development backend used on loopback hosts without explicit
/// configuration.
pub const DEV_API_BASE: &str = "http://localhost:8000";

/// Resolve the API base from the configured value and the page hostname.
///
/// An empty result means same-origin: request paths are used as-is,
/// relative to the page.
#[must_use]
pub fn resolve_api_base(configured: Option<&str>, hostname: &str) -> String {
    if let Some(value) = configured {
        let value = value.trim().trim_end_matches('/');
        if !value.is_empty() {
            return value.to_owned();
        }
    }
    if is_loopback(hostname) {
        DEV_API_BASE.to_owned()
    } else {
        String::new()
    }
}

fn is_loopback(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1" || hostname == "[::1]"
}

/// Read the API base for this page from the live document.
#[must_use]
pub fn api_base() -> String {
    let configured = meta_content(API_BASE_META);
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    resolve_api_base(configured.as_deref(), &hostname)
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name='{name}']"))
        .ok()
        .flatten()?;
    let meta: web_sys::HtmlMetaElement = element.dyn_into().ok()?;
    Some(meta.content())
}
