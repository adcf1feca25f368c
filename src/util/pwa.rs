//! Installable-app registration.

use wasm_bindgen_futures::JsFuture;

use crate::util::js;

const SERVICE_WORKER_URL: &str = "./service-worker.js";

/// Register the page's service worker.
///
/// Failure is logged and otherwise ignored; the page works without it.
pub fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let container = window.navigator().service_worker();
    leptos::task::spawn_local(async move {
        if let Err(err) = JsFuture::from(container.register(SERVICE_WORKER_URL)).await {
            log::warn!(
                "service worker registration failed: {}",
                js::error_message(&err)
            );
        }
    });
}
