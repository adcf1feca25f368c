//! Upload state and pre-submit validation.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::RwSignal;

/// Whether a submit is currently in flight.
///
/// In-flight decodes are not tracked: a submit racing a pending decode
/// simply ships whatever the store holds at that moment.
#[derive(Clone, Copy, Debug, Default)]
pub struct UploadState {
    pub sending: bool,
}

/// Shared handle to the upload state, provided from the app root.
pub type UploadSignal = RwSignal<UploadState>;

/// Pre-submit validation.
///
/// Returns the user-facing complaint when the submission must not be
/// attempted; `None` means the set is good to send.
#[must_use]
pub fn reject_reason(title: &str, capture_count: usize) -> Option<&'static str> {
    if title.trim().is_empty() {
        Some("Enter the magazine title first")
    } else if capture_count == 0 {
        Some("Add at least one page")
    } else {
        None
    }
}
