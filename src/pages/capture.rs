//! The capture page — the whole app on one screen.

use leptos::prelude::*;

use crate::components::camera_panel::CameraPanel;
use crate::components::status_log::StatusLog;
use crate::components::thumb_grid::ThumbGrid;
use crate::components::upload_form::UploadForm;

/// Single-screen layout: acquisition controls, pending thumbnails, the
/// upload form, and the activity log.
#[component]
pub fn CapturePage() -> impl IntoView {
    view! {
        <main class="capture-page">
            <header class="capture-page__header">
                <h1>"PageSnap"</h1>
                <p class="capture-page__tagline">
                    "Scan magazine pages and send them off for processing."
                </p>
            </header>
            <CameraPanel/>
            <ThumbGrid/>
            <UploadForm/>
            <StatusLog/>
        </main>
    }
}
