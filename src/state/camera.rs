//! Camera state: the live stream, if one is open.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use leptos::prelude::{LocalStorage, RwSignal};
use web_sys::MediaStream;

/// Whether a camera stream is attached to the preview, and which one.
///
/// The stream is the only handle onto the acquired hardware; closing the
/// camera must take it out of here and stop its tracks.
#[derive(Debug, Clone, Default)]
pub struct CameraState {
    pub stream: Option<MediaStream>,
}

impl CameraState {
    /// True while a stream is attached to the preview.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

/// Shared handle to the camera state, provided from the app root.
pub type CameraSignal = RwSignal<CameraState, LocalStorage>;
