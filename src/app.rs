//! Root application component and shared context wiring.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::capture::CapturePage;
use crate::state::camera::CameraState;
use crate::state::captures::CapturesState;
use crate::state::log::ActivityLog;
use crate::state::upload::UploadState;

/// Root component.
///
/// Every piece of shared state is a context-provided signal constructed
/// here; nothing else on the page keeps ambient globals. Capture and camera
/// state hold browser handles (blobs, the media stream), so those two live
/// in local single-thread signal storage.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let captures = RwSignal::new_local(CapturesState::default());
    let camera = RwSignal::new_local(CameraState::default());
    let upload = RwSignal::new(UploadState::default());
    let activity = RwSignal::new(ActivityLog::default());

    provide_context(captures);
    provide_context(camera);
    provide_context(upload);
    provide_context(activity);

    view! {
        <Title text="PageSnap"/>
        <CapturePage/>
    }
}
