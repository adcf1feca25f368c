//! Camera acquisition: live preview, snapshot, and teardown.

use leptos::prelude::*;
use web_sys::HtmlVideoElement;

use crate::components::file_picker::FilePicker;
use crate::state::camera::CameraSignal;
use crate::state::captures::{self, CapturesSignal};
use crate::state::log::ActivitySignal;
use crate::util::{js, media};

/// Acquisition controls and the live camera preview.
///
/// The preview stays hidden until a stream is attached; a failed permission
/// grant only writes to the activity log. Closing the camera stops every
/// track so the device light goes off.
#[component]
pub fn CameraPanel() -> impl IntoView {
    let camera = expect_context::<CameraSignal>();
    let captures = expect_context::<CapturesSignal>();
    let activity = expect_context::<ActivitySignal>();
    let video_ref = NodeRef::<leptos::html::Video>::new();

    let is_open = move || camera.with(|c| c.is_open());

    let on_open = move |_| {
        leptos::task::spawn_local(async move {
            match open_preview(video_ref).await {
                Ok(stream) => camera.update(|c| c.stream = Some(stream)),
                Err(err) => {
                    activity.update(|l| {
                        l.push(format!("Could not open camera: {}", js::error_message(&err)));
                    });
                }
            }
        });
    };

    let on_close = move |_| {
        camera.update(|c| {
            if let Some(stream) = c.stream.take() {
                media::stop_tracks(&stream);
            }
        });
        if let Some(video) = video_ref.get() {
            video.set_src_object(None);
        }
    };

    let on_snap = move |_| {
        let Some(video) = video_ref.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            if let Err(err) = snap(captures, video).await {
                activity.update(|l| {
                    l.push(format!("Snapshot failed: {}", js::error_message(&err)));
                });
            }
        });
    };

    view! {
        <section class="camera-panel">
            <div class="camera-panel__actions">
                <Show
                    when=is_open
                    fallback=move || {
                        view! {
                            <button class="btn" on:click=on_open>
                                "Open camera"
                            </button>
                        }
                    }
                >
                    <button class="btn" on:click=on_close>
                        "Close camera"
                    </button>
                </Show>
                <FilePicker/>
            </div>
            <div
                class="camera-panel__preview"
                class=("camera-panel__preview--hidden", move || !is_open())
            >
                <video node_ref=video_ref autoplay playsinline muted></video>
                <button class="btn btn--primary" on:click=on_snap>
                    "Capture page"
                </button>
            </div>
        </section>
    }
}

/// Acquire the stream and attach it to the preview element. A stream whose
/// preview cannot start is stopped again so no tracks leak.
async fn open_preview(
    video_ref: NodeRef<leptos::html::Video>,
) -> Result<web_sys::MediaStream, wasm_bindgen::JsValue> {
    let stream = media::open_rear_camera().await?;
    let Some(video) = video_ref.get() else {
        media::stop_tracks(&stream);
        return Err(wasm_bindgen::JsValue::from_str("preview element missing"));
    };
    if let Err(err) = media::attach_preview(&video, &stream).await {
        media::stop_tracks(&stream);
        return Err(err);
    }
    Ok(stream)
}

/// Grab the current video frame at its native resolution and run it through
/// the downscale pipeline.
async fn snap(captures: CapturesSignal, video: HtmlVideoElement) -> Result<(), wasm_bindgen::JsValue> {
    let bitmap = capture::raster::grab_video_frame(&video).await?;
    captures::ingest_bitmap(captures, bitmap).await
}
