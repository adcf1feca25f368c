//! Local file selection feeding the downscale pipeline.

use leptos::prelude::*;
use web_sys::File;

use crate::state::captures::{self, CapturesSignal};
use crate::state::log::ActivitySignal;
use crate::util::js;

/// Hidden file input plus the button that opens it.
///
/// Every selected image runs through its own decode chain, so append order
/// follows completion order, not selection order. Files without an image
/// MIME type are skipped without comment.
#[component]
pub fn FilePicker() -> impl IntoView {
    let captures = expect_context::<CapturesSignal>();
    let activity = expect_context::<ActivitySignal>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_pick = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let Some(list) = input.files() else {
            return;
        };
        let files: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        // Reset so picking the same file again fires another change event.
        input.set_value("");

        for file in files {
            if !file.type_().starts_with("image/") {
                continue;
            }
            leptos::task::spawn_local(async move {
                if let Err(err) = import_file(captures, &file).await {
                    activity.update(|l| {
                        l.push(format!(
                            "Could not read {}: {}",
                            file.name(),
                            js::error_message(&err)
                        ));
                    });
                }
            });
        }
    };

    view! {
        <button class="btn" on:click=on_pick>
            "Pick images"
        </button>
        <input
            node_ref=input_ref
            class="file-picker__input"
            type="file"
            accept="image/*"
            multiple
            on:change=on_change
        />
    }
}

async fn import_file(captures: CapturesSignal, file: &File) -> Result<(), wasm_bindgen::JsValue> {
    let bitmap = capture::raster::decode_blob(file).await?;
    captures::ingest_bitmap(captures, bitmap).await
}
