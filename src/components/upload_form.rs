//! Title entry and submission of the pending set.

use leptos::prelude::*;

use capture::store::page_name;

use crate::net::api;
use crate::state::captures::CapturesSignal;
use crate::state::log::ActivitySignal;
use crate::state::upload::{UploadSignal, reject_reason};
use crate::util::config;

/// Title input plus the send button.
///
/// Validation happens before any network work: an empty title or an empty
/// store alerts and sends nothing. A failed upload leaves the store intact
/// so the user can retry by hand; a successful one surfaces the backend's
/// summary in the activity log.
#[component]
pub fn UploadForm() -> impl IntoView {
    let captures = expect_context::<CapturesSignal>();
    let upload = expect_context::<UploadSignal>();
    let activity = expect_context::<ActivitySignal>();
    let title = RwSignal::new(String::new());

    let sending = move || upload.with(|u| u.sending);

    let on_send = move |_| {
        let trimmed = title.with(|t| t.trim().to_owned());
        let count = captures.with(|s| s.store.len());
        if let Some(reason) = reject_reason(&trimmed, count) {
            alert(reason);
            return;
        }
        if sending() {
            return;
        }

        // Snapshot the ordered blobs now; store mutations made while the
        // request is in flight must not affect this submission.
        let pages: Vec<_> = captures.with(|s| {
            s.store
                .items()
                .iter()
                .enumerate()
                .map(|(index, c)| (c.blob.clone(), page_name(index)))
                .collect()
        });

        upload.update(|u| u.sending = true);
        activity.update(|l| l.push(format!("Uploading {} pages...", pages.len())));

        leptos::task::spawn_local(async move {
            match api::upload_pages(&config::api_base(), &trimmed, &pages).await {
                Ok(response) => {
                    let details = serde_json::to_string_pretty(&response.items)
                        .unwrap_or_else(|_| "[]".to_owned());
                    activity.update(|l| {
                        l.push(format!(
                            "Done. Folder: {} | pages saved: {}\n{details}",
                            response.folder, response.saved_count
                        ));
                    });
                    alert("Upload complete");
                }
                Err(err) => {
                    activity.update(|l| l.push(format!("Upload failed: {err}")));
                    alert(&format!("Upload failed: {err}"));
                }
            }
            upload.update(|u| u.sending = false);
        });
    };

    view! {
        <section class="upload-form">
            <label class="upload-form__label">
                "Magazine title"
                <input
                    class="upload-form__input"
                    type="text"
                    placeholder="e.g. Retro Monthly #12"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" disabled=sending on:click=on_send>
                {move || if sending() { "Sending..." } else { "Send pages" }}
            </button>
        </section>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
