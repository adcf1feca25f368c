//! On-page activity log, newest entry on top.

use leptos::prelude::*;

use crate::state::log::ActivitySignal;

/// User-facing event feed: camera issues, capture failures, upload results.
#[component]
pub fn StatusLog() -> impl IntoView {
    let activity = expect_context::<ActivitySignal>();

    view! {
        <section class="status-log">
            <h2>"Activity"</h2>
            <pre class="status-log__lines">
                {move || activity.with(|l| l.entries.join("\n"))}
            </pre>
        </section>
    }
}
