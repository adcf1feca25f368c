//! Thumbnail list of pending captures.

use leptos::prelude::*;

use crate::state::captures::CapturesSignal;

/// Pending captures as removable thumbnails, in upload order, plus a
/// clear-all control.
///
/// The list re-renders whole on every store change, so each remove button
/// always acts on the capture's current position.
#[component]
pub fn ThumbGrid() -> impl IntoView {
    let captures = expect_context::<CapturesSignal>();

    let count = move || captures.with(|s| s.store.len());

    view! {
        <section class="thumb-grid">
            <header class="thumb-grid__header">
                <h2>{move || format!("Pages ({})", count())}</h2>
                <Show when=move || (count() > 0)>
                    <button class="btn" on:click=move |_| captures.update(|s| s.store.clear())>
                        "Clear all"
                    </button>
                </Show>
            </header>
            <div class="thumb-grid__items">
                {move || {
                    captures.with(|s| {
                        s.store
                            .items()
                            .iter()
                            .enumerate()
                            .map(|(index, c)| {
                                let src = c.preview_url.clone();
                                let dims = format!("{}\u{d7}{}", c.width, c.height);
                                view! {
                                    <figure class="thumb-grid__item">
                                        <img src=src title=dims/>
                                        <button
                                            class="thumb-grid__remove"
                                            title="Remove page"
                                            on:click=move |_| {
                                                captures.update(|s| {
                                                    s.store.remove_at(index);
                                                })
                                            }
                                        >
                                            "\u{d7}"
                                        </button>
                                    </figure>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </section>
    }
}
