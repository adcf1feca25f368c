//! The pending capture set and its ingest pipeline.

#[cfg(test)]
#[path = "captures_test.rs"]
mod captures_test;

use capture::consts::MAX_DIMENSION;
use capture::raster;
use capture::store::{Preview, Store};
use leptos::prelude::{LocalStorage, RwSignal, Update};
use uuid::Uuid;
use wasm_bindgen::JsValue;
use web_sys::{Blob, ImageBitmap};

/// One acquired, downscaled, JPEG-encoded page image pending upload.
#[derive(Debug, Clone)]
pub struct Capture {
    /// Stable identity for render keys and log lines.
    pub id: Uuid,
    /// The encoded JPEG payload.
    pub blob: Blob,
    /// Object URL previewing `blob`; revoked when the capture leaves the store.
    pub preview_url: String,
    /// Pixel width decoded from the encoded blob.
    pub width: u32,
    /// Pixel height decoded from the encoded blob.
    pub height: u32,
}

impl Preview for Capture {
    fn release(&mut self) {
        if raster::release_preview_url(&self.preview_url).is_err() {
            log::warn!("failed to revoke preview URL of capture {}", self.id);
        }
    }
}

/// The ordered collection of pending captures.
#[derive(Debug, Clone, Default)]
pub struct CapturesState {
    pub store: Store<Capture>,
}

/// Shared handle to the capture store, provided from the app root.
pub type CapturesSignal = RwSignal<CapturesState, LocalStorage>;

/// Run one decoded bitmap through the downscale pipeline and append the
/// resulting capture. The bitmap is consumed either way.
pub async fn ingest_bitmap(captures: CapturesSignal, bitmap: ImageBitmap) -> Result<(), JsValue> {
    let blob = raster::downscale_to_jpeg(&bitmap, MAX_DIMENSION).await;
    bitmap.close();
    append_blob(captures, blob?).await
}

/// Decode `blob`'s pixel dimensions, mint a preview URL, and append the
/// capture to the end of the store. Thumbnails re-render reactively off the
/// signal update.
pub async fn append_blob(captures: CapturesSignal, blob: Blob) -> Result<(), JsValue> {
    let bitmap = raster::decode_blob(&blob).await?;
    let dimensions = raster::bitmap_dimensions(&bitmap);
    bitmap.close();
    let preview_url = raster::preview_url(&blob)?;
    captures.update(|state| {
        state.store.push(Capture {
            id: Uuid::new_v4(),
            blob,
            preview_url,
            width: dimensions.width,
            height: dimensions.height,
        });
    });
    Ok(())
}
