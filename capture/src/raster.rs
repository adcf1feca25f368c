//! Browser raster glue: bitmap decode, canvas draw, JPEG encode, previews.
//!
//! Everything here talks to web platform surfaces and only does useful work
//! in a browser. Errors stay `JsValue` so callers can attach their own
//! context; a failure in one decode or encode is terminal for that capture
//! alone and never touches the rest of the store.

use futures::channel::oneshot;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, ImageBitmap, Url, Window,
};

use crate::consts::{JPEG_MIME, JPEG_QUALITY};
use crate::scale::{Dimensions, ScalePlan, fit_within};

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

/// Decode an encoded image blob into an [`ImageBitmap`].
pub async fn decode_blob(blob: &Blob) -> Result<ImageBitmap, JsValue> {
    let promise = window()?.create_image_bitmap_with_blob(blob)?;
    JsFuture::from(promise).await?.dyn_into::<ImageBitmap>()
}

/// Grab the current frame of a playing video at its native resolution.
pub async fn grab_video_frame(video: &HtmlVideoElement) -> Result<ImageBitmap, JsValue> {
    let promise = window()?.create_image_bitmap_with_html_video_element(video)?;
    JsFuture::from(promise).await?.dyn_into::<ImageBitmap>()
}

/// Native dimensions of a decoded bitmap.
#[must_use]
pub fn bitmap_dimensions(bitmap: &ImageBitmap) -> Dimensions {
    Dimensions::new(bitmap.width(), bitmap.height())
}

/// Downscale a decoded bitmap into a bounded-dimension JPEG blob.
///
/// Composes the full pipeline: plan, rasterize, encode. An identity plan
/// still draws once at native size so there is a surface to encode, but no
/// resize happens.
pub async fn downscale_to_jpeg(bitmap: &ImageBitmap, max_side: u32) -> Result<Blob, JsValue> {
    let plan = fit_within(bitmap_dimensions(bitmap), max_side);
    let canvas = rasterize(bitmap, &plan)?;
    encode_jpeg(&canvas).await
}

/// Draw `bitmap` into a freshly created canvas at the plan's target size.
pub fn rasterize(bitmap: &ImageBitmap, plan: &ScalePlan) -> Result<HtmlCanvasElement, JsValue> {
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(plan.target.width);
    canvas.set_height(plan.target.height);
    let ctx = context_2d(&canvas)?;
    ctx.draw_image_with_image_bitmap_and_dw_and_dh(
        bitmap,
        0.0,
        0.0,
        f64::from(plan.target.width),
        f64::from(plan.target.height),
    )?;
    Ok(canvas)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Encode a canvas to a JPEG blob at the fixed capture quality.
///
/// The typed `toBlob` binding carries no quality parameter, so the call goes
/// through a reflected [`Function::apply`] with `(callback, mime, quality)`.
pub async fn encode_jpeg(canvas: &HtmlCanvasElement) -> Result<Blob, JsValue> {
    let (sender, receiver) = oneshot::channel::<Result<Blob, JsValue>>();
    let mut sender = Some(sender);
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        let result = if value.is_null() || value.is_undefined() {
            Err(JsValue::from_str("canvas produced no blob"))
        } else {
            value.dyn_into::<Blob>()
        };
        if let Some(sender) = sender.take() {
            // A dropped receiver means the caller went away; nothing to do.
            drop(sender.send(result));
        }
    });

    let to_blob = Reflect::get(canvas.as_ref(), &JsValue::from_str("toBlob"))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str("toBlob unavailable"))?;
    let args = Array::new();
    args.push(callback.as_ref());
    args.push(&JsValue::from_str(JPEG_MIME));
    args.push(&JsValue::from_f64(JPEG_QUALITY));
    to_blob.apply(canvas.as_ref(), &args)?;
    // The callback fires once from the encoder; leak it to the platform.
    callback.forget();

    match receiver.await {
        Ok(result) => result,
        Err(_) => Err(JsValue::from_str("encode callback never fired")),
    }
}

/// Mint an object URL previewing `blob`.
///
/// The returned URL holds a browser resource until passed to
/// [`release_preview_url`].
pub fn preview_url(blob: &Blob) -> Result<String, JsValue> {
    Url::create_object_url_with_blob(blob)
}

/// Release a preview URL minted by [`preview_url`].
pub fn release_preview_url(url: &str) -> Result<(), JsValue> {
    Url::revoke_object_url(url)
}
