//! Camera acquisition.
//!
//! Requests a rear-facing stream at an ideal 1920x1080 with audio off. The
//! constraint dictionaries have no typed builders for `ideal` values, so
//! they are assembled with `Reflect`.

use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

const IDEAL_WIDTH: f64 = 1920.0;
const IDEAL_HEIGHT: f64 = 1080.0;

/// Open a camera stream, preferring the rear-facing device.
pub async fn open_rear_camera() -> Result<MediaStream, JsValue> {
    let devices = navigator()?.media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video_constraints()?.into());
    constraints.set_audio(&JsValue::FALSE);
    let promise = devices.get_user_media_with_constraints(&constraints)?;
    JsFuture::from(promise).await?.dyn_into::<MediaStream>()
}

/// Attach `stream` to the preview element and start playback.
pub async fn attach_preview(video: &HtmlVideoElement, stream: &MediaStream) -> Result<(), JsValue> {
    video.set_src_object(Some(stream));
    JsFuture::from(video.play()?).await?;
    Ok(())
}

/// Stop every track of `stream`, releasing the acquired hardware.
pub fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

fn navigator() -> Result<web_sys::Navigator, JsValue> {
    web_sys::window()
        .map(|w| w.navigator())
        .ok_or_else(|| JsValue::from_str("no window"))
}

fn video_constraints() -> Result<Object, JsValue> {
    let video = Object::new();
    Reflect::set(&video, &"facingMode".into(), &ideal(&"environment".into())?)?;
    Reflect::set(&video, &"width".into(), &ideal(&JsValue::from_f64(IDEAL_WIDTH))?)?;
    Reflect::set(&video, &"height".into(), &ideal(&JsValue::from_f64(IDEAL_HEIGHT))?)?;
    Ok(video)
}

fn ideal(value: &JsValue) -> Result<JsValue, JsValue> {
    let wrapper = Object::new();
    Reflect::set(&wrapper, &"ideal".into(), value)?;
    Ok(wrapper.into())
}
