//! Readable messages out of thrown `JsValue`s.

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human-readable message for a thrown JS value.
///
/// `DOMException` and `Error` values yield their message; anything else is
/// debug-formatted.
#[must_use]
pub fn error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }
}
