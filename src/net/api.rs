//! REST upload call to the scanning backend.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a typed [`UploadError`] so the page can log and
//! alert a readable message while leaving the capture store intact for a
//! manual retry. Nothing here retries on its own.

use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Blob, FormData};

use super::types::UploadResponse;

/// Why an upload attempt failed.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The multi-part body could not be assembled.
    #[error("could not build the upload form")]
    Form,
    /// The request never completed (network unreachable, CORS, aborted).
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The 2xx body was not the expected JSON shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// POST the titled page set to `{base_url}/api/upload`.
///
/// The body is one multi-part form: a `title` field plus one `images` entry
/// per page, each named by the caller (`page-N.jpg` in store order). An
/// empty `base_url` makes the request relative to the page's own origin.
pub async fn upload_pages(
    base_url: &str,
    title: &str,
    pages: &[(Blob, String)],
) -> Result<UploadResponse, UploadError> {
    let form = build_form(title, pages).map_err(|_| UploadError::Form)?;
    let response = Request::post(&format!("{base_url}/api/upload"))
        .body(form)
        .map_err(|e| UploadError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(UploadError::Status(response.status()));
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| UploadError::Decode(e.to_string()))
}

fn build_form(title: &str, pages: &[(Blob, String)]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.set_with_str("title", title)?;
    for (blob, name) in pages {
        form.append_with_blob_and_filename("images", blob, name)?;
    }
    Ok(form)
}
