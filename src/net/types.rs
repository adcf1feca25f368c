//! Wire types for the scanning backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Successful `/api/upload` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Folder the backend filed this batch under.
    pub folder: String,
    /// Number of pages the backend saved.
    pub saved_count: u32,
    /// Per-page detail (stored paths, processing notes). The backend owns
    /// this shape and the page surfaces it verbatim, so it stays an
    /// open-ended JSON list.
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}
