//! Network layer: the upload call and its response types.

pub mod api;
pub mod types;
