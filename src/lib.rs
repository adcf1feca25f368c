//! # pagesnap
//!
//! Leptos + WASM page for scanning magazine pages in the browser: capture
//! from the camera or pick local images, downscale client-side, preview the
//! pending set, and upload everything to the scanning backend as one
//! multi-part form.
//!
//! This crate contains the page, components, shared signal state, the REST
//! upload call, and platform utilities. The downscale pipeline and the
//! ordered store of pending captures live in the `capture` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
