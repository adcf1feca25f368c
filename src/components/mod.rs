//! UI components for the capture page.

pub mod camera_panel;
pub mod file_picker;
pub mod status_log;
pub mod thumb_grid;
pub mod upload_form;
