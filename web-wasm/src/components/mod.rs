//! UI components composed by the root view

pub mod header;
pub mod mode_picker;
pub mod result_panel;
pub mod upload_zone;
