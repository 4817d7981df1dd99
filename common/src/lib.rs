//! MLPDR Common Library
//!
//! Domain types and client logic for the plate recognition front end,
//! kept free of browser types so everything here runs under `cargo test`.

pub mod adapter;
pub mod error;
pub mod mode;
pub mod submission;
pub mod types;

pub use adapter::{adapt_response, API_MOUNT};
pub use error::SubmitError;
pub use mode::OcrMode;
pub use submission::{Attempt, AttemptCounter, SubmissionState, SubmissionView};
pub use types::{ArtifactPaths, ArtifactUrls, ErrorBody, Recognition, UploadResponse};
