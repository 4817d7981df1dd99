//! Submission failure taxonomy

use thiserror::Error;

/// What went wrong with a submission, from the user's point of view.
///
/// The `Display` output is shown verbatim in the error region, so the exact
/// wording lives here and nowhere else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Submit pressed with no file chosen; nothing reaches the network.
    #[error("Select an image first.")]
    NoImage,

    /// The service answered non-2xx; carries the body's error text.
    #[error("{0}")]
    Service(String),

    /// The request never completed, or a success body was unreadable.
    #[error("Unexpected error.")]
    Transport,
}

impl SubmitError {
    /// Build a service error from the optional `error` field of a non-2xx
    /// body; absent or empty text falls back to a generic message.
    pub fn from_service_body(error: Option<String>) -> Self {
        let message = error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "Upload failed.".to_string());
        SubmitError::Service(message)
    }
}
