//! Load failure type
//!
//! Every way the puzzle request can go wrong ends up here. The detail is kept
//! for the log only; the page shows the same static message for all of them.

use thiserror::Error;

/// Message shown in place of the grid when loading fails
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load crossword data. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    /// The request could not be sent or the connection failed
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("Generation service returned HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The body was not a puzzle document
    #[error("Malformed puzzle payload: {0}")]
    Malformed(String),

    /// No browser window to issue the request from
    #[error("Browser environment unavailable: {0}")]
    Environment(String),
}

impl LoadFailure {
    /// User-facing text, identical for every variant
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}

impl From<serde_json::Error> for LoadFailure {
    fn from(err: serde_json::Error) -> Self {
        LoadFailure::Malformed(err.to_string())
    }
}
