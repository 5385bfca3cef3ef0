//! Load state machine
//!
//! `Loading` resolves exactly once, to `Ready` or `Error`. Both are terminal;
//! recovering from an error means reloading the page.

use std::rc::Rc;

use super::errors::LoadFailure;
use crate::models::PuzzleDocument;

#[derive(Clone, Debug, Default)]
pub enum LoadState {
    #[default]
    Loading,

    Ready(Rc<PuzzleDocument>),

    /// User-facing message only
    Error(String),
}

impl LoadState {
    /// Apply the outcome of the request.
    ///
    /// Returns false (and leaves the state alone) if already resolved.
    pub fn resolve(&mut self, outcome: Result<PuzzleDocument, LoadFailure>) -> bool {
        if !self.is_loading() {
            log::warn!("Ignoring load outcome: state already {}", self.name());
            return false;
        }

        *self = match outcome {
            Ok(document) => {
                log::info!(
                    "Crossword loaded: {} words on a {}x{} grid",
                    document.words().len(),
                    document.columns(),
                    document.rows()
                );
                LoadState::Ready(Rc::new(document))
            }
            Err(failure) => {
                log::error!("Error fetching crossword data: {}", failure);
                LoadState::Error(failure.user_message().to_string())
            }
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn document(&self) -> Option<&Rc<PuzzleDocument>> {
        match self {
            LoadState::Ready(document) => Some(document),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short name exposed to JavaScript
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Ready(_) => "ready",
            LoadState::Error(_) => "error",
        }
    }
}
