//! Puzzle loader
//!
//! Fetches one generated puzzle at startup and exposes the outcome as a
//! `LoadState`.
//!
//! # Module Structure
//!
//! - `config`: endpoint, category and axis convention
//! - `decode`: JSON payload to `PuzzleDocument` (pure, testable natively)
//! - `fetch`: the single browser request
//! - `state`: Loading / Ready / Error
//! - `errors`: `LoadFailure`

pub mod config;
pub mod decode;
pub mod errors;
pub mod fetch;
pub mod state;

pub use config::LoaderConfig;
pub use decode::decode_document;
pub use errors::{LoadFailure, LOAD_FAILURE_MESSAGE};
pub use fetch::fetch_document;
pub use state::LoadState;
