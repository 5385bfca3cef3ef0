//! Data models for the crossword viewer
//!
//! This module contains the puzzle document received from the generation
//! service and the transient highlight state driven by pointer events.

pub mod puzzle;
pub mod highlight;

// Re-export commonly used types
pub use puzzle::*;
pub use highlight::HighlightState;
