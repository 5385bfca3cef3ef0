//! DOM rendering
//!
//! Turns the layout engine's `AppView` into elements under a root node and
//! wires pointer listeners back to a `CellHandler`.

pub mod elements;
pub mod renderer;

pub use renderer::{CellHandler, DomRenderer, LOADING_TEXT};
