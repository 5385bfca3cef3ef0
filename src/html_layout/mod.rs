//! HTML Layout Engine
//!
//! This module computes layout for HTML/DOM rendering, generating an `AppView`
//! display list with all classes, labels and styles the DOM renderer needs.
//! Pointer interaction state lives here too (`GridSession`) since it only
//! affects which cells carry the `highlighted` class.

pub mod document;
pub mod cell;
pub mod clues;
pub mod session;
pub mod display_list;

pub use document::{LayoutEngine, LayoutConfig, DEFAULT_TITLE};
pub use display_list::{AppView, GridDisplay, RenderCell, RenderBadge, ClueLists};
pub use cell::{classify, is_highlighted, CellClass};
pub use clues::build_clue_lists;
pub use session::{GridSession, CellEvent, PointerKind};
