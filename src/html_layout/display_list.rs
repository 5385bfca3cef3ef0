//! Display List for Layout Rendering
//!
//! This module defines the output of the layout engine. The display list holds
//! every class, label and style the DOM renderer needs, so rendering does no
//! puzzle logic of its own. It is also what `CrosswordApp::view` hands to
//! JavaScript.

use serde::{Deserialize, Serialize};

use crate::models::Direction;

/// Everything the page shows, by load state
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum AppView {
    /// Request still in flight
    Loading,

    /// Request failed; no grid
    Error { message: String },

    Ready {
        title: String,
        grid: GridDisplay,
        clues: ClueLists,
    },
}

/// The cell matrix
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GridDisplay {
    pub columns: usize,
    pub rows: usize,

    /// CSS `grid-template-columns` value
    pub template_columns: String,

    /// CSS `grid-template-rows` value
    pub template_rows: String,

    /// Dense matrix, `rows` entries of `columns` cells each
    pub cells: Vec<Vec<RenderCell>>,
}

impl GridDisplay {
    /// Cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = &RenderCell> {
        self.cells.iter().flatten()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&RenderCell> {
        self.cells.get(y).and_then(|row| row.get(x))
    }
}

/// A single grid cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderCell {
    /// Column
    pub x: usize,

    /// Row
    pub y: usize,

    /// Stable identity, `"x-y"`
    pub key: String,

    /// Accepts a letter
    pub active: bool,

    /// Inside the highlighted word's span
    pub highlighted: bool,

    /// Clue numbers of words starting here
    pub badges: Vec<RenderBadge>,

    /// CSS classes, space separated when applied
    pub classes: Vec<String>,
}

impl RenderCell {
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

/// Clue-number badge
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderBadge {
    pub number: String,
    pub direction: Direction,
    pub class_name: String,
}

/// Clue lines per direction, in received order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ClueLists {
    pub across: Vec<String>,
    pub down: Vec<String>,
}

impl ClueLists {
    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }
}
