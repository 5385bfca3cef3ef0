//! Document-level layout computation
//!
//! This module contains the main entry point for layout calculations,
//! taking the load state and highlight and producing an `AppView`.

use serde::{Deserialize, Serialize};

use super::cell::{classify, CellStyleBuilder};
use super::clues::build_clue_lists;
use super::display_list::*;
use crate::loader::LoadState;
use crate::models::{GridPos, HighlightState, PuzzleDocument};

pub const DEFAULT_TITLE: &str = "Crossword Puzzle";

/// Configuration for layout
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Page heading above the grid
    pub title: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Main layout engine
pub struct LayoutEngine {
    config: LayoutConfig,
    cell_builder: CellStyleBuilder,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            cell_builder: CellStyleBuilder::new(),
        }
    }

    /// Compute the whole page for the current load state
    ///
    /// # Arguments
    /// * `state` - Loader state
    /// * `highlight` - Current highlight; ignored unless the state is Ready
    pub fn build_view(&self, state: &LoadState, highlight: &HighlightState) -> AppView {
        match state {
            LoadState::Loading => AppView::Loading,
            LoadState::Error(message) => AppView::Error {
                message: message.clone(),
            },
            LoadState::Ready(document) => AppView::Ready {
                title: self.config.title.clone(),
                grid: self.layout_grid(document, highlight),
                clues: build_clue_lists(document),
            },
        }
    }

    /// Dense `rows x columns` matrix, row-major
    pub fn layout_grid(&self, document: &PuzzleDocument, highlight: &HighlightState) -> GridDisplay {
        let columns = document.columns();
        let rows = document.rows();

        let cells = (0..rows)
            .map(|y| {
                (0..columns)
                    .map(|x| {
                        let class = classify(document, highlight, GridPos::new(x, y));
                        self.cell_builder.build_render_cell(document, &class)
                    })
                    .collect()
            })
            .collect();

        GridDisplay {
            columns,
            rows,
            template_columns: format!("repeat({}, 1fr)", columns),
            template_rows: format!("repeat({}, 1fr)", rows),
            cells,
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
