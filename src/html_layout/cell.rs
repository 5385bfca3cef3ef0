//! Cell-level classification and styling
//!
//! This module answers the three questions asked of every coordinate (is it
//! playable, which words start here, is it inside the highlighted word) and
//! turns the answers into a `RenderCell`.

use super::display_list::{RenderBadge, RenderCell};
use crate::models::{GridPos, HighlightState, PuzzleDocument};

/// Classification of one coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellClass<'a> {
    pub pos: GridPos,

    /// Member of the active-cell collection
    pub active: bool,

    /// Indices of words starting here, in word-list order
    pub starting: &'a [usize],

    /// Inside the highlighted word's span
    pub highlighted: bool,
}

/// Classify `pos` against the document and current highlight
pub fn classify<'a>(document: &'a PuzzleDocument, highlight: &HighlightState, pos: GridPos) -> CellClass<'a> {
    CellClass {
        pos,
        active: document.is_active(pos),
        starting: document.words_starting_at(pos),
        highlighted: is_highlighted(document, highlight, pos),
    }
}

/// Whether `pos` lies in the highlighted word
pub fn is_highlighted(document: &PuzzleDocument, highlight: &HighlightState, pos: GridPos) -> bool {
    highlight
        .word()
        .and_then(|index| document.word(index))
        .is_some_and(|word| word.contains(pos))
}

/// Builder for cell styling
pub struct CellStyleBuilder;

impl CellStyleBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a complete RenderCell for a classified coordinate
    pub fn build_render_cell(&self, document: &PuzzleDocument, class: &CellClass<'_>) -> RenderCell {
        let mut classes = vec!["cell".to_string()];
        if class.active {
            classes.push("active".to_string());
        }
        if class.highlighted {
            classes.push("highlighted".to_string());
        }

        let badges = class
            .starting
            .iter()
            .filter_map(|&index| document.word(index))
            .map(|word| RenderBadge {
                number: word.number.clone(),
                direction: word.direction,
                class_name: format!("cell-number {}", word.direction.css_class()),
            })
            .collect();

        RenderCell {
            x: class.pos.x,
            y: class.pos.y,
            key: format!("{}-{}", class.pos.x, class.pos.y),
            active: class.active,
            highlighted: class.highlighted,
            badges,
            classes,
        }
    }
}

impl Default for CellStyleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
