//! Across / Down clue lists

use super::display_list::ClueLists;
use crate::models::{Direction, PuzzleDocument};

/// Split the word list by direction, keeping received order
pub fn build_clue_lists(document: &PuzzleDocument) -> ClueLists {
    ClueLists {
        across: document.words_in(Direction::Across).map(|word| word.clue_line()).collect(),
        down: document.words_in(Direction::Down).map(|word| word.clue_line()).collect(),
    }
}
