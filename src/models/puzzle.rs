//! Puzzle document model
//!
//! A `PuzzleDocument` is the complete generated puzzle as the viewer sees it:
//! grid dimensions, the playable cells and the word list. Coordinates are
//! always (column, row) here; any axis relabelling happens during decoding.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A grid coordinate: `x` is the column, `y` is the row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Same position with the axes swapped
    pub fn transposed(self) -> Self {
        Self { x: self.y, y: self.x }
    }

    /// Position `offset` cells further along `direction`
    pub fn step(self, direction: Direction, offset: usize) -> Self {
        match direction {
            Direction::Across => Self { x: self.x + offset, y: self.y },
            Direction::Down => Self { x: self.x, y: self.y + offset },
        }
    }
}

/// A playable coordinate. Membership decides whether a cell takes input.
pub type ActiveCell = GridPos;

/// Orientation of a word in the grid
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Direction {
    /// Left to right along a row
    Across = 0,

    /// Top to bottom along a column
    Down = 1,
}

impl Direction {
    /// CSS class used on clue-number badges
    pub fn css_class(self) -> &'static str {
        match self {
            Direction::Across => "across",
            Direction::Down => "down",
        }
    }

    /// Heading shown above the clue list
    pub fn label(self) -> &'static str {
        match self {
            Direction::Across => "Across",
            Direction::Down => "Down",
        }
    }
}

/// One word of the puzzle with its clue
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Display label of the clue number
    pub number: String,

    /// Clue text
    pub clue: String,

    pub direction: Direction,

    /// First cell of the word
    pub start: GridPos,

    /// Number of cells the word occupies
    pub length: usize,
}

impl WordEntry {
    /// Whether `pos` lies within this word's span
    pub fn contains(&self, pos: GridPos) -> bool {
        match self.direction {
            Direction::Across => {
                pos.y == self.start.y && pos.x >= self.start.x && pos.x < self.start.x + self.length
            }
            Direction::Down => {
                pos.x == self.start.x && pos.y >= self.start.y && pos.y < self.start.y + self.length
            }
        }
    }

    /// Line shown in the clue list, e.g. `"3: Capital of France"`
    pub fn clue_line(&self) -> String {
        format!("{}: {}", self.number, self.clue)
    }
}

/// The generated puzzle. Immutable once built; a new load replaces it whole.
#[derive(Clone, Debug)]
pub struct PuzzleDocument {
    columns: usize,
    rows: usize,
    active_cells: Vec<ActiveCell>,
    words: Vec<WordEntry>,

    // Lookups derived from the fields above
    active_set: HashSet<GridPos>,
    starts: HashMap<GridPos, Vec<usize>>,
}

impl PuzzleDocument {
    pub fn new(columns: usize, rows: usize, active_cells: Vec<ActiveCell>, words: Vec<WordEntry>) -> Self {
        let active_set = active_cells.iter().copied().collect();

        let mut starts: HashMap<GridPos, Vec<usize>> = HashMap::new();
        for (index, word) in words.iter().enumerate() {
            starts.entry(word.start).or_default().push(index);
        }

        Self {
            columns,
            rows,
            active_cells,
            words,
            active_set,
            starts,
        }
    }

    /// Column count
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row count
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn active_cells(&self) -> &[ActiveCell] {
        &self.active_cells
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn word(&self, index: usize) -> Option<&WordEntry> {
        self.words.get(index)
    }

    pub fn is_active(&self, pos: GridPos) -> bool {
        self.active_set.contains(&pos)
    }

    /// Indices of the words starting at `pos`, in word-list order
    pub fn words_starting_at(&self, pos: GridPos) -> &[usize] {
        self.starts.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Words of one direction, in word-list order
    pub fn words_in(&self, direction: Direction) -> impl Iterator<Item = &WordEntry> + '_ {
        self.words.iter().filter(move |word| word.direction == direction)
    }
}
