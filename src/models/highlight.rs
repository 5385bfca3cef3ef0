//! Highlighted-word state
//!
//! Pointer interaction keeps track of at most one emphasized word. The state
//! only stores the word's index in the document's word list; callers pass in
//! the words starting under the pointer (see `PuzzleDocument::words_starting_at`).

/// The word currently emphasized in the grid, if any
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighlightState {
    word: Option<usize>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted word
    pub fn word(&self) -> Option<usize> {
        self.word
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_none()
    }

    /// Pointer entered a cell starting `candidates`.
    ///
    /// Highlights the first candidate; a cell starting no word leaves the
    /// state alone. Returns whether the state changed.
    pub fn enter(&mut self, candidates: &[usize]) -> bool {
        match candidates.first() {
            Some(&first) => self.set(Some(first)),
            None => false,
        }
    }

    /// Pointer left a cell. Always clears.
    pub fn leave(&mut self) -> bool {
        self.set(None)
    }

    /// Click on a cell starting `candidates`.
    ///
    /// With fewer than two candidates nothing happens. Otherwise the highlight
    /// advances to the candidate after the current one, wrapping around; when
    /// the current highlight is not a candidate the second one is chosen.
    pub fn click(&mut self, candidates: &[usize]) -> bool {
        if candidates.len() < 2 {
            return false;
        }

        let current = self
            .word
            .and_then(|word| candidates.iter().position(|&candidate| candidate == word));

        let next = match current {
            Some(pos) => candidates[(pos + 1) % candidates.len()],
            None => candidates[1],
        };

        self.set(Some(next))
    }

    /// Drop the highlight, e.g. when the document is replaced
    pub fn reset(&mut self) {
        self.word = None;
    }

    fn set(&mut self, word: Option<usize>) -> bool {
        let changed = self.word != word;
        self.word = word;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_picks_first_candidate() {
        let mut state = HighlightState::new();
        assert!(state.enter(&[3, 5]));
        assert_eq!(state.word(), Some(3));
    }

    #[test]
    fn test_enter_empty_cell_keeps_state() {
        let mut state = HighlightState::new();
        state.enter(&[2]);
        assert!(!state.enter(&[]));
        assert_eq!(state.word(), Some(2));
    }

    #[test]
    fn test_leave_clears() {
        let mut state = HighlightState::new();
        state.enter(&[0, 1]);
        assert!(state.leave());
        assert!(state.is_empty());
        assert!(!state.leave());
    }

    #[test]
    fn test_click_toggles_between_two() {
        let mut state = HighlightState::new();
        state.enter(&[4, 7]);

        assert!(state.click(&[4, 7]));
        assert_eq!(state.word(), Some(7));

        assert!(state.click(&[4, 7]));
        assert_eq!(state.word(), Some(4));
    }

    #[test]
    fn test_click_from_foreign_highlight_selects_second() {
        let mut state = HighlightState::new();
        state.enter(&[9]);

        state.click(&[4, 7]);
        assert_eq!(state.word(), Some(7));

        let mut empty = HighlightState::new();
        empty.click(&[4, 7]);
        assert_eq!(empty.word(), Some(7));
    }

    #[test]
    fn test_click_single_candidate_is_noop() {
        let mut state = HighlightState::new();
        state.enter(&[1]);
        assert!(!state.click(&[1]));
        assert_eq!(state.word(), Some(1));

        assert!(!state.click(&[]));
        assert_eq!(state.word(), Some(1));
    }

    #[test]
    fn test_click_cycles_three_candidates() {
        let mut state = HighlightState::new();
        state.enter(&[0, 1, 2]);
        state.click(&[0, 1, 2]);
        state.click(&[0, 1, 2]);
        assert_eq!(state.word(), Some(2));
        state.click(&[0, 1, 2]);
        assert_eq!(state.word(), Some(0));
    }
}
