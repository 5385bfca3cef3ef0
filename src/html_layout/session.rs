//! Grid interaction session
//!
//! Pairs the loaded document with the highlight state and routes pointer
//! events to it. Replacing the document always drops the highlight.

use std::rc::Rc;

use super::cell::is_highlighted;
use crate::models::{GridPos, HighlightState, PuzzleDocument, WordEntry};

/// Pointer gesture on a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Leave,
    Click,
}

impl PointerKind {
    /// DOM event name bound for this gesture
    pub fn event_name(self) -> &'static str {
        match self {
            PointerKind::Enter => "mouseenter",
            PointerKind::Leave => "mouseleave",
            PointerKind::Click => "click",
        }
    }

    pub const ALL: [PointerKind; 3] = [PointerKind::Enter, PointerKind::Leave, PointerKind::Click];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellEvent {
    pub pos: GridPos,
    pub kind: PointerKind,
}

impl CellEvent {
    pub fn new(pos: GridPos, kind: PointerKind) -> Self {
        Self { pos, kind }
    }
}

#[derive(Clone, Debug)]
pub struct GridSession {
    document: Rc<PuzzleDocument>,
    highlight: HighlightState,
}

impl GridSession {
    pub fn new(document: Rc<PuzzleDocument>) -> Self {
        Self {
            document,
            highlight: HighlightState::new(),
        }
    }

    pub fn document(&self) -> &Rc<PuzzleDocument> {
        &self.document
    }

    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    pub fn replace_document(&mut self, document: Rc<PuzzleDocument>) {
        self.document = document;
        self.highlight.reset();
    }

    /// Apply a pointer event; returns whether the highlight changed
    pub fn handle(&mut self, event: CellEvent) -> bool {
        let starting = self.document.words_starting_at(event.pos);
        let changed = match event.kind {
            PointerKind::Enter => self.highlight.enter(starting),
            PointerKind::Leave => self.highlight.leave(),
            PointerKind::Click => self.highlight.click(starting),
        };

        if changed {
            log::debug!("Highlight now {:?} after {:?}", self.highlight.word(), event);
        }
        changed
    }

    pub fn highlighted_word(&self) -> Option<&WordEntry> {
        self.highlight.word().and_then(|index| self.document.word(index))
    }

    pub fn is_highlighted(&self, pos: GridPos) -> bool {
        is_highlighted(&self.document, &self.highlight, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    fn crossing() -> Rc<PuzzleDocument> {
        let words = vec![
            WordEntry {
                number: "1".into(),
                clue: "across".into(),
                direction: Direction::Across,
                start: GridPos::new(0, 0),
                length: 2,
            },
            WordEntry {
                number: "1".into(),
                clue: "down".into(),
                direction: Direction::Down,
                start: GridPos::new(0, 0),
                length: 2,
            },
        ];
        Rc::new(PuzzleDocument::new(2, 2, vec![], words))
    }

    #[test]
    fn test_hover_then_leave_clears() {
        let mut session = GridSession::new(crossing());
        assert!(session.handle(CellEvent::new(GridPos::new(0, 0), PointerKind::Enter)));
        assert_eq!(session.highlighted_word().map(|w| w.clue.as_str()), Some("across"));

        assert!(session.handle(CellEvent::new(GridPos::new(0, 0), PointerKind::Leave)));
        assert!(session.highlighted_word().is_none());
    }

    #[test]
    fn test_click_toggles_crossing_words() {
        let mut session = GridSession::new(crossing());
        let origin = GridPos::new(0, 0);
        session.handle(CellEvent::new(origin, PointerKind::Enter));

        session.handle(CellEvent::new(origin, PointerKind::Click));
        assert!(session.is_highlighted(GridPos::new(0, 1)));
        assert!(!session.is_highlighted(GridPos::new(1, 0)));

        session.handle(CellEvent::new(origin, PointerKind::Click));
        assert!(session.is_highlighted(GridPos::new(1, 0)));
        assert!(!session.is_highlighted(GridPos::new(0, 1)));
    }

    #[test]
    fn test_replace_document_resets_highlight() {
        let mut session = GridSession::new(crossing());
        session.handle(CellEvent::new(GridPos::new(0, 0), PointerKind::Enter));

        session.replace_document(crossing());
        assert!(session.highlight().is_empty());
    }
}
