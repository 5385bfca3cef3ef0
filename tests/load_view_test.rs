// End-to-end: payload text through decoding, load state and layout to the page view

use crossword_wasm::html_layout::{AppView, LayoutEngine};
use crossword_wasm::loader::{decode_document, LoadFailure, LoadState, LoaderConfig, LOAD_FAILURE_MESSAGE};
use crossword_wasm::models::HighlightState;

fn load(body: &str) -> LoadState {
    let mut state = LoadState::default();
    state.resolve(decode_document(body, &LoaderConfig::default()));
    state
}

#[test]
fn test_empty_puzzle_renders_three_by_five_inactive_grid() {
    let state = load(r#"{"grid_x_dim": 5, "grid_y_dim": 3, "characterPositions": [], "words": []}"#);
    let view = LayoutEngine::default().build_view(&state, &HighlightState::new());

    let AppView::Ready { grid, clues, .. } = view else {
        panic!("expected ready view");
    };

    assert_eq!(grid.cells.len(), 3, "three rows");
    assert!(grid.cells.iter().all(|row| row.len() == 5), "five columns per row");
    assert!(grid.iter_cells().all(|cell| !cell.active && cell.badges.is_empty()));
    assert!(clues.is_empty());
}

#[test]
fn test_malformed_payload_renders_error_only() {
    let state = load("<html>502 Bad Gateway</html>");
    let view = LayoutEngine::default().build_view(&state, &HighlightState::new());

    assert_eq!(
        view,
        AppView::Error {
            message: LOAD_FAILURE_MESSAGE.to_string()
        }
    );
}

#[test]
fn test_network_failure_renders_error_only() {
    let mut state = LoadState::default();
    state.resolve(Err(LoadFailure::Network("TypeError: Failed to fetch".into())));

    let view = LayoutEngine::default().build_view(&state, &HighlightState::new());
    assert!(matches!(view, AppView::Error { ref message } if message == LOAD_FAILURE_MESSAGE));
}

#[test]
fn test_input_rendered_exactly_for_active_cells() {
    let state = load(
        r#"{"grid_x_dim": 3, "grid_y_dim": 3,
            "characterPositions": [{"x": 0, "y": 1}, {"x": 1, "y": 1}, {"x": 2, "y": 1}, {"x": 1, "y": 0}],
            "words": []}"#,
    );
    let document = state.document().expect("ready");
    let grid = LayoutEngine::default().layout_grid(document, &HighlightState::new());

    for cell in grid.iter_cells() {
        let expected = (cell.y == 1) || (cell.x == 1 && cell.y == 0);
        assert_eq!(cell.active, expected, "cell {}", cell.key);
        assert_eq!(cell.classes.contains(&"active".to_string()), expected);
    }
}

#[test]
fn test_clue_lists_from_payload() {
    let state = load(
        r#"{"grid_x_dim": 2, "grid_y_dim": 2, "characterPositions": [],
            "words": [
                {"number": 1, "direction": 0, "clue": "A", "startX": 0, "startY": 0, "length": 2},
                {"number": 2, "direction": 1, "clue": "B", "startX": 1, "startY": 0, "length": 2}
            ]}"#,
    );
    let view = LayoutEngine::default().build_view(&state, &HighlightState::new());

    let AppView::Ready { clues, .. } = view else {
        panic!("expected ready view");
    };
    assert_eq!(clues.across, vec!["1: A"]);
    assert_eq!(clues.down, vec!["2: B"]);
}

#[test]
fn test_view_serializes_with_state_tag() {
    let view = LayoutEngine::default().build_view(&LoadState::Loading, &HighlightState::new());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["state"], "loading");
}
