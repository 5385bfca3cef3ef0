//! Payload decoding
//!
//! Turns the generation service's JSON into a `PuzzleDocument`. The wire
//! shape is kept private to this module so the rest of the crate never sees
//! the service's field names or axis convention.

use serde::Deserialize;
use std::collections::HashSet;

use super::config::LoaderConfig;
use super::errors::LoadFailure;
use crate::models::{Direction, GridPos, PuzzleDocument, WordEntry};

#[derive(Deserialize)]
struct WirePuzzle {
    grid_x_dim: usize,
    grid_y_dim: usize,
    #[serde(rename = "characterPositions", default)]
    character_positions: Option<Vec<WirePos>>,
    #[serde(default)]
    words: Option<Vec<WireWord>>,
}

#[derive(Deserialize, Clone, Copy)]
struct WirePos {
    x: usize,
    y: usize,
}

#[derive(Deserialize)]
struct WireWord {
    number: WireLabel,
    #[serde(default)]
    clue: String,
    direction: Direction,
    #[serde(rename = "startX")]
    start_x: usize,
    #[serde(rename = "startY")]
    start_y: usize,
    // The Go generator never serializes this field
    #[serde(default)]
    length: Option<usize>,
}

/// Clue numbers arrive as integers from the generator but are only ever displayed
#[derive(Deserialize)]
#[serde(untagged)]
enum WireLabel {
    Number(i64),
    Text(String),
}

impl WireLabel {
    fn into_label(self) -> String {
        match self {
            WireLabel::Number(n) => n.to_string(),
            WireLabel::Text(s) => s,
        }
    }
}

/// Decode a response body into a document
pub fn decode_document(body: &str, config: &LoaderConfig) -> Result<PuzzleDocument, LoadFailure> {
    let wire: WirePuzzle = serde_json::from_str(body)?;
    Ok(from_wire(wire, config.transpose_axes))
}

fn from_wire(wire: WirePuzzle, transpose: bool) -> PuzzleDocument {
    let orient = |x: usize, y: usize| {
        let pos = GridPos::new(x, y);
        if transpose { pos.transposed() } else { pos }
    };

    let (columns, rows) = if transpose {
        (wire.grid_y_dim, wire.grid_x_dim)
    } else {
        (wire.grid_x_dim, wire.grid_y_dim)
    };

    let active_cells: Vec<GridPos> = wire
        .character_positions
        .unwrap_or_default()
        .into_iter()
        .map(|pos| orient(pos.x, pos.y))
        .collect();
    let active_set: HashSet<GridPos> = active_cells.iter().copied().collect();

    let words = wire
        .words
        .unwrap_or_default()
        .into_iter()
        .map(|word| {
            let start = orient(word.start_x, word.start_y);
            let length = word
                .length
                .unwrap_or_else(|| active_run_length(&active_set, start, word.direction));

            WordEntry {
                number: word.number.into_label(),
                clue: word.clue,
                direction: word.direction,
                start,
                length,
            }
        })
        .collect();

    log::debug!(
        "Decoded puzzle: {}x{} grid, {} active cells",
        columns,
        rows,
        active_cells.len()
    );

    PuzzleDocument::new(columns, rows, active_cells, words)
}

/// Number of consecutive active cells from `start` along `direction`
fn active_run_length(active: &HashSet<GridPos>, start: GridPos, direction: Direction) -> usize {
    (0..)
        .take_while(|&offset| active.contains(&start.step(direction, offset)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let body = r#"{
            "grid_x_dim": 5,
            "grid_y_dim": 3,
            "characterPositions": [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
            "words": [
                {"number": 1, "clue": "A", "direction": 0, "startX": 0, "startY": 0, "length": 2}
            ]
        }"#;

        let doc = decode_document(body, &LoaderConfig::default()).unwrap();
        assert_eq!(doc.columns(), 5);
        assert_eq!(doc.rows(), 3);
        assert_eq!(doc.active_cells(), &[GridPos::new(0, 0), GridPos::new(1, 0)]);

        let word = &doc.words()[0];
        assert_eq!(word.number, "1");
        assert_eq!(word.direction, Direction::Across);
        assert_eq!(word.start, GridPos::new(0, 0));
        assert_eq!(word.length, 2);
    }

    #[test]
    fn test_missing_length_inferred_from_active_run() {
        // Column 2 rows 0..3 are active, row 3 is not
        let body = r#"{
            "grid_x_dim": 4,
            "grid_y_dim": 4,
            "characterPositions": [
                {"x": 2, "y": 0}, {"x": 2, "y": 1}, {"x": 2, "y": 2}, {"x": 0, "y": 3}
            ],
            "words": [{"number": 4, "clue": "down", "direction": 1, "startX": 2, "startY": 0}]
        }"#;

        let doc = decode_document(body, &LoaderConfig::default()).unwrap();
        assert_eq!(doc.words()[0].length, 3);
    }

    #[test]
    fn test_explicit_length_wins_over_inference() {
        let body = r#"{
            "grid_x_dim": 3, "grid_y_dim": 1,
            "characterPositions": [{"x": 0, "y": 0}, {"x": 1, "y": 0}, {"x": 2, "y": 0}],
            "words": [{"number": 1, "clue": "c", "direction": 0, "startX": 0, "startY": 0, "length": 1}]
        }"#;
        let doc = decode_document(body, &LoaderConfig::default()).unwrap();
        assert_eq!(doc.words()[0].length, 1);
    }

    #[test]
    fn test_transpose_swaps_every_coordinate() {
        // Generator convention: x is the row, horizontal words advance along y
        let body = r#"{
            "grid_x_dim": 2, "grid_y_dim": 4,
            "characterPositions": [{"x": 1, "y": 0}, {"x": 1, "y": 1}, {"x": 1, "y": 2}],
            "words": [{"number": 1, "clue": "c", "direction": 0, "startX": 1, "startY": 0}]
        }"#;
        let config = LoaderConfig {
            transpose_axes: true,
            ..LoaderConfig::default()
        };

        let doc = decode_document(body, &config).unwrap();
        assert_eq!(doc.columns(), 4);
        assert_eq!(doc.rows(), 2);
        assert!(doc.is_active(GridPos::new(0, 1)));
        assert!(doc.is_active(GridPos::new(2, 1)));

        let word = &doc.words()[0];
        assert_eq!(word.start, GridPos::new(0, 1));
        assert_eq!(word.length, 3);
    }

    #[test]
    fn test_null_collections_decode_as_empty() {
        let body = r#"{"grid_x_dim": 1, "grid_y_dim": 1, "characterPositions": null, "words": null}"#;
        let doc = decode_document(body, &LoaderConfig::default()).unwrap();
        assert!(doc.active_cells().is_empty());
        assert!(doc.words().is_empty());
    }

    #[test]
    fn test_string_clue_number() {
        let body = r#"{"grid_x_dim": 1, "grid_y_dim": 1,
            "words": [{"number": "7a", "clue": "x", "direction": 0, "startX": 0, "startY": 0, "length": 1}]}"#;
        let doc = decode_document(body, &LoaderConfig::default()).unwrap();
        assert_eq!(doc.words()[0].number, "7a");
    }

    #[test]
    fn test_malformed_payloads() {
        let config = LoaderConfig::default();

        for body in [
            "not json",
            r#"{"grid_y_dim": 3}"#,
            r#"{"grid_x_dim": -1, "grid_y_dim": 3}"#,
            r#"{"grid_x_dim": 1, "grid_y_dim": 1,
                "words": [{"number": 1, "clue": "x", "direction": 2, "startX": 0, "startY": 0}]}"#,
        ] {
            let err = decode_document(body, &config).unwrap_err();
            assert!(matches!(err, LoadFailure::Malformed(_)), "expected Malformed for {body}");
        }
    }
}
