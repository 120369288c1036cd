//! Loading and validating the on-disk raw grid format.
//!
//! Grounded on `chroma_oracle.lib.json2collection`/`file2collection`: the
//! wire format is a JSON array of arrays of color-name strings, one inner
//! array per container, bottom item first. `"?"`/`"UNKNOWN"` mark a hidden
//! position. `reject_invalid` mirrors the upstream `reject_invalid` flag:
//! when set, every *known* color must appear exactly [`CAPACITY`] times
//! before anything else is attempted, independent of whether the grid also
//! contains unknowns.

use std::collections::HashMap;
use std::path::Path;

use crate::color::Color;
use crate::container::{Container, CAPACITY};
use crate::error::PuzzleError;
use crate::item::Item;
use crate::state::State;

/// A grid as loaded from disk: rows of colors, possibly containing
/// `Color::Unknown` entries.
#[derive(Clone, Debug)]
pub struct RawGrid {
    rows: Vec<Vec<Color>>,
}

impl RawGrid {
    pub fn rows(&self) -> &[Vec<Color>] {
        &self.rows
    }

    /// Parse the JSON text into a `RawGrid`, without validating color
    /// counts. Returns `PuzzleError::InvalidGridStructure` if the JSON is
    /// not an array of arrays of strings, and
    /// `PuzzleError::UnknownColorName` if any cell names an unrecognized
    /// color.
    pub fn from_json_str(json: &str) -> Result<RawGrid, PuzzleError> {
        let raw: Vec<Vec<String>> = serde_json::from_str(json).map_err(|e| {
            PuzzleError::InvalidGridStructure {
                reason: e.to_string(),
            }
        })?;
        if raw.iter().any(|row| row.len() > CAPACITY) {
            return Err(PuzzleError::InvalidGridStructure {
                reason: format!("a container cannot hold more than {CAPACITY} items"),
            });
        }
        let rows = raw
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        Color::parse(&cell).ok_or_else(|| PuzzleError::UnknownColorName(cell))
                    })
                    .collect::<Result<Vec<Color>, PuzzleError>>()
            })
            .collect::<Result<Vec<Vec<Color>>, PuzzleError>>()?;
        Ok(RawGrid { rows })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<RawGrid> {
        let text = std::fs::read_to_string(path)?;
        Ok(RawGrid::from_json_str(&text)?)
    }

    /// Validate that every known (non-`Unknown`) color occurs exactly
    /// [`CAPACITY`] times. Mirrors the upstream `reject_invalid` pre-check,
    /// which runs before any hidden-information handling.
    pub fn validate_counts(&self) -> Result<(), PuzzleError> {
        let counts = self.known_color_counts();
        for (color, actual) in counts {
            if actual != CAPACITY {
                return Err(PuzzleError::InvalidColorCount {
                    color: color.name().to_string(),
                    actual,
                    expected: CAPACITY,
                });
            }
        }
        Ok(())
    }

    /// Counts of every known (non-`Unknown`) color present anywhere in the
    /// grid, in no particular order.
    pub fn known_color_counts(&self) -> Vec<(Color, usize)> {
        let mut counts: HashMap<Color, usize> = HashMap::new();
        for row in &self.rows {
            for &color in row {
                if !color.is_unknown() {
                    *counts.entry(color).or_insert(0) += 1;
                }
            }
        }
        counts.into_iter().collect()
    }

    /// Positions (row, col) of every `Unknown` cell, in row-major order.
    pub fn unknown_positions(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &color) in row.iter().enumerate() {
                if color.is_unknown() {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn has_unknown(&self) -> bool {
        self.rows.iter().flatten().any(|c| c.is_unknown())
    }

    /// Convert to a [`State`] without requiring resolved unknowns. Used by
    /// `crate::simulate`, which treats `Unknown` as an ordinary color for
    /// the purpose of replaying a move sequence.
    pub fn to_state_allow_unknown(&self) -> State {
        State::new(
            self.rows
                .iter()
                .map(|row| {
                    let items: Vec<Item> = row.iter().copied().map(Item::new).collect();
                    Container::from_items(&items)
                })
                .collect(),
        )
    }

    /// Convert directly to a [`State`], failing if any position is still
    /// `Unknown`.
    pub fn to_state(&self) -> Result<State, PuzzleError> {
        if self.has_unknown() {
            return Err(PuzzleError::InvalidGridStructure {
                reason: "grid still has unresolved Unknown cells".to_string(),
            });
        }
        Ok(State::new(
            self.rows
                .iter()
                .map(|row| {
                    let items: Vec<Item> = row.iter().copied().map(Item::new).collect();
                    Container::from_items(&items)
                })
                .collect(),
        ))
    }

    /// Produce a new grid with `positions` (in the order returned by
    /// [`RawGrid::unknown_positions`]) replaced by `fill`. Used by
    /// `crate::resolver` to materialize one candidate completion.
    pub fn with_filled(&self, positions: &[(usize, usize)], fill: &[Color]) -> RawGrid {
        assert_eq!(positions.len(), fill.len());
        let mut rows = self.rows.clone();
        for (&(r, c), &color) in positions.iter().zip(fill) {
            rows[r][c] = color;
        }
        RawGrid { rows }
    }
}
