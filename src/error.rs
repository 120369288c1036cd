//! The crate's error taxonomy.
//!
//! One `thiserror` enum covers every fallible path named by the puzzle's
//! grid loading, move application, and hidden-information resolution.
//! `NoSolution` is deliberately *not* a variant here: an unsolvable puzzle
//! is an ordinary result, not a failure (see `crate::search::SearchOutcome`).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("grid has {actual} occurrences of {color}, expected exactly {expected}")]
    InvalidColorCount {
        color: String,
        actual: usize,
        expected: usize,
    },

    #[error("grid structure is invalid: {reason}")]
    InvalidGridStructure { reason: String },

    #[error("unknown color name {0:?}")]
    UnknownColorName(String),

    #[error("illegal move: container {src} -> container {dest}")]
    IllegalMove { src: usize, dest: usize },

    #[error("color {color} appears {actual} times, more than the capacity of {capacity}")]
    TooManyOfColor {
        color: String,
        actual: usize,
        capacity: usize,
    },

    #[error(
        "puzzle is over-constrained: {missing_slots} unknown slots but only {needed} needed items"
    )]
    OverConstrained { missing_slots: usize, needed: usize },

    #[error(
        "{missing_slots} unknown slots remain after assigning needed colors, not a multiple of {capacity}"
    )]
    UnalignedHiddenSlots { missing_slots: usize, capacity: usize },

    #[error("not enough unused colors ({available}) to fill {needed_new} fully-hidden color(s)")]
    InsufficientHiddenColors {
        available: usize,
        needed_new: usize,
    },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
