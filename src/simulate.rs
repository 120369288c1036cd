//! Replay a move sequence against a (possibly still-hidden) grid.
//!
//! Grounded on `chroma_oracle.cli.simulation.simulate_moves_on_grid`: walk
//! the moves in order, checking legality before applying each one, and
//! stop at the first move that cannot be applied rather than erroring out.
//! This lets a caller (e.g. `match-steps`) check how far a recorded move
//! sequence gets against a grid whose unknowns haven't been resolved yet.

use crate::grid::RawGrid;
use crate::moves::{self, Move};
use crate::state::State;

/// Replay `moves` against `grid`, stopping at the first move that is not
/// legal against the current state.
///
/// Returns the final reached state together with the index of the first
/// move that failed to apply, or `None` if every move applied cleanly.
pub fn simulate_moves_on_grid(grid: &RawGrid, moves: &[Move]) -> (State, Option<usize>) {
    let mut current = grid.to_state_allow_unknown();
    for (i, &mv) in moves.iter().enumerate() {
        if !moves::is_legal(&current, mv) {
            return (current, Some(i));
        }
        current = moves::apply(&current, mv).expect("checked legal above");
    }
    (current, None)
}
