//! Aggregating search results across every hidden-information candidate.
//!
//! Grounded on `chroma_oracle.lib.strategy` / `solver.win_strategy`
//! (`find_all_solutions`, `find_common_prefix`) and
//! `unknown_solver.identify_hidden_items` for the unique-solution
//! deduction path.

use crate::error::PuzzleError;
use crate::grid::RawGrid;
use crate::moves::Move;
use crate::resolver;
use crate::search::{Algorithm, SearchOutcome};

/// The outcome of resolving and solving every hidden-information
/// candidate for one raw grid.
pub struct Resolution {
    /// Every candidate grid paired with its search outcome, in the order
    /// produced by `crate::resolver::generate_candidate_grids`.
    pub candidates: Vec<(RawGrid, SearchOutcome)>,
}

impl Resolution {
    /// Run the resolver and solve every resulting candidate.
    pub fn solve(grid: &RawGrid, algorithm: Algorithm) -> Result<Resolution, PuzzleError> {
        let candidates = resolver::solve_all_candidates(grid, algorithm)?;
        Ok(Resolution { candidates })
    }

    pub fn total_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// The move sequence for every candidate that turned out solvable.
    pub fn solutions(&self) -> Vec<(&RawGrid, &[Move])> {
        self.candidates
            .iter()
            .filter_map(|(g, o)| o.moves().map(|m| (g, m)))
            .collect()
    }

    pub fn solved_count(&self) -> usize {
        self.solutions().len()
    }

    /// The longest move prefix shared by every solvable candidate: a
    /// sequence that is safe to play no matter which candidate turns out
    /// to be the true grid. Empty if no candidate solves, or if the
    /// solvable candidates share no common first move.
    pub fn common_prefix(&self) -> Vec<Move> {
        find_common_prefix(&self.solutions().into_iter().map(|(_, m)| m).collect::<Vec<_>>())
    }

    /// When the common prefix is empty, the distribution of first moves
    /// across every solvable candidate: each distinct `(src, dest)` with
    /// how many of the solvable candidates open with it. Ordered by
    /// descending count, then by `(src, dest)` for ties.
    pub fn first_move_distribution(&self) -> Vec<(Move, usize)> {
        let mut counts: Vec<(Move, usize)> = Vec::new();
        for (_, moves) in self.solutions() {
            let Some(&first) = moves.first() else { continue };
            match counts.iter_mut().find(|(m, _)| *m == first) {
                Some((_, n)) => *n += 1,
                None => counts.push((first, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1).then((a.0.src, a.0.dest).cmp(&(b.0.src, b.0.dest))));
        counts
    }

    /// If exactly one candidate is solvable, the unknown positions are
    /// fully deduced: that candidate's grid and solution are returned.
    pub fn unique_solution(&self) -> Option<(&RawGrid, &[Move])> {
        let mut solved = self
            .candidates
            .iter()
            .filter(|(_, o)| o.is_solved())
            .map(|(g, o)| (g, o.moves().expect("filtered to solved outcomes")));
        let first = solved.next()?;
        if solved.next().is_some() {
            None
        } else {
            Some(first)
        }
    }
}

/// The longest common prefix shared by every move sequence in `solutions`.
pub fn find_common_prefix(solutions: &[&[Move]]) -> Vec<Move> {
    let Some((first, rest)) = solutions.split_first() else {
        return Vec::new();
    };
    let mut prefix = first.to_vec();
    for sol in rest {
        let common_len = prefix.iter().zip(sol.iter()).take_while(|(a, b)| a == b).count();
        prefix.truncate(common_len);
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}
