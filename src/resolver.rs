//! Hidden-information resolution: work out what the unknown grid
//! positions could be, and solve each resulting candidate.
//!
//! Grounded on `chroma_oracle.lib.unknown_solver`
//! (`calculate_needed_colors`, `generate_candidate_grids`,
//! `solve_all_candidates`, `identify_hidden_items`); the control flow and
//! error conditions below follow that module's branching exactly.

use crate::color::{self, Color};
use crate::container::CAPACITY;
use crate::error::PuzzleError;
use crate::grid::RawGrid;
use crate::search::{Algorithm, SearchOutcome};

/// Work out the multiset of colors needed to fill every unknown slot.
///
/// For each known color already present fewer than [`CAPACITY`] times,
/// `CAPACITY - count` copies are needed to complete it. If unknown slots
/// remain after accounting for those, they must be filled by introducing
/// entirely new colors in groups of `CAPACITY` (a color cannot be "half
/// hidden"). Any count already above `CAPACITY`, a non-multiple-of-
/// `CAPACITY` remainder, too few unused colors to cover the remainder, or
/// a remainder that's negative (more unknown slots are already accounted
/// for than exist) is an error.
pub fn calculate_needed_colors(grid: &RawGrid) -> Result<Vec<Color>, PuzzleError> {
    let counts = grid.known_color_counts();
    let mut needed = Vec::new();

    for (color, actual) in &counts {
        if *actual > CAPACITY {
            return Err(PuzzleError::TooManyOfColor {
                color: color.name().to_string(),
                actual: *actual,
                capacity: CAPACITY,
            });
        }
        for _ in 0..(CAPACITY - actual) {
            needed.push(*color);
        }
    }

    let unknown_slots = grid.unknown_positions().len();
    let missing_slots = unknown_slots as isize - needed.len() as isize;

    if missing_slots < 0 {
        return Err(PuzzleError::OverConstrained {
            missing_slots: (-missing_slots) as usize,
            needed: needed.len(),
        });
    }
    if missing_slots == 0 {
        return Ok(needed);
    }
    if missing_slots as usize % CAPACITY != 0 {
        return Err(PuzzleError::UnalignedHiddenSlots {
            missing_slots: missing_slots as usize,
            capacity: CAPACITY,
        });
    }

    let num_new_colors = missing_slots as usize / CAPACITY;
    let used: std::collections::HashSet<Color> = counts.iter().map(|(c, _)| *c).collect();
    let unused: Vec<Color> = color::ALL.iter().copied().filter(|c| !used.contains(c)).collect();
    if unused.len() < num_new_colors {
        return Err(PuzzleError::InsufficientHiddenColors {
            available: unused.len(),
            needed_new: num_new_colors,
        });
    }
    for &color in &unused[..num_new_colors] {
        for _ in 0..CAPACITY {
            needed.push(color);
        }
    }

    Ok(needed)
}

/// Every distinct assignment of `needed` to the unknown positions of
/// `grid`, in lexicographic order of the (sorted) `needed` multiset.
///
/// Matches `sorted(set(itertools.permutations(needed)))` without
/// materializing duplicate permutations along the way: a standard
/// skip-adjacent-duplicate backtracking search over the sorted multiset
/// already visits each distinct permutation exactly once, in order.
pub fn generate_candidate_grids(grid: &RawGrid, needed: &[Color]) -> Vec<RawGrid> {
    let positions = grid.unknown_positions();
    distinct_permutations(needed)
        .into_iter()
        .map(|perm| grid.with_filled(&positions, &perm))
        .collect()
}

fn distinct_permutations(items: &[Color]) -> Vec<Vec<Color>> {
    let mut sorted = items.to_vec();
    sorted.sort();
    let mut used = vec![false; sorted.len()];
    let mut current = Vec::with_capacity(sorted.len());
    let mut out = Vec::new();
    permute(&sorted, &mut used, &mut current, &mut out);
    out
}

fn permute(items: &[Color], used: &mut [bool], current: &mut Vec<Color>, out: &mut Vec<Vec<Color>>) {
    if current.len() == items.len() {
        out.push(current.clone());
        return;
    }
    for i in 0..items.len() {
        if used[i] {
            continue;
        }
        if i > 0 && items[i] == items[i - 1] && !used[i - 1] {
            continue;
        }
        used[i] = true;
        current.push(items[i]);
        permute(items, used, current, out);
        current.pop();
        used[i] = false;
    }
}

/// Solve every candidate completion of `grid` with `algorithm`.
///
/// A candidate whose `to_state` conversion fails is skipped rather than
/// propagated, mirroring the upstream `try/except` around each candidate's
/// construction.
pub fn solve_all_candidates(
    grid: &RawGrid,
    algorithm: Algorithm,
) -> Result<Vec<(RawGrid, SearchOutcome)>, PuzzleError> {
    let needed = calculate_needed_colors(grid)?;
    let candidates = generate_candidate_grids(grid, &needed);
    let mut results = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let Ok(state) = candidate.to_state() else {
            continue;
        };
        let outcome = crate::search::solve(state, algorithm);
        results.push((candidate, outcome));
    }
    Ok(results)
}

/// For each originally-unknown position, the color assigned to it in
/// `resolved`.
pub fn identify_hidden_items(raw: &RawGrid, resolved: &RawGrid) -> Vec<((usize, usize), Color)> {
    raw.unknown_positions()
        .into_iter()
        .map(|(r, c)| ((r, c), resolved.rows()[r][c]))
        .collect()
}
