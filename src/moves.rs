//! Move representation, legality, and application.
//!
//! This module defines a compact `Move` type plus a successor generator
//! that enumerates every legal move from a given `State`, and an `apply`
//! that produces the resulting state rather than mutating in place (states
//! are immutable values throughout this crate; see `crate::state`).

use crate::error::PuzzleError;
use crate::state::State;

/// A single move: pour the top run of `src` onto `dest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub src: usize,
    pub dest: usize,
}

impl Move {
    pub fn new(src: usize, dest: usize) -> Self {
        Move { src, dest }
    }

    /// The move with source and destination swapped.
    pub fn reversed(self) -> Move {
        Move {
            src: self.dest,
            dest: self.src,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Container {} -> {}", self.src, self.dest)
    }
}

/// Whether `mv` is legal against `state`:
/// - both indices in range and distinct,
/// - the source is non-empty,
/// - the destination is empty, or its top color matches the source's top
///   color and it has free space,
/// - a monochrome source — whether fully or only partially filled — may
///   not be poured into an *empty* destination: relocating an
///   already-single-color container onto an empty one is a pure
///   transposition (the container that ends up empty is interchangeable
///   with the one that started that way), so it is pruned from the
///   successor set rather than wasting search effort on it.
pub fn is_legal(state: &State, mv: Move) -> bool {
    if mv.src == mv.dest {
        return false;
    }
    let (Some(src), Some(dest)) = (state.get(mv.src), state.get(mv.dest)) else {
        return false;
    };
    if src.is_empty() {
        return false;
    }
    if src.top().expect("checked non-empty above").is_unknown() {
        // Per core semantics, a container topped by an unresolved item is
        // never a legal move source, even outside the search engine proper
        // (which only ever sees fully-resolved candidate grids).
        return false;
    }
    if dest.is_empty() {
        // A no-op move: a monochrome source (any fill level) poured into
        // an empty destination changes nothing useful and is excluded.
        return !src.is_monochrome();
    }
    if dest.is_full() {
        return false;
    }
    match dest.top() {
        Some(top) => src.top().map(|s| s.color() == top.color()).unwrap_or(false),
        None => true,
    }
}

/// Apply `mv` to `state`, returning the resulting state.
///
/// Returns `PuzzleError::IllegalMove` if `mv` is not legal against `state`;
/// callers that already enumerated moves via [`legal_moves`] can rely on
/// this never failing.
pub fn apply(state: &State, mv: Move) -> Result<State, PuzzleError> {
    if !is_legal(state, mv) {
        return Err(PuzzleError::IllegalMove {
            src: mv.src,
            dest: mv.dest,
        });
    }
    let (next, _moved) = state.pour(mv.src, mv.dest);
    Ok(next)
}

/// Enumerate every legal move from `state`, in deterministic
/// `(src, dest)` lexicographic order. Determinism here is load-bearing: it
/// fixes which solution BFS/DFS report first when several are minimal or
/// reachable (see `crate::search`).
pub fn legal_moves(state: &State) -> Vec<Move> {
    let n = state.len();
    let mut moves = Vec::new();
    for src in 0..n {
        for dest in 0..n {
            if src == dest {
                continue;
            }
            let mv = Move::new(src, dest);
            if is_legal(state, mv) {
                moves.push(mv);
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::container::Container;
    use crate::item::Item;

    fn container(colors: &[Color]) -> Container {
        let items: Vec<Item> = colors.iter().copied().map(Item::new).collect();
        Container::from_items(&items)
    }

    #[test]
    fn pouring_onto_matching_color_is_legal() {
        let s = State::new(vec![
            container(&[Color::Blue, Color::Red]),
            container(&[Color::Red, Color::Red]),
        ]);
        assert!(is_legal(&s, Move::new(0, 1)));
    }

    #[test]
    fn pouring_onto_mismatched_color_is_illegal() {
        let s = State::new(vec![
            container(&[Color::Blue, Color::Red]),
            container(&[Color::Green]),
        ]);
        assert!(!is_legal(&s, Move::new(0, 1)));
    }

    #[test]
    fn pouring_full_monochrome_into_empty_is_pruned() {
        let s = State::new(vec![
            container(&[Color::Red, Color::Red, Color::Red, Color::Red]),
            Container::empty(),
        ]);
        assert!(!is_legal(&s, Move::new(0, 1)));
    }

    #[test]
    fn pouring_partial_monochrome_into_empty_is_also_pruned() {
        let s = State::new(vec![container(&[Color::Red, Color::Red]), Container::empty()]);
        assert!(!is_legal(&s, Move::new(0, 1)));
    }

    #[test]
    fn pouring_a_mixed_containers_top_run_into_empty_is_legal() {
        // The source as a whole is not monochrome (Blue beneath the Red
        // run), so pruning does not apply even though its *top run* is
        // single-colored.
        let s = State::new(vec![
            container(&[Color::Blue, Color::Red, Color::Red]),
            Container::empty(),
        ]);
        assert!(is_legal(&s, Move::new(0, 1)));
    }

    #[test]
    fn pouring_from_empty_source_is_illegal() {
        let s = State::new(vec![Container::empty(), container(&[Color::Red])]);
        assert!(!is_legal(&s, Move::new(0, 1)));
    }

    #[test]
    fn pouring_from_an_unknown_topped_source_is_illegal() {
        let s = State::new(vec![
            container(&[Color::Unknown]),
            container(&[Color::Unknown]),
        ]);
        assert!(!is_legal(&s, Move::new(0, 1)));
    }

    #[test]
    fn apply_preserves_total_color_multiset() {
        let s = State::new(vec![
            container(&[Color::Blue, Color::Red, Color::Red]),
            container(&[Color::Red]),
        ]);
        let next = apply(&s, Move::new(0, 1)).unwrap();
        let mut before: Vec<Color> = s
            .containers()
            .iter()
            .flat_map(|c| c.items().iter().map(|it| it.color()))
            .collect();
        let mut after: Vec<Color> = next
            .containers()
            .iter()
            .flat_map(|c| c.items().iter().map(|it| it.color()))
            .collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn legal_moves_are_lexicographically_ordered() {
        let s = State::new(vec![
            container(&[Color::Red]),
            container(&[Color::Red]),
            container(&[Color::Blue]),
        ]);
        let moves = legal_moves(&s);
        let mut sorted = moves.clone();
        sorted.sort_by_key(|m| (m.src, m.dest));
        assert_eq!(moves, sorted);
    }
}
