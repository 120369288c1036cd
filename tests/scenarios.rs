//! End-to-end scenarios straight off the worked examples: construct a raw
//! grid, run it through the library exactly as the CLI would, and check the
//! externally observable result (move sequence, final state, deduced
//! colors) rather than internals.

use colorstack::color::Color;
use colorstack::grid::RawGrid;
use colorstack::moves::Move;
use colorstack::search::{self, Algorithm, SearchOutcome};
use colorstack::strategy::Resolution;

fn moves(grid_json: &str, algorithm: Algorithm) -> SearchOutcome {
    let grid = RawGrid::from_json_str(grid_json).unwrap();
    let state = grid.to_state().unwrap();
    search::solve(state, algorithm)
}

#[test]
fn trivially_solved_start_returns_no_moves_under_both_algorithms() {
    let grid_json = r#"[["RED","RED","RED","RED"], []]"#;
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let outcome = moves(grid_json, algorithm);
        let found = outcome.moves().expect("already solved");
        assert!(found.is_empty());
    }
}

#[test]
fn single_pour_scenario_matches_the_documented_two_move_solution() {
    // spec.md's Scenario B totals only 3 REDs, which can never fill a
    // capacity-4 container under this crate's full-monochrome `is_solved`
    // (see DESIGN.md's Open Question 3), so it is adapted here with RED
    // padded to exactly CAPACITY (a spare RED container, plus a spare empty
    // container) so a genuinely settled state is reachable while keeping
    // the documented two-move shape: pour the REDs together, then the
    // BLUEs together.
    let grid_json = r#"[["BLUE","RED","RED","RED"], ["BLUE","BLUE","BLUE"], ["RED"], []]"#;
    let grid = RawGrid::from_json_str(grid_json).unwrap();
    let state = grid.to_state().unwrap();
    let outcome = search::solve(state.clone(), Algorithm::Bfs);
    let found = outcome.moves().expect("solvable").to_vec();
    assert_eq!(found, vec![Move::new(0, 2), Move::new(0, 1)]);

    let mut cur = state;
    for mv in &found {
        cur = colorstack::moves::apply(&cur, *mv).unwrap();
    }
    assert!(cur.is_solved());
    assert!(cur.get(0).unwrap().is_empty());
    assert_eq!(cur.get(1).unwrap().len(), 4);
    assert_eq!(cur.get(2).unwrap().len(), 4);
    assert!(cur.get(3).unwrap().is_empty());
}

#[test]
fn a_grid_whose_known_colors_are_miscounted_is_unsolvable_but_not_an_error_by_default() {
    // Four reds split 3/1 and a lone blue: RED totals 4, but BLUE totals 1,
    // short of CAPACITY, so `validate_counts` must reject it while the bare
    // solver still runs to completion and reports no solution.
    let grid_json = r#"[["RED","RED","RED"], ["RED"], ["BLUE"]]"#;
    let grid = RawGrid::from_json_str(grid_json).unwrap();

    assert!(grid.validate_counts().is_err());

    let state = grid.to_state().unwrap();
    let outcome = search::solve(state, Algorithm::Bfs);
    assert!(matches!(outcome, SearchOutcome::NoSolution { .. }));
}

#[test]
fn unique_solution_deduces_the_only_two_hidden_reds() {
    let grid_json = r#"[["?","?","RED","RED"], ["BLUE","BLUE","BLUE","BLUE"], []]"#;
    let grid = RawGrid::from_json_str(grid_json).unwrap();

    let resolution = Resolution::solve(&grid, Algorithm::Bfs).unwrap();
    assert_eq!(resolution.total_candidates(), 1);

    let (resolved, _moves) = resolution.unique_solution().expect("unique");
    let hidden = colorstack::resolver::identify_hidden_items(&grid, resolved);
    assert_eq!(
        hidden,
        vec![((0, 0), Color::Red), ((0, 1), Color::Red)]
    );
}

#[test]
fn common_prefix_extraction_matches_the_documented_example() {
    use colorstack::strategy::find_common_prefix;

    let a = vec![Move::new(0, 3), Move::new(1, 2), Move::new(0, 1)];
    let b = vec![Move::new(0, 3), Move::new(1, 2), Move::new(2, 4)];
    let prefix = find_common_prefix(&[&a, &b]);
    assert_eq!(prefix, vec![Move::new(0, 3), Move::new(1, 2)]);
}
