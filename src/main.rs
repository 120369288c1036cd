//! Command-line entry point.
//!
//! Subcommand structure follows `fraco-oxza-o8`'s `main.rs`
//! (`#[derive(Parser)]` args struct wrapping a `#[derive(Subcommand)]`
//! enum); the three subcommands and their global flags mirror
//! chroma-oracle's `solver/cli/main.py` (`-a/--algorithm`, `-v/--validate`,
//! `--verbose`) and `solver/match_steps.py`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use colorstack::display;
use colorstack::grid::RawGrid;
use colorstack::moves::Move;
use colorstack::search::{self, Algorithm};
use colorstack::strategy::Resolution;

#[derive(Parser)]
#[command(name = "colorstack", about = "Solve color-sorting container puzzles")]
struct Args {
    /// Search algorithm to use.
    #[arg(short, long, global = true, value_enum, default_value_t = Algorithm::Bfs)]
    algorithm: Algorithm,

    /// Reject grids whose known colors don't each appear exactly 4 times.
    #[arg(short, long, global = true)]
    validate: bool,

    /// Enable debug-level logging of the search.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single grid with no hidden positions.
    Solve { puzzle: PathBuf },
    /// Resolve a grid's hidden positions and report the safe move prefix.
    Strategy { puzzle: PathBuf },
    /// Compare the first N moves of every grid in a folder against a
    /// reference grid's solution.
    MatchSteps {
        folder: PathBuf,
        reference: PathBuf,
        #[arg(default_value_t = 2)]
        steps: usize,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_grid(path: &PathBuf, validate: bool) -> anyhow::Result<RawGrid> {
    let grid = RawGrid::from_path(path)?;
    if validate {
        grid.validate_counts()?;
    }
    Ok(grid)
}

fn run_solve(path: &PathBuf, algorithm: Algorithm, validate: bool) -> anyhow::Result<()> {
    let grid = load_grid(path, validate)?;
    let state = grid.to_state()?;
    display::print_grid(&grid);
    let banner = match algorithm {
        Algorithm::Bfs => "Searching using Breadth-First Search",
        Algorithm::Dfs => "Searching using Depth-First Search",
    };
    println!("{banner}");
    match search::solve(state, algorithm) {
        search::SearchOutcome::NoSolution { nodes_visited } => {
            println!("Cannot be solved :(");
            println!("({nodes_visited} nodes explored)");
        }
        search::SearchOutcome::Solved { moves, nodes_visited } => {
            println!("solved in {} moves", moves.len());
            println!("({nodes_visited} nodes explored)");
            display::print_moves(&moves);
        }
    }
    Ok(())
}

fn run_strategy(path: &PathBuf, algorithm: Algorithm, validate: bool) -> anyhow::Result<()> {
    let grid = load_grid(path, validate)?;
    display::print_grid(&grid);
    let resolution = Resolution::solve(&grid, algorithm)?;
    println!(
        "{}/{} candidate grids solvable",
        resolution.solved_count(),
        resolution.total_candidates()
    );

    if let Some((solved_grid, moves)) = resolution.unique_solution() {
        println!("Unique solution found; unknowns are fully deduced:");
        display::print_grid(solved_grid);
        display::print_moves(moves);
        return Ok(());
    }

    let prefix = resolution.common_prefix();
    if prefix.is_empty() {
        println!("No guaranteed-safe move exists across all candidates.");
        let distribution = resolution.first_move_distribution();
        if !distribution.is_empty() {
            println!("First-move distribution across solvable candidates:");
            for (mv, count) in &distribution {
                println!("  {mv}: {count}/{}", resolution.solved_count());
            }
        }
    } else {
        println!("Guaranteed-safe move prefix:");
        display::print_moves(&prefix);
    }
    Ok(())
}

fn first_moves(folder_entry: &std::path::Path, n: usize, algorithm: Algorithm) -> anyhow::Result<Vec<Move>> {
    let grid = RawGrid::from_path(folder_entry)?;
    let state = grid.to_state()?;
    let outcome = search::solve(state, algorithm);
    let moves = outcome.moves().unwrap_or(&[]);
    Ok(moves.iter().take(n).copied().collect())
}

fn run_match_steps(folder: &PathBuf, reference: &PathBuf, n: usize, algorithm: Algorithm) -> anyhow::Result<()> {
    let reference_moves = first_moves(reference, n, algorithm)?;

    let mut entries: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    entries.sort();

    let mut matches = Vec::new();
    for path in &entries {
        let candidate_moves = first_moves(path, n, algorithm)?;
        let common = reference_moves
            .iter()
            .zip(candidate_moves.iter())
            .take_while(|(a, b)| a == b)
            .count();
        let name = path.display();
        if common == n && candidate_moves.len() >= n {
            println!("MATCH {name}: first {n} moves equal");
            matches.push(path.clone());
        } else if common > 0 {
            println!("PARTIAL {name}: {common}/{n} moves match");
        } else {
            println!("DIFFER {name}: 0/{n} moves match");
        }
    }

    println!("{} of {} grids fully match", matches.len(), entries.len());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match &args.command {
        Commands::Solve { puzzle } => run_solve(puzzle, args.algorithm, args.validate),
        Commands::Strategy { puzzle } => run_strategy(puzzle, args.algorithm, args.validate),
        Commands::MatchSteps { folder, reference, steps } => {
            run_match_steps(folder, reference, *steps, args.algorithm)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
