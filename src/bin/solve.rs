use clap::{Parser, ValueEnum};
use spaceship_solver::engine::State;
use spaceship_solver::solver::{self, Strategy};
use spaceship_solver::utils::state_from_str_array;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Depth-first search (baseline formulation)
    Dfs,
    /// Depth-first search with pre-push pruning and parent-linked paths
    DfsMemo,
    /// Breadth-first search
    Bfs,
    /// Uniform-cost search ordered by accumulated cost
    Cheapest,
    /// Best-first search ordered by cost plus the goal-matching estimate
    Best,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dfs => Strategy::DepthFirst,
            StrategyArg::DfsMemo => Strategy::MemoDepthFirst,
            StrategyArg::Bfs => Strategy::BreadthFirst,
            StrategyArg::Cheapest => Strategy::CheapestFirst,
            StrategyArg::Best => Strategy::BestFirst,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy to run
    #[clap(short, long, value_enum)]
    strategy: StrategyArg,

    /// Path to the puzzle file (S = spaceship, G = goal, * = both, . = empty)
    puzzle_file: PathBuf,
}

fn read_puzzle_file(path: &PathBuf) -> Result<State, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    state_from_str_array(&lines).map_err(|e| format!("Invalid puzzle format: {}", e))
}

fn main() {
    let args = Args::parse();

    let state = read_puzzle_file(&args.puzzle_file).unwrap_or_else(|e| {
        eprintln!(
            "Failed to load puzzle from {}: {}",
            args.puzzle_file.display(),
            e
        );
        process::exit(1);
    });
    println!("Loaded puzzle from {}\n", args.puzzle_file.display());
    println!("Initial state:\n{}\n", state);
    println!("Searching with strategy {:?}...\n", args.strategy);

    match solver::solve(args.strategy.into(), &state) {
        Some(path) if path.is_empty() => {
            println!("The puzzle is already solved; no moves needed.");
        }
        Some(path) => {
            println!("Solution found, {} moves:", path.len());
            for (i, action) in path.iter().enumerate() {
                println!("  Move {}: {}", i + 1, action);
            }
        }
        None => {
            println!("No solution found.");
        }
    }
}
