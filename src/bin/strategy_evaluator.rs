use spaceship_solver::engine::{Grid, State};
use spaceship_solver::solver::{solve, Strategy};
use std::collections::HashMap;

const NUM_RANDOM_PUZZLES_FOR_EVALUATION: usize = 20;
const START_SEED: u64 = 0;
const GRID_ROWS: usize = 3;
const GRID_COLS: usize = 4;
const SHIP_COUNT: usize = 2;

fn main() {
    let strategies: Vec<(&str, Strategy)> = vec![
        ("DFS", Strategy::DepthFirst),
        ("DFS-memo", Strategy::MemoDepthFirst),
        ("BFS", Strategy::BreadthFirst),
        ("Cheapest", Strategy::CheapestFirst),
        ("Best", Strategy::BestFirst),
    ];

    let grid = Grid::new(GRID_ROWS, GRID_COLS).expect("Evaluation grid dimensions are valid");

    let mut all_lengths: HashMap<String, Vec<usize>> = HashMap::new();
    for (name, _) in &strategies {
        all_lengths.insert(name.to_string(), Vec::new());
    }

    println!(
        "Evaluating {} strategies on {} random {}x{} puzzles with {} spaceships...",
        strategies.len(),
        NUM_RANDOM_PUZZLES_FOR_EVALUATION,
        GRID_ROWS,
        GRID_COLS,
        SHIP_COUNT
    );

    for puzzle_idx in 0..NUM_RANDOM_PUZZLES_FOR_EVALUATION {
        let seed = START_SEED + puzzle_idx as u64;
        let state = State::new_random_with_seed(grid, SHIP_COUNT, seed)
            .expect("Ship count fits the evaluation grid");

        println!("\nPuzzle {} (Seed: {})", puzzle_idx, seed);

        for (name, strategy) in &strategies {
            match solve(*strategy, &state) {
                Some(path) => {
                    println!("  Strategy: {:<10} Path length: {}", name, path.len());
                    all_lengths.get_mut(*name).unwrap().push(path.len());
                }
                None => {
                    // Equal ship and goal counts on an open grid are always
                    // solvable, so this indicates a bug worth surfacing.
                    eprintln!(
                        "Warning: Strategy {} found no solution for puzzle {} (Seed: {})",
                        name, puzzle_idx, seed
                    );
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Puzzles evaluated: {}", NUM_RANDOM_PUZZLES_FOR_EVALUATION);
    println!("\n--- Average Path Lengths ---");

    let mut sorted_averages: Vec<(&str, f64)> = Vec::new();
    for (name, _) in &strategies {
        let lengths = &all_lengths[*name];
        if lengths.is_empty() {
            println!("Strategy {}: No paths recorded.", name);
            continue;
        }
        let total: usize = lengths.iter().sum();
        sorted_averages.push((*name, total as f64 / lengths.len() as f64));
    }

    // Shortest average first
    sorted_averages.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    for (name, avg) in sorted_averages {
        println!("Strategy {:<10}: Average path length = {:.2}", name, avg);
    }
}
