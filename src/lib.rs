//! # Spaceship Solver Library
//!
//! This library solves a sliding-puzzle-style planning problem: spaceship
//! tokens on a grid must be moved, one cell at a time, until they occupy a
//! set of target cells. It provides the puzzle engine and a family of search
//! strategies that all compute an action path (or report that none exists)
//! over the same abstract state-space contract.
//!
//! It is used by two binaries:
//! - `solve`: Loads a puzzle from a text file, runs one chosen strategy, and
//!   prints the move sequence.
//! - `strategy_evaluator`: Runs every strategy over a batch of seeded random
//!   puzzles and reports path lengths per strategy.
//!
//! ## Modules
//! - `engine`: The board representation (`Grid`, `State`), move descriptors
//!   (`Action`, `Direction`), bit-vector occupancy encoding, and successor
//!   generation.
//! - `solver`: The `SearchState` contract, the `PathFinder` strategies
//!   (depth-first in two variants, breadth-first, cheapest-first, best-first,
//!   and a seeded random-walk baseline), and the `Strategy` selection surface.
//! - `heuristics`: Bit-vector decoding, the Manhattan metric, and the
//!   goal-matching remaining-cost estimate for best-first search.
//! - `utils`: Parsing puzzle configurations from strings.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
