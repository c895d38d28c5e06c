//! Core puzzle engine for the spaceship sliding puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Grid`: The board dimensions and the mapping between bit positions and
//!   `(row, col)` coordinates.
//! - `Direction` and `Action`: A single move of one spaceship token.
//! - `State`: An immutable puzzle configuration, encoding spaceship and goal
//!   occupancy as bit-vectors. Successor states are produced only through
//!   `State::successor`; there is no in-place mutation.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Maximum number of cells a grid may have.
///
/// Occupancy is stored in a `u64` bit-vector, one bit per cell, so grids are
/// limited to 64 cells. `Grid::new` rejects anything larger.
pub const MAX_CELLS: usize = 64;

/// Dimensions of the puzzle board.
///
/// A grid is fixed for the lifetime of a search: every `State` carries the
/// grid it was built on, and successor generation preserves it. Bit position
/// `i` of an occupancy vector maps to `(row = i / cols, col = i % cols)`,
/// counting from the least-significant bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid with the given dimensions.
    ///
    /// # Arguments
    /// * `rows`: Number of rows (must be at least 1).
    /// * `cols`: Number of columns (must be at least 1).
    ///
    /// # Returns
    /// * `Ok(Grid)` if both dimensions are non-zero and `rows * cols` does not
    ///   exceed [`MAX_CELLS`].
    /// * `Err(String)` describing the violated constraint otherwise.
    pub fn new(rows: usize, cols: usize) -> Result<Self, String> {
        if rows == 0 || cols == 0 {
            return Err(format!(
                "Grid dimensions must be non-zero, got {}x{}",
                rows, cols
            ));
        }
        match rows.checked_mul(cols) {
            Some(cells) if cells <= MAX_CELLS => Ok(Grid { rows, cols }),
            _ => Err(format!(
                "Grid {}x{} is too large, maximum is {} cells",
                rows, cols, MAX_CELLS
            )),
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the total number of cells, which is also the width in bits of
    /// every occupancy vector on this grid.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns the bit index of the cell at `(r, c)`.
    pub fn index_of(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.rows && c < self.cols);
        r * self.cols + c
    }

    /// Returns the `(row, col)` coordinates of bit index `i`.
    pub fn coords_of(&self, i: usize) -> (usize, usize) {
        (i / self.cols, i % self.cols)
    }

    /// Returns `true` if `(r, c)` lies on the grid. Takes signed coordinates
    /// so callers can probe a neighbor without an underflow check first.
    fn contains(&self, r: isize, c: isize) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols
    }
}

/// One of the four cardinal move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// All directions, in the order legal actions enumerate them.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Returns the `(row, col)` delta of this direction.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A single move: the spaceship at `from` slides one cell in `dir`.
///
/// Actions are only meaningful for the state that produced them; applying an
/// action to any other state is a logic error the engine does not detect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    /// Coordinates of the spaceship before the move.
    pub from: (usize, usize),
    /// Direction of the move.
    pub dir: Direction,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) {}", self.from.0, self.from.1, self.dir.name())
    }
}

/// An immutable puzzle configuration.
///
/// `spaceships` and `goals` are occupancy bit-vectors over the grid's cells.
/// The goal vector and the grid never change across successor generation, so
/// two states reached during one search are equal exactly when their
/// `spaceships` vectors are equal; [`State::key`] exposes that vector as the
/// deduplication key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    grid: Grid,
    spaceships: u64,
    goals: u64,
}

impl State {
    /// Creates a state from explicit occupancy vectors.
    ///
    /// # Arguments
    /// * `grid`: The board dimensions.
    /// * `spaceships`: Bit-vector of spaceship positions.
    /// * `goals`: Bit-vector of target cells.
    ///
    /// # Returns
    /// * `Ok(State)` if neither vector has a bit set outside the grid's cells.
    /// * `Err(String)` otherwise. Malformed occupancy is rejected here so the
    ///   search layer never has to check it.
    pub fn new(grid: Grid, spaceships: u64, goals: u64) -> Result<Self, String> {
        let mask = occupancy_mask(grid.cells());
        if spaceships & !mask != 0 {
            return Err(format!(
                "Spaceship bits {:#b} fall outside the {}x{} grid",
                spaceships & !mask,
                grid.rows(),
                grid.cols()
            ));
        }
        if goals & !mask != 0 {
            return Err(format!(
                "Goal bits {:#b} fall outside the {}x{} grid",
                goals & !mask,
                grid.rows(),
                grid.cols()
            ));
        }
        Ok(State {
            grid,
            spaceships,
            goals,
        })
    }

    /// Creates a state with `ship_count` spaceships and as many goals, both
    /// scattered over distinct random cells.
    ///
    /// The same seed always produces the same state, so puzzles generated here
    /// are reproducible across runs. Ship cells and goal cells are drawn
    /// independently and may overlap each other.
    ///
    /// # Arguments
    /// * `grid`: The board dimensions.
    /// * `ship_count`: Number of spaceships (and goals) to place.
    /// * `seed`: Seed for the random number generator.
    ///
    /// # Returns
    /// * `Ok(State)` on success.
    /// * `Err(String)` if `ship_count` exceeds the number of cells.
    pub fn new_random_with_seed(grid: Grid, ship_count: usize, seed: u64) -> Result<Self, String> {
        if ship_count > grid.cells() {
            return Err(format!(
                "Cannot place {} spaceships on a grid with {} cells",
                ship_count,
                grid.cells()
            ));
        }
        let mut rng = SmallRng::seed_from_u64(seed);
        let spaceships = scatter_bits(&mut rng, grid.cells(), ship_count);
        let goals = scatter_bits(&mut rng, grid.cells(), ship_count);
        State::new(grid, spaceships, goals)
    }

    /// Returns the grid this state lives on.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the spaceship occupancy bit-vector.
    pub fn spaceships(&self) -> u64 {
        self.spaceships
    }

    /// Returns the goal occupancy bit-vector.
    pub fn goals(&self) -> u64 {
        self.goals
    }

    /// Returns `true` if every spaceship sits on a goal cell and every goal
    /// cell holds a spaceship.
    pub fn is_goal_state(&self) -> bool {
        self.spaceships == self.goals
    }

    /// Enumerates every legal move from this configuration.
    ///
    /// A move is legal when the target cell is on the grid and not occupied by
    /// another spaceship. The order is stable for a given state: ascending bit
    /// index of the moving ship, then [`DIRECTIONS`] order. Depth-first search
    /// relies on this ordering for deterministic traversal.
    ///
    /// A configuration with no legal moves simply yields an empty vector; it
    /// is not an error.
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for i in 0..self.grid.cells() {
            if self.spaceships & (1 << i) == 0 {
                continue;
            }
            let (r, c) = self.grid.coords_of(i);
            for dir in DIRECTIONS {
                let (dr, dc) = dir.delta();
                let (nr, nc) = (r as isize + dr, c as isize + dc);
                if !self.grid.contains(nr, nc) {
                    continue;
                }
                let target = self.grid.index_of(nr as usize, nc as usize);
                if self.spaceships & (1 << target) == 0 {
                    actions.push(Action { from: (r, c), dir });
                }
            }
        }
        actions
    }

    /// Produces the state reached by applying `action`.
    ///
    /// Pure: the receiver is left untouched, so strategies can branch the
    /// search tree from one state without aliasing.
    ///
    /// # Panics
    /// Panics if `action` did not come from this state's `legal_actions` (no
    /// spaceship at its source cell, or the target is off-grid or occupied).
    pub fn successor(&self, action: &Action) -> State {
        let (r, c) = action.from;
        let src = self.grid.index_of(r, c);
        assert!(
            self.spaceships & (1 << src) != 0,
            "No spaceship at ({},{})",
            r,
            c
        );
        let (dr, dc) = action.dir.delta();
        let (nr, nc) = (r as isize + dr, c as isize + dc);
        assert!(
            self.grid.contains(nr, nc),
            "Move {} leaves the grid",
            action
        );
        let dst = self.grid.index_of(nr as usize, nc as usize);
        assert!(
            self.spaceships & (1 << dst) == 0,
            "Target cell of {} is occupied",
            action
        );
        State {
            grid: self.grid,
            spaceships: self.spaceships & !(1 << src) | (1 << dst),
            goals: self.goals,
        }
    }

    /// Returns the cost of an action. Every move costs 1; strategies still go
    /// through this accessor rather than assuming uniformity.
    pub fn action_cost(&self, _action: &Action) -> u32 {
        1
    }

    /// Returns the canonical deduplication key for this state.
    ///
    /// Goals and grid are invariant during a search, so the spaceship vector
    /// alone identifies a configuration.
    pub fn key(&self) -> u64 {
        self.spaceships
    }
}

impl fmt::Display for State {
    /// Renders the board as a character grid: `S` spaceship, `G` goal,
    /// `*` spaceship on a goal, `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                let bit = 1u64 << self.grid.index_of(r, c);
                let ch = match (self.spaceships & bit != 0, self.goals & bit != 0) {
                    (true, true) => '*',
                    (true, false) => 'S',
                    (false, true) => 'G',
                    (false, false) => '.',
                };
                write!(f, "{}", ch)?;
            }
            if r < self.grid.rows() - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Returns a mask with the low `cells` bits set.
fn occupancy_mask(cells: usize) -> u64 {
    if cells >= MAX_CELLS {
        u64::MAX
    } else {
        (1u64 << cells) - 1
    }
}

/// Sets `count` distinct random bits among the low `cells` positions.
fn scatter_bits(rng: &mut impl Rng, cells: usize, count: usize) -> u64 {
    let mut bits = 0u64;
    let mut placed = 0;
    while placed < count {
        let i = rng.gen_range(0..cells);
        if bits & (1 << i) == 0 {
            bits |= 1 << i;
            placed += 1;
        }
    }
    bits
}
