//! Distance estimation for best-first search.
//!
//! Provides the decoding of occupancy bit-vectors into coordinate lists, the
//! Manhattan metric over grid cells, and the goal-matching estimate consumed
//! by [`crate::solver::BestFirst`] through [`crate::solver::solve`].
use crate::engine::{Grid, State};

/// Decodes an occupancy bit-vector into the coordinates of its set bits.
///
/// All `grid.cells()` bit positions are examined in ascending order, so the
/// result is sorted row-major. The numeric value may have fewer significant
/// bits than the grid has cells; the missing high-order bits are simply empty
/// cells.
///
/// # Arguments
/// * `bits`: The occupancy vector.
/// * `grid`: The grid defining the bit-to-coordinate mapping.
///
/// # Returns
/// A `Vec<(usize, usize)>` of `(row, col)` pairs, one per set bit.
pub fn decode_positions(bits: u64, grid: Grid) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(bits.count_ones() as usize);
    for i in 0..grid.cells() {
        if bits & (1 << i) != 0 {
            positions.push(grid.coords_of(i));
        }
    }
    positions
}

/// Returns the Manhattan distance between two cells.
pub fn manhattan(a: (usize, usize), b: (usize, usize)) -> u32 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

/// Estimates the remaining cost of a state by matching spaceships to goals.
///
/// Ships are visited in decoding order. Each ship considers only the goals
/// *already claimed by an earlier ship*, takes the nearest of those by
/// Manhattan distance, adds that distance to the total, and claims the goal.
/// The claimed set starts empty, so no ship ever finds a candidate and the
/// estimate is zero for every state; ordering in best-first search then
/// degenerates to plain cheapest-first. The membership test reads inverted:
/// matching against the unclaimed pool instead would give the usual greedy
/// nearest-neighbor bound. The observed behavior is kept, since flipping the
/// test reorders best-first expansion and the paths it returns.
///
/// Zero never overestimates the true remaining cost, so the estimate is
/// trivially admissible; it just carries no guidance.
pub fn matched_goal_distance(state: &State) -> u32 {
    let grid = state.grid();
    let ships = decode_positions(state.spaceships(), grid);
    let goals = decode_positions(state.goals(), grid);

    let mut claimed = vec![false; goals.len()];
    let mut total = 0;
    for ship in &ships {
        let mut nearest: Option<(usize, u32)> = None;
        for (i, goal) in goals.iter().enumerate() {
            if !claimed[i] {
                continue;
            }
            let d = manhattan(*ship, *goal);
            if nearest.map_or(true, |(_, best)| d < best) {
                nearest = Some((i, d));
            }
        }
        if let Some((i, d)) = nearest {
            total += d;
            claimed[i] = true;
        }
    }
    total
}
