use crate::engine::{Grid, State};

/// Parses an array of string slices into a puzzle [`State`].
///
/// Each string slice is one row, starting from row 0. The grid dimensions are
/// taken from the input: `rows.len()` rows by the character count of the
/// first row, and every row must have the same length.
///
/// Valid characters are:
/// - `S`: a spaceship
/// - `G`: a goal cell
/// - `*`: a spaceship standing on a goal cell
/// - `.`: an empty cell
///
/// Any other character is an error.
///
/// # Arguments
/// * `rows`: The rows of the puzzle, top to bottom.
///
/// # Returns
/// * `Ok(State)` if parsing succeeds.
/// * `Err(String)` if:
///     - `rows` is empty or the first row has no characters.
///     - The grid would exceed [`crate::engine::MAX_CELLS`] cells.
///     - A row's length differs from the first row's.
///     - An unrecognized character is encountered.
///
/// # Examples
/// ```
/// use spaceship_solver::utils::state_from_str_array;
///
/// let state = state_from_str_array(&[
///     "S..",
///     "..G",
/// ]).unwrap();
/// assert_eq!(state.spaceships(), 0b000001);
/// assert_eq!(state.goals(), 0b100000);
///
/// assert!(state_from_str_array(&["SX."]).is_err());
/// ```
pub fn state_from_str_array(rows: &[&str]) -> Result<State, String> {
    if rows.is_empty() {
        return Err("Puzzle must have at least one row".to_string());
    }
    let cols = rows[0].chars().count();
    let grid = Grid::new(rows.len(), cols)?;

    let mut spaceships = 0u64;
    let mut goals = 0u64;
    for (r, row) in rows.iter().enumerate() {
        if row.chars().count() != cols {
            return Err(format!(
                "Row {} has {} characters, expected {}",
                r,
                row.chars().count(),
                cols
            ));
        }
        for (c, ch) in row.chars().enumerate() {
            let bit = 1u64 << grid.index_of(r, c);
            match ch {
                'S' => spaceships |= bit,
                'G' => goals |= bit,
                '*' => {
                    spaceships |= bit;
                    goals |= bit;
                }
                '.' => {}
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        ch, r, c
                    ))
                }
            }
        }
    }
    State::new(grid, spaceships, goals)
}
