//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, it contains the [solve] function, which runs an
//! exhaustive backtracking search on a grid, as well as the [is_valid_move]
//! and [find_empty_location] primitives that search is built from.

use crate::Grid;
use crate::error::{SolveResult, Unsolvable};

/// Indicates whether the given digit can be placed in the cell at the given
/// position without violating the classic Sudoku rules, i.e. whether the
/// digit does not already appear in the cell's row, column, or 3×3 box.
///
/// The scan covers the entire row, column, and box, including the target
/// cell's own slot. This function is intended to be called for a cell that is
/// currently empty; for a filled cell, the digit it already holds is
/// consequently never a valid move.
///
/// # Arguments
///
/// * `grid`: The grid against which the move is checked.
/// * `row`: The row (y-coordinate) of the cell. Must be in the range
/// `[0, 8]`.
/// * `col`: The column (x-coordinate) of the cell. Must be in the range
/// `[0, 8]`.
/// * `digit`: The candidate digit. Must be in the range `[1, 9]`.
///
/// # Panics
///
/// If `row`, `col`, or `digit` is not in its specified range.
pub fn is_valid_move(grid: &Grid, row: usize, col: usize, digit: u8) -> bool {
    assert!(digit >= 1 && digit <= 9, "invalid digit: {}", digit);

    for i in 0..9 {
        if grid.get(row, i) == digit {
            return false;
        }
    }

    // One pass checks the column and the box together.
    for i in 0..9 {
        if grid.get(i, col) == digit {
            return false;
        }

        if grid.get(3 * (row / 3) + i / 3, 3 * (col / 3) + i % 3) == digit {
            return false;
        }
    }

    true
}

/// Finds the first empty cell of the given grid, scanning rows top-to-bottom
/// and, within each row, columns left-to-right. Returns the `(row, col)`
/// coordinates of that cell, or `None` if the grid is full.
pub fn find_empty_location(grid: &Grid) -> Option<(usize, usize)> {
    for row in 0..9 {
        for col in 0..9 {
            if grid.get(row, col) == 0 {
                return Some((row, col));
            }
        }
    }

    None
}

/// In-place backtracking search. On success the grid is full; on failure
/// every speculative assignment has been undone, leaving the grid as it was.
pub(crate) fn solve_rec(grid: &mut Grid) -> bool {
    if let Some((row, col)) = find_empty_location(grid) {
        for digit in 1..=9 {
            if is_valid_move(grid, row, col, digit) {
                grid.set_cell(row, col, digit);

                if solve_rec(grid) {
                    return true;
                }

                grid.clear_cell(row, col);
            }
        }

        false
    }
    else {
        true
    }
}

/// Solves the given grid by exhaustive backtracking: the first empty cell in
/// row-major order is filled with the lowest digit that does not conflict
/// with the cells filled so far, the search recurses on the remaining empty
/// cells, and the assignment is undone whenever the search runs into a dead
/// end. No heuristic ordering is applied. Since digits are always tried in
/// ascending order, the result is deterministic: equal inputs produce equal
/// solutions, and for grids with more than one solution this also determines
/// which one is found.
///
/// The search operates on a copy, so the grid provided by the caller is never
/// changed. On success, the returned grid is full, satisfies the classic
/// Sudoku rules, and contains all filled cells of the input unchanged.
/// Calling `solve` on a grid that is already solved succeeds immediately and
/// returns a copy of it.
///
/// # Errors
///
/// If the grid admits no solution, [Unsolvable] is returned. A grid whose
/// filled cells already conflict is rejected the same way, without running
/// the search.
pub fn solve(grid: &Grid) -> SolveResult<Grid> {
    if !grid.is_valid() {
        return Err(Unsolvable);
    }

    let mut clone = grid.clone();

    if solve_rec(&mut clone) {
        Ok(clone)
    }
    else {
        Err(Unsolvable)
    }
}
