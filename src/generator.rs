//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation works from a full solution towards a puzzle: the solver fills
//! the empty grid, then a [Generator] removes a random selection of digits,
//! consulting the solver after every removal to confirm that the puzzle is
//! still solvable.

use crate::Grid;
use crate::solver;

use rand::Rng;
use rand::rngs::ThreadRng;

const MIN_REMOVALS: usize = 20;
const MAX_REMOVALS: usize = 40;
const MAX_ATTEMPTS: usize = 100;

/// The output of [Generator::generate]: a full solution grid together with
/// the puzzle that was carved out of it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedPuzzle {

    /// The complete solution grid, which is full and satisfies the classic
    /// Sudoku rules.
    pub solution: Grid,

    /// The puzzle grid, obtained from `solution` by emptying some cells.
    /// Every cell still filled agrees with `solution`, and the puzzle as a
    /// whole is guaranteed to be solvable.
    pub puzzle: Grid
}

/// A generator randomly generates Sudoku puzzles together with their
/// solutions. It uses a random number generator to decide which cells are
/// emptied. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to make its random
    /// decisions.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to make its random decisions.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Generates a new puzzle together with its solution.
    ///
    /// The solution is obtained by solving the empty grid. Since the solver
    /// tries digits in ascending order, this always yields the same full
    /// grid: all generated puzzles share one canonical solution, and the
    /// variety between puzzles comes from the removals alone.
    ///
    /// A target number of removals is chosen uniformly from 20 to 40. Cells
    /// are then picked uniformly at random, for up to 100 attempts. Picking
    /// an already emptied cell wastes the attempt; otherwise the cell is
    /// emptied and the solver is consulted to confirm that the puzzle is
    /// still solvable, restoring the digit if it is not. The puzzle may
    /// therefore end up with fewer removals than the target, which is
    /// accepted rather than treated as an error.
    ///
    /// Uniqueness is *not* checked: the generated puzzle is guaranteed to be
    /// solvable, but it may admit solutions other than the returned one.
    pub fn generate(&mut self) -> GeneratedPuzzle {
        // The empty grid is always solvable, so this cannot fail.
        let mut solution = Grid::new();
        solver::solve_rec(&mut solution);

        let mut puzzle = solution.clone();
        let mut remaining = self.rng.gen_range(MIN_REMOVALS..=MAX_REMOVALS);
        let mut attempts = 0;

        while remaining > 0 && attempts < MAX_ATTEMPTS {
            attempts += 1;

            let row = self.rng.gen_range(0..9);
            let col = self.rng.gen_range(0..9);
            let digit = puzzle.get(row, col);

            if digit == 0 {
                continue;
            }

            puzzle.clear_cell(row, col);

            if solver::solve(&puzzle).is_ok() {
                remaining -= 1;
            }
            else {
                puzzle.set_cell(row, col, digit);
            }
        }

        GeneratedPuzzle {
            solution,
            puzzle
        }
    }
}
