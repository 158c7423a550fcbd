// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements a compact engine for classic 9×9 Sudoku. It supports
//! the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of grids and of individual moves according to the
//! classic row, column and box rules
//! * Solving arbitrary grids using a perfect backtracking algorithm
//! * Generating random puzzles which are guaranteed to be solvable
//! * Managing play sessions, including custom puzzle import, entry checking,
//! and solve time records
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_classic::Grid;
//!
//! let grid = Grid::parse(concat!(
//!     "53  7    ",
//!     "6  195   ",
//!     " 98    6 ",
//!     "8   6   3",
//!     "4  8 3  1",
//!     "7   2   6",
//!     " 6    28 ",
//!     "   419  5",
//!     "    8  79")).unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! A [Grid] does not enforce the Sudoku rules on its content, so it can hold
//! conflicting digits. Whether it actually does can be checked for the entire
//! grid with [Grid::is_valid], or for a potential new entry with
//! [is_valid_move](solver::is_valid_move), which does not require changing
//! the grid's state.
//!
//! ```
//! use sudoku_classic::Grid;
//! use sudoku_classic::solver;
//!
//! let mut grid = Grid::new();
//! grid.set_cell(0, 0, 4);
//!
//! // 4 collides along the first row, 1 does not.
//! assert!(!solver::is_valid_move(&grid, 0, 8, 4));
//! assert!(solver::is_valid_move(&grid, 0, 8, 1));
//!
//! // A second 4 in the first row makes the entire grid invalid.
//! grid.set_cell(0, 8, 4);
//! assert!(!grid.is_valid());
//! ```
//!
//! # Solving
//!
//! The [solve](solver::solve) function runs an exhaustive backtracking search
//! on a copy of the given grid. It either returns the completed grid or
//! reports that no solution exists. The grid provided by the caller is never
//! changed.
//!
//! ```
//! use sudoku_classic::Grid;
//! use sudoku_classic::solver;
//!
//! let puzzle = Grid::parse(concat!(
//!     "53  7    ",
//!     "6  195   ",
//!     " 98    6 ",
//!     "8   6   3",
//!     "4  8 3  1",
//!     "7   2   6",
//!     " 6    28 ",
//!     "   419  5",
//!     "    8  79")).unwrap();
//! let solution = solver::solve(&puzzle).unwrap();
//!
//! assert!(solution.is_solved());
//! assert!(puzzle.is_subset(&solution));
//! assert_eq!(4, solution.get(0, 2));
//! ```
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) produces a full solution grid together
//! with a puzzle grid derived from it by removing a random selection of
//! digits. Every removal is checked with the solver, so the puzzle is always
//! solvable. The generator is parameterized with a random number generator
//! implementing the `Rng` trait from the
//! [rand](https://rust-random.github.io/rand/rand/index.html) crate.
//!
//! ```
//! use sudoku_classic::generator::Generator;
//! use sudoku_classic::solver;
//!
//! // new_default yields a generator backed by rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let generated = generator.generate();
//!
//! assert!(generated.solution.is_solved());
//! assert!(generated.puzzle.is_subset(&generated.solution));
//! assert!(solver::solve(&generated.puzzle).is_ok());
//! ```
//!
//! # Play sessions
//!
//! A [Session](session::Session) owns the puzzle currently being played
//! together with its solution and the solve times recorded so far. It is the
//! boundary through which a UI layer talks to the engine: it imports custom
//! puzzles from their line codes, checks entries against the solution, and
//! keeps score.
//!
//! ```
//! use sudoku_classic::session::Session;
//!
//! let mut session = Session::new();
//! session.start_custom(concat!(
//!     "53  7    ",
//!     "6  195   ",
//!     " 98    6 ",
//!     "8   6   3",
//!     "4  8 3  1",
//!     "7   2   6",
//!     " 6    28 ",
//!     "   419  5",
//!     "    8  79")).unwrap();
//!
//! // Entries are checked against the solution of the imported puzzle.
//! assert!(session.check_entry(0, 2, 4));
//! assert!(!session.check_entry(0, 2, 2));
//! ```
//!
//! # Note regarding performance
//!
//! Solving and generating classic Sudoku with this crate usually finishes
//! within milliseconds, but backtracking is exponential in the worst case.
//! It is recommended to use at least `opt-level = 2` in tests that solve or
//! generate large numbers of puzzles.

pub mod error;
pub mod generator;
pub mod session;
pub mod solver;
pub mod util;

use error::{ValidationError, ValidationResult};
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// A classic Sudoku grid: a 9×9 matrix of cells organized into nine 3×3
/// boxes. Each cell either contains a digit from 1 to 9 or is empty, which is
/// represented by the value 0.
///
/// Cells are addressed by `(row, col)` coordinates, each in the range
/// `[0, 8]`, where row 0 is the topmost row and column 0 is the leftmost
/// column. The index of the box containing a cell is `3 * (row / 3) +
/// col / 3`.
///
/// A grid is a plain value with no hidden state: it implements `Clone`, `Eq`,
/// and `PartialEq`, and two grids are equal if and only if all their cells
/// are equal. A grid does *not* enforce the Sudoku rules on its content;
/// whether the content satisfies them can be checked with [Grid::is_valid].
///
/// `Grid` implements `Display`, which pretty-prints the grid using
/// box-drawing characters. An empty grid prints like this:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// For machine exchange, [Grid::to_line] and [Grid::parse] convert a grid to
/// and from a single-line 81-character code. Serde support goes through the
/// same code form, so a grid serializes as a plain string.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct Grid {
    cells: [u8; 81]
}

fn to_char(cell: u8) -> char {
    if cell == 0 {
        ' '
    }
    else {
        ('0' as u8 + cell) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for col in 0..9 {
        if col == 0 {
            result.push(start);
        }
        else if col % 3 == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(col));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, row: usize) -> String {
    line('║', '║', '│', |col| to_char(grid.get(row, col)), ' ', '║', true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for row in 0..9 {
            if row == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if row % 3 == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn index(row: usize, col: usize) -> usize {
    row * 9 + col
}

fn assert_in_bounds(row: usize, col: usize) {
    assert!(row < 9 && col < 9, "cell ({}, {}) is out of bounds", row, col);
}

impl Grid {

    /// Creates a new, empty grid, i.e. one in which every cell holds the
    /// value 0.
    pub fn new() -> Grid {
        Grid {
            cells: [0; 81]
        }
    }

    /// Parses a line code encoding a grid. The code has to consist of exactly
    /// 81 characters, one per cell in left-to-right, top-to-bottom order,
    /// where each row is completed before the next one is started. A digit
    /// from `'1'` to `'9'` represents a filled cell and a space represents an
    /// empty cell. No other characters are permitted; in particular, `'0'` is
    /// *not* a valid way of writing an empty cell.
    ///
    /// The length of the code is checked before its characters, so a code of
    /// the wrong length raises [ValidationError::WrongLength] even if it also
    /// contains invalid characters. Length is measured in characters, not
    /// bytes.
    ///
    /// Note that it is not checked whether the parsed grid satisfies the
    /// Sudoku rules. It is perfectly legal to parse an invalid grid.
    ///
    /// ```
    /// use sudoku_classic::Grid;
    ///
    /// let grid = Grid::parse(concat!(
    ///     "53  7    ",
    ///     "6  195   ",
    ///     " 98    6 ",
    ///     "8   6   3",
    ///     "4  8 3  1",
    ///     "7   2   6",
    ///     " 6    28 ",
    ///     "   419  5",
    ///     "    8  79")).unwrap();
    ///
    /// assert_eq!(5, grid.get(0, 0));
    /// assert_eq!(3, grid.get(0, 1));
    /// assert_eq!(0, grid.get(0, 2));
    /// assert_eq!(9, grid.get(8, 8));
    /// ```
    ///
    /// # Errors
    ///
    /// * `ValidationError::WrongLength`: If the code does not consist of
    /// exactly 81 characters.
    /// * `ValidationError::InvalidCharacter`: If the code contains a
    /// character which is neither a digit from `'1'` to `'9'` nor a space.
    pub fn parse(code: &str) -> ValidationResult<Grid> {
        if code.chars().count() != 81 {
            return Err(ValidationError::WrongLength);
        }

        let mut cells = [0u8; 81];

        for (i, c) in code.chars().enumerate() {
            if c == ' ' {
                continue;
            }

            if c < '1' || c > '9' {
                return Err(ValidationError::InvalidCharacter);
            }

            cells[i] = c as u8 - '0' as u8;
        }

        Ok(Grid {
            cells
        })
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a line and parsed
    /// again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_classic::Grid;
    ///
    /// let mut grid = Grid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4);
    /// grid.set_cell(1, 2, 5);
    ///
    /// let line = grid.to_line();
    /// let parsed = Grid::parse(line.as_str()).unwrap();
    /// assert_eq!(grid, parsed);
    /// ```
    pub fn to_line(&self) -> String {
        self.cells.iter()
            .map(|&cell| to_char(cell))
            .collect()
    }

    /// Gets the digit in the cell at the specified position, or 0 if that
    /// cell is empty.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 8]`.
    /// * `col`: The column (x-coordinate) of the desired cell. Must be in the
    /// range `[0, 8]`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the specified range.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert_in_bounds(row, col);
        self.cells[index(row, col)]
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 8]`.
    /// * `col`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 8]`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`. To empty a cell, use [Grid::clear_cell] instead.
    ///
    /// # Panics
    ///
    /// If `row`, `col`, or `digit` is not in its specified range.
    pub fn set_cell(&mut self, row: usize, col: usize, digit: u8) {
        assert_in_bounds(row, col);
        assert!(digit >= 1 && digit <= 9, "invalid digit: {}", digit);
        self.cells[index(row, col)] = digit;
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 8]`.
    /// * `col`: The column (x-coordinate) of the cleared cell. Must be in the
    /// range `[0, 8]`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the specified range.
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        assert_in_bounds(row, col);
        self.cells[index(row, col)] = 0;
    }

    /// Counts the number of filled cells in this grid, i.e. the cells holding
    /// a digit. While on average puzzles with fewer filled cells are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_filled(&self) -> usize {
        self.cells.iter()
            .filter(|&&cell| cell != 0)
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [Grid::count_filled] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|&cell| cell == 0)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [Grid::count_filled] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some digit must be filled
    /// in `other` with the same digit. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &Grid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(&self_cell, &other_cell)|
                self_cell == 0 || self_cell == other_cell)
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some digit
    /// must be filled in this one with the same digit. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &Grid) -> bool {
        other.is_subset(self)
    }

    /// Indicates whether this grid satisfies the classic Sudoku rules, that
    /// is, no digit appears more than once in any row, column, or 3×3 box.
    /// Empty cells are ignored, so a partially filled grid can be valid.
    pub fn is_valid(&self) -> bool {
        for row in 0..9 {
            let mut set = DigitSet::new();

            for col in 0..9 {
                let cell = self.get(row, col);

                if cell != 0 && !set.insert(cell) {
                    return false;
                }
            }
        }

        for col in 0..9 {
            let mut set = DigitSet::new();

            for row in 0..9 {
                let cell = self.get(row, col);

                if cell != 0 && !set.insert(cell) {
                    return false;
                }
            }
        }

        for box_index in 0..9 {
            let mut set = DigitSet::new();
            let base_row = 3 * (box_index / 3);
            let base_col = 3 * (box_index % 3);

            for i in 0..9 {
                let cell = self.get(base_row + i / 3, base_col + i % 3);

                if cell != 0 && !set.insert(cell) {
                    return false;
                }
            }
        }

        true
    }

    /// Indicates whether this grid is solved, i.e. it is full and satisfies
    /// the classic Sudoku rules. Equivalent to `grid.is_full() &&
    /// grid.is_valid()`.
    pub fn is_solved(&self) -> bool {
        self.is_full() && self.is_valid()
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[u8; 81] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> String {
        grid.to_line()
    }
}

impl TryFrom<String> for Grid {
    type Error = ValidationError;

    fn try_from(code: String) -> ValidationResult<Grid> {
        Grid::parse(code.as_str())
    }
}
