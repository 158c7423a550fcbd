//! This module contains the state of a single play session.
//!
//! A [Session] owns the puzzle currently being played together with its
//! solution, verifies the player's entries against that solution, and keeps
//! a running list of solve times. A session is an ordinary value owned by
//! the caller; starting a new puzzle supersedes the grids without touching
//! the recorded times.

use crate::Grid;
use crate::error::{SolveResult, ValidationResult};
use crate::generator::Generator;
use crate::solver;

use rand::Rng;

use std::time::Duration;

/// A play session: the puzzle currently being played, the solution it is
/// checked against, and the solve times recorded so far.
///
/// Starting a new puzzle, whether generated or custom, replaces both grids
/// but keeps the recorded solve times, so one session can span any number
/// of puzzles.
#[derive(Clone, Debug)]
pub struct Session {
    solution: Grid,
    puzzle: Grid,
    scores: Vec<Duration>
}

impl Session {

    /// Creates a new session with empty puzzle and solution grids and no
    /// recorded solve times. Use [Session::start_generated] or
    /// [Session::start_custom] to begin playing.
    pub fn new() -> Session {
        Session {
            solution: Grid::new(),
            puzzle: Grid::new(),
            scores: Vec::new()
        }
    }

    /// Starts a freshly generated puzzle, superseding both the puzzle and
    /// the solution grid. Solve times recorded so far are kept.
    pub fn start_generated<R: Rng>(&mut self, generator: &mut Generator<R>) {
        let generated = generator.generate();

        self.solution = generated.solution;
        self.puzzle = generated.puzzle;
    }

    /// Starts a custom puzzle given by its 81-character line representation,
    /// as accepted by [Grid::parse]. The puzzle is solved once up front; the
    /// first solution found becomes the solution that
    /// [Session::check_entry] verifies against. Solve times recorded so far
    /// are kept.
    ///
    /// # Errors
    ///
    /// * `ValidationError::WrongLength` if `code` does not consist of
    /// exactly 81 characters.
    /// * `ValidationError::InvalidCharacter` if `code` contains a character
    /// that is neither a digit from 1 to 9 nor a space.
    /// * `ValidationError::Unsolvable` if the puzzle admits no solution.
    ///
    /// If an error is returned, the session is left entirely unchanged.
    pub fn start_custom(&mut self, code: &str) -> ValidationResult<()> {
        let puzzle = Grid::parse(code)?;
        let solution = solver::solve(&puzzle)?;

        self.solution = solution;
        self.puzzle = puzzle;

        Ok(())
    }

    /// Indicates whether `digit` is the correct entry for the cell in the
    /// given `row` and `col`, that is, whether it equals the solution's
    /// digit there.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 8]` or `digit` is not in
    /// the range `[1, 9]`.
    pub fn check_entry(&self, row: usize, col: usize, digit: u8) -> bool {
        assert!(digit >= 1 && digit <= 9, "invalid digit: {}", digit);

        self.solution.get(row, col) == digit
    }

    /// Places `digit` into the puzzle in the given `row` and `col` if it is
    /// the correct entry for that cell. Returns `true` if the entry was
    /// placed and `false` if it was wrong, in which case the puzzle is left
    /// unchanged.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 8]` or `digit` is not in
    /// the range `[1, 9]`.
    pub fn place_entry(&mut self, row: usize, col: usize, digit: u8) -> bool {
        if self.check_entry(row, col, digit) {
            self.puzzle.set_cell(row, col, digit);
            true
        }
        else {
            false
        }
    }

    /// Solves the puzzle in its current state, including any entries placed
    /// so far, and returns the completed grid. The session itself is not
    /// changed; displaying the result or giving up the puzzle is the
    /// caller's decision.
    ///
    /// # Errors
    ///
    /// Returns [Unsolvable](crate::error::Unsolvable) if the puzzle in its
    /// current state admits no solution. This cannot happen to a session
    /// whose entries were all placed through [Session::place_entry].
    pub fn auto_solve(&self) -> SolveResult<Grid> {
        solver::solve(&self.puzzle)
    }

    /// Records the time a player took to solve a puzzle. The session never
    /// measures time itself; what exactly is timed is up to the caller.
    pub fn record_solve_time(&mut self, time: Duration) {
        self.scores.push(time);
    }

    /// The solve times recorded so far, in the order they were recorded.
    pub fn solve_times(&self) -> &[Duration] {
        &self.scores
    }

    /// The solve times recorded so far, sorted from best to worst, that is,
    /// in ascending order.
    pub fn best_solve_times(&self) -> Vec<Duration> {
        let mut times = self.scores.clone();
        times.sort();
        times
    }

    /// Indicates whether the puzzle has been completed, that is, whether
    /// every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.puzzle.is_full()
    }

    /// The puzzle in its current state, including any correct entries placed
    /// so far.
    pub fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// The solution the player's entries are checked against.
    pub fn solution(&self) -> &Grid {
        &self.solution
    }
}

impl Default for Session {

    fn default() -> Session {
        Session::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::error::ValidationError;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn classic_puzzle_code() -> &'static str {
        concat!(
            "53  7    ",
            "6  195   ",
            " 98    6 ",
            "8   6   3",
            "4  8 3  1",
            "7   2   6",
            " 6    28 ",
            "   419  5",
            "    8  79")
    }

    fn classic_solution_code() -> &'static str {
        concat!(
            "534678912",
            "672195348",
            "198342567",
            "859761423",
            "426853791",
            "713924856",
            "961537284",
            "287419635",
            "345286179")
    }

    fn classic_session() -> Session {
        let mut session = Session::new();
        session.start_custom(classic_puzzle_code())
            .expect("classic puzzle not accepted");
        session
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();

        assert!(session.puzzle().is_empty());
        assert!(session.solution().is_empty());
        assert!(session.solve_times().is_empty());
        assert!(!session.is_complete());
    }

    #[test]
    fn custom_puzzle_is_accepted() {
        let session = classic_session();
        let expected_puzzle = Grid::parse(classic_puzzle_code()).unwrap();
        let expected_solution = Grid::parse(classic_solution_code()).unwrap();

        assert_eq!(&expected_puzzle, session.puzzle());
        assert_eq!(&expected_solution, session.solution());
        assert!(!session.is_complete());
    }

    #[test]
    fn complete_custom_puzzle_is_accepted() {
        let mut session = Session::new();
        session.start_custom(classic_solution_code())
            .expect("complete grid not accepted");

        assert_eq!(session.solution(), session.puzzle());
        assert!(session.is_complete());
    }

    #[test]
    fn empty_custom_puzzle_is_accepted() {
        let mut session = Session::new();
        session.start_custom(&" ".repeat(81))
            .expect("empty grid not accepted");
        let canonical = solver::solve(&Grid::new()).unwrap();

        assert!(session.puzzle().is_empty());
        assert_eq!(&canonical, session.solution());
    }

    #[test]
    fn custom_puzzle_with_wrong_length_is_rejected() {
        let mut session = Session::new();

        assert_eq!(Err(ValidationError::WrongLength),
            session.start_custom(&" ".repeat(79)));
        assert_eq!(Err(ValidationError::WrongLength),
            session.start_custom(&" ".repeat(82)));
    }

    #[test]
    fn custom_puzzle_with_invalid_character_is_rejected() {
        let mut session = Session::new();
        let code = format!("x{}", " ".repeat(80));

        assert_eq!(Err(ValidationError::InvalidCharacter),
            session.start_custom(&code));
    }

    #[test]
    fn unsolvable_custom_puzzle_is_rejected() {
        let mut session = Session::new();
        let code = format!("55{}", " ".repeat(79));

        assert_eq!(Err(ValidationError::Unsolvable),
            session.start_custom(&code));
    }

    #[test]
    fn failed_import_leaves_session_unchanged() {
        let mut session = classic_session();
        session.record_solve_time(Duration::from_secs(100));

        assert!(session.start_custom(&" ".repeat(79)).is_err());
        assert!(session.start_custom(&format!("x{}", " ".repeat(80))).is_err());
        assert!(session.start_custom(&format!("55{}", " ".repeat(79))).is_err());

        let expected_puzzle = Grid::parse(classic_puzzle_code()).unwrap();
        let expected_solution = Grid::parse(classic_solution_code()).unwrap();

        assert_eq!(&expected_puzzle, session.puzzle());
        assert_eq!(&expected_solution, session.solution());
        assert_eq!(1, session.solve_times().len());
    }

    #[test]
    fn entry_check_follows_the_solution() {
        let session = classic_session();

        assert!(session.check_entry(0, 2, 4));
        assert!(session.check_entry(0, 0, 5));
        assert!(!session.check_entry(0, 2, 5));
        assert!(!session.check_entry(8, 0, 9));
    }

    #[test]
    #[should_panic]
    fn entry_check_rejects_digit_zero() {
        let session = classic_session();
        session.check_entry(0, 2, 0);
    }

    #[test]
    fn wrong_entry_is_not_placed() {
        let mut session = classic_session();

        assert!(!session.place_entry(0, 2, 5));
        assert_eq!(0, session.puzzle().get(0, 2));
    }

    #[test]
    fn correct_entry_is_placed() {
        let mut session = classic_session();

        assert!(session.place_entry(0, 2, 4));
        assert_eq!(4, session.puzzle().get(0, 2));
    }

    #[test]
    fn placing_all_entries_completes_the_puzzle() {
        let mut session = classic_session();

        for row in 0..9 {
            for col in 0..9 {
                if session.puzzle().get(row, col) == 0 {
                    let digit = session.solution().get(row, col);

                    assert!(session.place_entry(row, col, digit));
                }
            }
        }

        assert!(session.is_complete());
        assert_eq!(session.solution(), session.puzzle());
    }

    #[test]
    fn auto_solve_solves_the_current_puzzle() {
        let mut session = classic_session();
        session.place_entry(0, 2, 4);
        let before = session.puzzle().clone();

        let solved = session.auto_solve()
            .expect("classic puzzle not solvable");

        assert_eq!(session.solution(), &solved);
        assert_eq!(&before, session.puzzle());
    }

    #[test]
    fn solve_times_are_kept_in_recording_order() {
        let mut session = Session::new();
        session.record_solve_time(Duration::from_secs(120));
        session.record_solve_time(Duration::from_secs(95));
        session.record_solve_time(Duration::from_secs(140));

        let times = session.solve_times();

        assert_eq!(3, times.len());
        assert_eq!(Duration::from_secs(120), times[0]);
        assert_eq!(Duration::from_secs(95), times[1]);
        assert_eq!(Duration::from_secs(140), times[2]);
    }

    #[test]
    fn best_solve_times_are_sorted_ascending() {
        let mut session = Session::new();
        session.record_solve_time(Duration::from_secs(120));
        session.record_solve_time(Duration::from_secs(95));
        session.record_solve_time(Duration::from_secs(140));

        let expected = vec![
            Duration::from_secs(95),
            Duration::from_secs(120),
            Duration::from_secs(140)
        ];

        assert_eq!(expected, session.best_solve_times());
        assert_eq!(Duration::from_secs(120), session.solve_times()[0]);
    }

    #[test]
    fn solve_times_survive_new_puzzles() {
        let mut generator =
            Generator::new(ChaCha8Rng::seed_from_u64(42));
        let mut session = Session::new();
        session.record_solve_time(Duration::from_secs(100));

        session.start_generated(&mut generator);
        assert_eq!(1, session.solve_times().len());

        session.start_custom(classic_puzzle_code()).unwrap();
        assert_eq!(1, session.solve_times().len());
    }

    #[test]
    fn generated_puzzle_starts_a_playable_session() {
        let mut generator =
            Generator::new(ChaCha8Rng::seed_from_u64(42));
        let mut session = Session::new();
        session.start_generated(&mut generator);

        assert!(session.solution().is_solved());
        assert!(session.puzzle().is_subset(session.solution()));
        assert!(!session.is_complete());
        assert!(session.auto_solve().is_ok());
    }
}
