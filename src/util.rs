//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for
//! duplicate detection in grid validity checks.

/// A set of Sudoku digits (1 to 9) that is implemented as a bit mask on a
/// `u16`. Each digit is represented by one bit. This generally has better
/// performance than a `HashSet` and is sufficient for all validity checks in
/// this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    content: u16
}

fn mask(digit: u8) -> u16 {
    assert!(digit >= 1 && digit <= 9, "invalid digit: {}", digit);
    1u16 << digit
}

impl DigitSet {

    /// Creates a new, empty `DigitSet`.
    pub fn new() -> DigitSet {
        DigitSet {
            content: 0
        }
    }

    /// Indicates whether this set contains the given digit, in which case
    /// this method returns `true`.
    ///
    /// # Panics
    ///
    /// If `digit` is less than 1 or greater than 9.
    pub fn contains(&self, digit: u8) -> bool {
        self.content & mask(digit) > 0
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// not present before) and `false` otherwise.
    ///
    /// # Panics
    ///
    /// If `digit` is less than 1 or greater than 9.
    pub fn insert(&mut self, digit: u8) -> bool {
        let mask = mask(digit);

        if self.content & mask == 0 {
            self.content |= mask;
            true
        }
        else {
            false
        }
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// present before) and `false` otherwise.
    ///
    /// # Panics
    ///
    /// If `digit` is less than 1 or greater than 9.
    pub fn remove(&mut self, digit: u8) -> bool {
        let mask = mask(digit);

        if self.content & mask > 0 {
            self.content &= !mask;
            true
        }
        else {
            false
        }
    }

    /// Removes all digits from this set, such that [DigitSet::contains] will
    /// return `false` for all inputs and [DigitSet::is_empty] will return
    /// `true`.
    pub fn clear(&mut self) {
        self.content = 0;
    }

    /// Indicates whether this set is empty, i.e. contains no digits.
    pub fn is_empty(&self) -> bool {
        self.content == 0
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.content.count_ones() as usize
    }
}
