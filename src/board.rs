//! Board state: sides, digits, coordinates, and the consumed-digit pool

use std::fmt;

use serde::Serialize;

/// One of the two digit-parity roles competing in a match.
///
/// ODD owns {1,3,5,7,9}, EVEN owns {2,4,6,8}; the digit 0 belongs to
/// neither and may be claimed once by whichever side places it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Odd,
    Even,
}

const ODD_DIGIT_ORDER: [Digit; 6] = [
    Digit(1),
    Digit(3),
    Digit(5),
    Digit(7),
    Digit(9),
    Digit(0),
];

const EVEN_DIGIT_ORDER: [Digit; 5] = [Digit(2), Digit(4), Digit(6), Digit(8), Digit(0)];

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Odd => Side::Even,
            Side::Even => Side::Odd,
        }
    }

    /// The side's candidate digits in scan order: its own set ascending,
    /// then the shared 0 last.
    pub fn candidate_digits(self) -> &'static [Digit] {
        match self {
            Side::Odd => &ODD_DIGIT_ORDER,
            Side::Even => &EVEN_DIGIT_ORDER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Odd => "odd",
            Side::Even => "even",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placeable digit (0-9).
///
/// Each digit can occupy at most one cell per match; once placed it is
/// consumed for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Digit(u8);

impl Digit {
    /// Create a new digit, validating it's within 0-9.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DigitOutOfRange`] if the value is >= 10.
    pub fn new(value: u8) -> Result<Self, crate::Error> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(crate::Error::DigitOutOfRange { digit: value })
        }
    }

    /// Get the inner value.
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The side whose set this digit belongs to; `None` for the shared 0.
    pub fn side(self) -> Option<Side> {
        match self.0 {
            0 => None,
            d if d % 2 == 1 => Some(Side::Odd),
            _ => Some(Side::Even),
        }
    }

    /// Whether the digit's value is odd. 0 counts as even-valued.
    pub fn is_odd_valued(self) -> bool {
        self.0 % 2 == 1
    }

    /// Whether `side` may place this digit at all (usage aside).
    pub fn playable_by(self, side: Side) -> bool {
        match self.side() {
            None => true,
            Some(owner) => owner == side,
        }
    }

    fn index(self) -> usize {
        usize::from(self.0)
    }

    fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }

    fn from_char(c: char) -> Option<Digit> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell coordinate on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a new coordinate, validating both axes are within 0-2.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either axis is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < 3 && col < 3 {
            Ok(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(crate::Error::OutOfBounds { row, col })
        }
    }

    /// Coordinate for a flat cell index (0-8, row-major).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the index is >= 9.
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        if index < 9 {
            Ok(Coord {
                row: (index / 3) as u8,
                col: (index % 3) as u8,
            })
        } else {
            Err(crate::Error::OutOfBounds {
                row: index / 3,
                col: index % 3,
            })
        }
    }

    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// Flat cell index (0-8, row-major).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// All coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0u8..3).flat_map(|row| (0u8..3).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The 3x3 grid together with the consumed-digit pool.
///
/// The pool flags are kept in lockstep with the cells through
/// [`place`]/[`remove`]: a digit is marked used exactly while it occupies
/// some cell. The type is `Copy` (19 bytes), so scratch copies for
/// enumeration are free.
///
/// [`place`]: Board::place
/// [`remove`]: Board::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: [Option<Digit>; 9],
    used: [bool; 10],
}

impl Board {
    /// Create a new empty board with all ten digits available.
    pub fn new() -> Self {
        Board {
            cells: [None; 9],
            used: [false; 10],
        }
    }

    /// Get the digit at a coordinate, if any.
    pub fn get(&self, at: Coord) -> Option<Digit> {
        self.cells[at.index()]
    }

    /// Check if a cell is empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    /// Check if a digit has been consumed (occupies some cell).
    pub fn is_used(&self, digit: Digit) -> bool {
        self.used[digit.index()]
    }

    /// Whether the shared 0 is still up for grabs.
    pub fn zero_available(&self) -> bool {
        !self.used[0]
    }

    /// Digits `side` can currently place, in scan order (own set
    /// ascending, 0 last).
    pub fn available_digits(&self, side: Side) -> Vec<Digit> {
        side.candidate_digits()
            .iter()
            .copied()
            .filter(|&d| !self.is_used(d))
            .collect()
    }

    /// All empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::all().filter(|&at| self.is_empty(at)).collect()
    }

    /// Number of digits placed so far (0-9).
    pub fn placed_count(&self) -> u8 {
        self.cells.iter().flatten().count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.placed_count() == 9
    }

    /// Commit a digit to a cell and mark it consumed.
    ///
    /// Structural checks only (occupancy and consumption); parity
    /// legality for a given side lives in [`crate::rules::check_placement`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CellOccupied`] or
    /// [`crate::Error::DigitAlreadyUsed`].
    pub fn place(&mut self, at: Coord, digit: Digit) -> Result<(), crate::Error> {
        if !self.is_empty(at) {
            return Err(crate::Error::CellOccupied {
                row: at.row,
                col: at.col,
            });
        }
        if self.is_used(digit) {
            return Err(crate::Error::DigitAlreadyUsed {
                digit: digit.value(),
            });
        }
        self.cells[at.index()] = Some(digit);
        self.used[digit.index()] = true;
        Ok(())
    }

    /// Clear a cell and release its digit back to the pool.
    ///
    /// Returns the removed digit, or `None` if the cell was empty.
    pub fn remove(&mut self, at: Coord) -> Option<Digit> {
        let digit = self.cells[at.index()].take()?;
        self.used[digit.index()] = false;
        Some(digit)
    }

    /// Provisionally place a digit, run `f`, then restore the cell and the
    /// pool flag. The restore sits on the single exit path, so recursive
    /// exploration and pruning breaks cannot leave a trial behind.
    pub fn with_trial<T>(&mut self, at: Coord, digit: Digit, f: impl FnOnce(&mut Board) -> T) -> T {
        debug_assert!(self.is_empty(at), "trial placement on an occupied cell");
        debug_assert!(!self.is_used(digit), "trial placement of a consumed digit");

        self.cells[at.index()] = Some(digit);
        self.used[digit.index()] = true;
        let result = f(self);
        self.cells[at.index()] = None;
        self.used[digit.index()] = false;
        result
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain nine cell characters (whitespace is filtered
    /// out): `.` or `-` for an empty cell, `0`-`9` for a placed digit. The
    /// consumed-digit pool is rebuilt from the cells.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than nine cell characters remain after
    /// filtering, if any character is not a valid cell representation, or
    /// if a digit appears more than once.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cleaned.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in cleaned.iter().take(9).enumerate() {
            match c {
                '.' | '-' => {}
                _ => {
                    let digit =
                        Digit::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                            character: c,
                            position: i,
                            context: s.to_string(),
                        })?;
                    if board.is_used(digit) {
                        return Err(crate::Error::DuplicateDigit {
                            digit: digit.value(),
                            context: s.to_string(),
                        });
                    }
                    board.cells[i] = Some(digit);
                    board.used[digit.index()] = true;
                }
            }
        }

        Ok(board)
    }

    /// Nine-character encoding of the cells (`.` for empty).
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or('.', Digit::to_char))
            .collect()
    }

    pub(crate) fn raw_cells(&self) -> &[Option<Digit>; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.map_or('.', Digit::to_char))?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
