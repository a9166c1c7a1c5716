//! Point and player primitives.

use std::fmt;
use std::str::FromStr;

use crate::constants::COLUMN_LETTERS;
use crate::error::GoError;

/// Stone color, which doubles as the player to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The opposite color.
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("black"),
            Player::White => f.write_str("white"),
        }
    }
}

/// A board intersection, 1-based.
///
/// Points are plain coordinates and may lie off any particular board; only
/// [`Board::is_on_grid`](crate::board::Board::is_on_grid) knows the bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Point { row, col }
    }

    /// The 4 orthogonal neighbors (N, S, W, E), with no bounds checking.
    #[inline]
    pub fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.row - 1, self.col),
            Point::new(self.row + 1, self.col),
            Point::new(self.row, self.col - 1),
            Point::new(self.row, self.col + 1),
        ]
    }
}

/// Parse a Go Text Protocol vertex such as `"D4"` (column letter, then row).
///
/// Column letters skip `I`. `"C3"` is row 3, column 3.
impl FromStr for Point {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GoError::InvalidCoordinate(s.to_string());

        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        let col = COLUMN_LETTERS
            .iter()
            .position(|&c| c as char == letter)
            .ok_or_else(invalid)?;

        let row: i32 = chars.as_str().parse().map_err(|_| invalid())?;
        if row < 1 {
            return Err(invalid());
        }

        Ok(Point::new(row, col as i32 + 1))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = usize::try_from(self.col - 1)
            .ok()
            .and_then(|i| COLUMN_LETTERS.get(i));
        match letter {
            Some(&c) if self.row >= 1 => write!(f, "{}{}", c as char, self.row),
            // No vertex name exists for this point.
            _ => write!(f, "({},{})", self.row, self.col),
        }
    }
}
