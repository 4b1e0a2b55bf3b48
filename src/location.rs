use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub(crate) type Coord = usize;

/// A board dimension; zero-sized boards are unrepresentable.
pub type Dimension = NonZero<Coord>;

/// A location `(x, y)` on a board. The top left corner is `Location(0, 0)`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Serialize, Deserialize)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Render in algebraic notation: column letter from x, 1-indexed row from y.
    /// `Location(0, 0)` is "a1"; `Location(5, 5)` is "f6".
    ///
    /// Only the 26 columns `a` through `z` are expressible.
    pub fn to_algebraic(&self) -> String {
        debug_assert!(self.0 < 26);
        format!("{}{}", (b'a' + self.0 as u8) as char, self.1 + 1)
    }
}

/// Reasons a cell in algebraic notation fails to parse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NotationError {
    /// The input was empty.
    Empty,
    /// The column character is not a lowercase letter.
    BadColumn(char),
    /// The row is not a positive integer.
    BadRow(String),
}

impl Display for NotationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty cell notation"),
            Self::BadColumn(c) => write!(f, "bad column character {:?}", c),
            Self::BadRow(s) => write!(f, "bad row number {:?}", s),
        }
    }
}

impl std::error::Error for NotationError {}

impl FromStr for Location {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column = match chars.next() {
            Some(c @ 'a'..='z') => c as usize - 'a' as usize,
            Some(other) => return Err(NotationError::BadColumn(other)),
            None => return Err(NotationError::Empty),
        };

        let rest = chars.as_str();
        let row: usize = rest.parse().map_err(|_| NotationError::BadRow(rest.to_string()))?;
        if row == 0 {
            return Err(NotationError::BadRow(rest.to_string()));
        }

        Ok(Self(column, row - 1))
    }
}

