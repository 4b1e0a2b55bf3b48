use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::VariantArray;

/// One of the three color classes partitioning a board's cells.
///
/// Each color maps to one weight variable in score expressions; the variable
/// symbol is the lowercase form of the color letter.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray, Serialize, Deserialize)]
pub enum Color {
    /// Color class `A`, weight variable `a`.
    A,
    /// Color class `B`, weight variable `b`.
    B,
    /// Color class `C`, weight variable `c`.
    C,
}

impl Color {
    /// The weight variable symbol for this color, as seen in rendered expressions.
    pub fn symbol(&self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
        }
    }

    #[inline]
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<char> for Color {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            other => Err(other),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol().to_ascii_uppercase())
    }
}

/// A concrete assignment of integer weights, one per color, indexed in
/// [`Color`] variant order.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Weights(pub [i64; 3]);

impl Weights {
    /// The weight assigned to `color`.
    pub fn get(&self, color: Color) -> i64 {
        self.0[color.index()]
    }

    /// The sum of all three weights, the quantity minimized when choosing
    /// among satisfying assignments.
    pub fn sum(&self) -> i64 {
        self.0.iter().sum()
    }
}

impl From<(i64, i64, i64)> for Weights {
    fn from(value: (i64, i64, i64)) -> Self {
        Self([value.0, value.1, value.2])
    }
}

impl Display for Weights {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
