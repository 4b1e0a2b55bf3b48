use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::color::Weights;
use crate::location::{Location, NotationError};
use crate::path::Path;

/// A winning weight assignment together with one witnessing path per board
/// orientation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    /// The satisfying weight assignment.
    pub weights: Weights,
    /// The witnessing path on the primary orientation.
    pub first: Path,
    /// The witnessing path on the reflected orientation.
    pub second: Path,
}

impl Solution {
    /// The minimum-sum solution among `solutions`, ties broken on the
    /// assignment itself so the choice is deterministic.
    pub fn minimal(solutions: &HashMap<Weights, (Path, Path)>) -> Option<Self> {
        solutions.iter()
            .min_by_key(|(weights, _)| (weights.sum(), **weights))
            .map(|(weights, (first, second))| Self {
                weights: *weights,
                first: first.clone(),
                second: second.clone(),
            })
    }
}

impl Display for Solution {
    /// `a,b,c` followed by the cells of both paths in algebraic notation,
    /// all comma-separated.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fields = self.weights.0.iter()
            .map(i64::to_string)
            .chain(self.first.cells().iter().map(Location::to_algebraic))
            .chain(self.second.cells().iter().map(Location::to_algebraic))
            .join(",");

        write!(f, "{}", fields)
    }
}

/// Parse a comma-separated cell list in algebraic notation back into a cell
/// sequence; the inverse of the path rendering in [`Solution`]'s [`Display`].
pub fn parse_cells(notation: &str) -> Result<Vec<Location>, NotationError> {
    notation.split(',').map(|cell| cell.trim().parse()).collect()
}
