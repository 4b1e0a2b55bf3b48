use std::ops::RangeInclusive;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardError};
use crate::location::{Dimension, Location};
use crate::shape::BoardShape;

/// An ordered sequence of distinct cells, each consecutive pair one step apart.
///
/// Paths never revisit a cell, including their endpoints.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Path(pub(crate) Vec<Location>);

impl Path {
    /// The cells of this path, in trip order.
    pub fn cells(&self) -> &[Location] {
        &self.0
    }

    /// Path length counted in moves; the single-cell path has length 0.
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// This path reflected vertically on a board of the given height.
    pub fn flipped(&self, height: Dimension) -> Self {
        Self(self.0.iter()
            .map(|location| Location(location.0, height.get() - 1 - location.1))
            .collect())
    }
}

impl From<Vec<Location>> for Path {
    fn from(value: Vec<Location>) -> Self {
        Self(value)
    }
}

/// Every simple path from `start` to `end` whose move count lies in `moves`
/// (bounds inclusive).
///
/// Backtracking depth-first search over the board graph with a single shared
/// buffer, pushed on entry and popped on every exit. A branch reaching `end`
/// is emitted when its length is within bounds and never extended further:
/// cells may not repeat, so leaving `end` can never produce a second arrival.
///
/// Zero paths is a valid result, not an error; an empty `moves` range yields
/// zero paths.
pub fn enumerate_paths<Sh: BoardShape>(
    board: &Board<Sh>,
    start: Location,
    end: Location,
    moves: RangeInclusive<usize>,
) -> Result<Vec<Path>, BoardError> {
    for endpoint in [start, end] {
        if !board.contains(endpoint) {
            return Err(BoardError::LocationOutOfBounds(endpoint));
        }
    }

    let mut found = Vec::new();
    let mut buffer = vec![start];
    extend(board, end, &moves, &mut buffer, &mut found);

    debug!(
        "{} simple paths from {} to {} within {:?} moves",
        found.len(),
        start.to_algebraic(),
        end.to_algebraic(),
        moves
    );

    Ok(found)
}

fn extend<Sh: BoardShape>(
    board: &Board<Sh>,
    end: Location,
    moves: &RangeInclusive<usize>,
    buffer: &mut Vec<Location>,
    found: &mut Vec<Path>,
) {
    let current = *buffer.last().unwrap();

    if current == end {
        if moves.contains(&(buffer.len() - 1)) {
            found.push(Path(buffer.clone()));
        }
        return;
    }

    if buffer.len() - 1 >= *moves.end() {
        return;
    }

    for neighbor in board.graph.neighbors(current) {
        if buffer.contains(&neighbor) {
            continue;
        }

        buffer.push(neighbor);
        extend(board, end, moves, buffer, found);
        buffer.pop();
    }
}
