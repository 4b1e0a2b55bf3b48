use std::fmt::{Display, Formatter};

use ndarray::{Array2, Axis};
use petgraph::graphmap::UnGraphMap;

use crate::color::Color;
use crate::location::{Dimension, Location};
use crate::shape::{BoardShape, Step};

/// An edge of the adjacency graph.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub(crate) struct Edge<Sh> {
    // direction as attempted from the cell the builder inserted it from
    pub(crate) direction: Sh,
}

/// Reasons a coordinate query on a [`Board`] may fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BoardError {
    /// The queried location lies outside the board bounds.
    LocationOutOfBounds(Location),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationOutOfBounds(location) => {
                write!(f, "location ({}, {}) is outside the board", location.0, location.1)
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A colored board whose cells are connected as specified by `Sh`.
/// See the [`Step`](crate::shape::Step) and [`BoardShape`] traits for more information.
///
/// [`Board`]s should be built using a [`Builder`](crate::builder::Builder) such as [`GridBoardBuilder`](crate::builder::GridBoardBuilder).
/// Once built, a board is immutable and shared read-only by every search operation.
pub struct Board<Sh>
where
    Sh: BoardShape,
{
    pub(crate) graph: UnGraphMap<Location, Edge<Sh>>,
    pub(crate) cells: Array2<Color>,
    pub(crate) dims: (Dimension, Dimension),
}

impl<Sh> Board<Sh>
where
    Sh: BoardShape,
{
    /// This board's dimensions, in `(width, height)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Whether `location` lies within this board.
    pub fn contains(&self, location: Location) -> bool {
        location.0 < self.dims.0.get() && location.1 < self.dims.1.get()
    }

    /// The color class at `location`.
    ///
    /// Out-of-bounds locations are rejected, never clamped.
    pub fn color_at(&self, location: Location) -> Result<Color, BoardError> {
        self.cells
            .get(location.as_index())
            .copied()
            .ok_or(BoardError::LocationOutOfBounds(location))
    }

    /// All cells reachable from `location` by a single step, per the adjacency graph.
    pub fn neighbors(&self, location: Location) -> Result<Vec<Location>, BoardError> {
        if !self.contains(location) {
            return Err(BoardError::LocationOutOfBounds(location));
        }

        Ok(self.graph.neighbors(location).collect())
    }

    /// The step direction connecting two adjacent cells, oriented from `a` to `b`,
    /// or [`None`] if no edge joins them.
    pub fn step_between(&self, a: Location, b: Location) -> Option<Sh> {
        self.graph.edge_weight(a, b).map(|edge| {
            match edge.direction.attempt_from(a) == b {
                true => edge.direction,
                false => edge.direction.invert(),
            }
        })
    }

    /// This board reflected vertically (`y → height - 1 - y`).
    ///
    /// The adjacency graph is symmetric under reflection, so only the color
    /// rows change.
    pub fn flipped(&self) -> Self {
        let mut cells = self.cells.clone();
        cells.invert_axis(Axis(0));

        Self {
            graph: self.graph.clone(),
            cells,
            dims: self.dims,
        }
    }
}

impl<Sh: BoardShape> Display for Board<Sh> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
