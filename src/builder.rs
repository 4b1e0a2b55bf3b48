//! Builders validating color rows and assembling [`Board`]s with their
//! adjacency graphs.

use std::num::NonZero;

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;

use crate::board::{Board, Edge};
use crate::color::Color;
use crate::location::{Dimension, Location};
use crate::shape::{BoardShape, KnightStep, Step};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A pushed row does not match the width specified by `dims` on a builder.
    RowWidthMismatch,
    /// More rows were pushed than the height specified by `dims`.
    TooManyRows,
    /// Fewer rows were pushed than the height specified by `dims`.
    MissingRows,
    /// A row contained a character naming no color class.
    UnknownColor(char),
}

/// Functionality all builders must implement, parametrised over the move set `Sh` of the resulting board.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
pub trait Builder<Sh: BoardShape>: Clone {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(x, y)` order.
    fn with_dims(dims: (Dimension, Dimension)) -> Self;
    /// Push the next row of color cells, topmost first, one character per cell.
    ///
    /// May cause the builder to enter an invalid state if the row is the wrong
    /// width, names an unknown color, or overflows the configured height.
    /// If the builder is already in an invalid state, this function does nothing.
    fn push_row(&mut self, row: &str) -> &mut Self;
    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>>;
    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    fn build(&self) -> Result<Board<Sh>, Vec<BuilderInvalidReason>>;
}

/// A builder for square-celled boards traversed by knight moves.
#[derive(Clone)]
pub struct GridBoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    rows: Vec<Vec<Color>>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for GridBoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(6).unwrap(), NonZero::new(6).unwrap()))
    }
}

impl Builder<KnightStep> for GridBoardBuilder {
    fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            rows: Vec::with_capacity(dims.1.get()),
            invalid_reasons: Default::default(),
        }
    }

    fn push_row(&mut self, row: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.rows.len() == self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::TooManyRows);
            return self;
        }

        let mut cells = Vec::with_capacity(self.dims.0.get());
        for ch in row.chars() {
            match Color::try_from(ch) {
                Ok(color) => cells.push(color),
                Err(other) => {
                    self.invalid_reasons.push(BuilderInvalidReason::UnknownColor(other));
                    return self;
                }
            }
        }

        if cells.len() != self.dims.0.get() {
            self.invalid_reasons.push(BuilderInvalidReason::RowWidthMismatch);
            return self;
        }

        self.rows.push(cells);
        self
    }

    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn build(&self) -> Result<Board<KnightStep>, Vec<BuilderInvalidReason>> {
        let mut reasons = self.invalid_reasons.clone();
        if reasons.is_empty() && self.rows.len() != self.dims.1.get() {
            reasons.push(BuilderInvalidReason::MissingRows);
        }
        if !reasons.is_empty() {
            return Err(reasons);
        }

        let (width, height) = (self.dims.0.get(), self.dims.1.get());

        let mut graph = UnGraphMap::with_capacity(
            width * height,
            // a knight has at most eight exits; each edge is shared by two cells
            width * height * 4,
        );

        for y in 0..height {
            for x in 0..width {
                graph.add_node(Location(x, y));
            }
        }

        for y in 0..height {
            for x in 0..width {
                let location = Location(x, y);
                for direction in KnightStep::FORWARD_VARIANTS {
                    let destination = direction.attempt_from(location);
                    if destination.0 < width && destination.1 < height {
                        graph.add_edge(location, destination, Edge { direction: *direction });
                    }
                }
            }
        }

        // row and width counts were validated above
        let cells = Array2::from_shape_vec((height, width), self.rows.concat()).unwrap();

        Ok(Board {
            graph,
            cells,
            dims: self.dims,
        })
    }
}

impl GridBoardBuilder {
    /// Construct a builder with dimensions taken from `rows` (width from the
    /// first row) and every row pushed.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);

        match (NonZero::new(width), NonZero::new(rows.len())) {
            (Some(w), Some(h)) => {
                let mut builder = Self::with_dims((w, h));
                for row in rows {
                    builder.push_row(row);
                }
                builder
            }
            _ => {
                let mut builder = Self::with_dims((NonZero::new(1).unwrap(), NonZero::new(1).unwrap()));
                builder.invalid_reasons.push(BuilderInvalidReason::MissingRows);
                builder
            }
        }
    }
}
