#![warn(missing_docs)]

//! # `hippogonal`
//!
//! Path enumeration and integer weight search for knight-move scoring puzzles on colored grids.
//! Begin by building a board object with a builder such as [`GridBoardBuilder`](builder::GridBoardBuilder) in the [`builder`] module,
//! then either bundle it into a [`Puzzle`] and call [`run()`](crate::Puzzle::run), or drive the stages
//! ([`enumerate_paths`], [`dedupe`], [`solve`]) individually.
//!
//! The puzzle family this crate solves: each cell of an `n×n` board carries one of three color
//! classes, each class is assigned an unknown positive integer weight, and a trip along
//! knight moves accumulates a score: moving to a cell of the same color class ADDS that
//! cell's weight to the score, while moving to a different color class MULTIPLIES the score
//! by the new cell's weight. Sought is a weight assignment under which some trip from corner to
//! corner AND some trip between the vertically reflected corners both hit a target score,
//! usually minimizing the sum of the weights.
//!
//! `hippogonal` can operate on move sets beyond the knight's, as encoded by the `Sh` type parameter.
//! These must implement [`Step`](crate::shape::Step) and will automatically have [`BoardShape`](crate::shape::BoardShape) `impl`'d as well.
//!
//! # Internals
//! A high level overview is as follows:
//!
//! Given input, the builder expresses the board as an undirected graph whose vertices are
//! cells and whose edges encode single-move adjacency; every simple path between the trip
//! endpoints within the configured move bounds is enumerated by backtracking search over
//! that graph.
//!
//! Each path folds to a score expression kept as a normalized polynomial, a map from
//! monomial exponents to coefficients, so algebraically equal formulae are structurally
//! equal and paths group into score classes by plain map insertion. Weight search is then
//! exhaustive over the (small) integer cube, per class rather than per path: every
//! satisfying assignment is collected for each board orientation and the two sets
//! intersected, with the minimum-sum assignment selected last.

pub use board::{Board, BoardError};
pub use color::{Color, Weights};
pub use location::{Dimension, Location, NotationError};
pub use path::{enumerate_paths, Path};
pub use puzzle::{Puzzle, PuzzleError, SearchReport};
pub use score::{dedupe, score_of, ScoreClasses, ScoreExpression};
pub use solution::{parse_cells, Solution};
pub use solver::{satisfying_assignments, solve};

pub(crate) mod board;
mod tests;
pub(crate) mod color;
pub(crate) mod location;
pub(crate) mod path;
pub mod shape;
pub(crate) mod score;
pub mod builder;
pub(crate) mod solver;
pub(crate) mod solution;
pub mod cache;
pub(crate) mod puzzle;
