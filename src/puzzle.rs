use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::sync::atomic::AtomicBool;

use log::info;

use crate::board::{Board, BoardError};
use crate::color::Weights;
use crate::location::Location;
use crate::path::{enumerate_paths, Path};
use crate::score::{dedupe, ScoreClasses};
use crate::shape::BoardShape;
use crate::solution::Solution;
use crate::solver;

/// Reasons a [`Puzzle`] cannot be constructed or run.
#[derive(Debug)]
pub enum PuzzleError {
    /// A trip endpoint lies outside the board.
    EndpointOutOfBounds(Location),
    /// The move bounds exclude every length.
    EmptyMoveRange(RangeInclusive<usize>),
    /// A coordinate query failed mid-pipeline.
    Board(BoardError),
}

impl Display for PuzzleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndpointOutOfBounds(location) => {
                write!(f, "trip endpoint ({}, {}) is outside the board", location.0, location.1)
            }
            Self::EmptyMoveRange(moves) => write!(f, "move bounds {:?} admit no length", moves),
            Self::Board(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl From<BoardError> for PuzzleError {
    fn from(value: BoardError) -> Self {
        Self::Board(value)
    }
}

/// One full problem instance: the board, the trip endpoints, the move
/// bounds, the score target, and the weight search range.
///
/// Both trips share the same endpoints up to vertical reflection: the first
/// runs `start → end` as given, the second runs between their reflections.
pub struct Puzzle<Sh>
where
    Sh: BoardShape,
{
    board: Board<Sh>,
    start: Location,
    end: Location,
    moves: RangeInclusive<usize>,
    target: i64,
    weights: RangeInclusive<i64>,
}

/// Everything a finished pipeline run produced.
pub struct SearchReport {
    /// Every simple path enumerated for the primary orientation.
    pub paths: Vec<Path>,
    /// Score classes per orientation (primary, reflected).
    pub classes: (ScoreClasses, ScoreClasses),
    /// Every satisfying assignment with one witnessing path per orientation.
    ///
    /// Empty means no satisfying weights in range, a valid terminal result.
    pub solutions: HashMap<Weights, (Path, Path)>,
    /// The minimum-sum solution, if any assignment satisfied both trips.
    pub best: Option<Solution>,
}

impl<Sh> Puzzle<Sh>
where
    Sh: BoardShape,
{
    /// Validate and bundle a problem instance.
    ///
    /// Rejects endpoints outside `board` and inverted move bounds.
    pub fn new(
        board: Board<Sh>,
        start: Location,
        end: Location,
        moves: RangeInclusive<usize>,
        target: i64,
        weights: RangeInclusive<i64>,
    ) -> Result<Self, PuzzleError> {
        for endpoint in [start, end] {
            if !board.contains(endpoint) {
                return Err(PuzzleError::EndpointOutOfBounds(endpoint));
            }
        }

        if moves.is_empty() {
            return Err(PuzzleError::EmptyMoveRange(moves));
        }

        Ok(Self {
            board,
            start,
            end,
            moves,
            target,
            weights,
        })
    }

    /// The board this puzzle runs on.
    pub fn board(&self) -> &Board<Sh> {
        &self.board
    }

    /// Run the full pipeline: enumerate simple paths, fold and dedup score
    /// expressions for both orientations, then search the weight cube for
    /// assignments satisfying both trips at once.
    ///
    /// `stop` may be raised from another thread to cut the weight search
    /// short; assignments found before that are still reported.
    pub fn run(&self, stop: &AtomicBool) -> Result<SearchReport, PuzzleError> {
        let paths = enumerate_paths(&self.board, self.start, self.end, self.moves.clone())?;
        info!(
            "{} simple paths from {} to {}",
            paths.len(),
            self.start.to_algebraic(),
            self.end.to_algebraic()
        );

        let side_one = dedupe(&self.board, &paths)?;
        let reflected = paths.iter()
            .map(|path| path.flipped(self.board.dims().1))
            .collect::<Vec<_>>();
        let side_two = dedupe(&self.board, &reflected)?;
        info!("score classes: {} primary, {} reflected", side_one.len(), side_two.len());

        let solutions = solver::solve(&side_one, &side_two, self.target, self.weights.clone(), stop);
        let best = Solution::minimal(&solutions);

        Ok(SearchReport {
            paths,
            classes: (side_one, side_two),
            solutions,
            best,
        })
    }
}
