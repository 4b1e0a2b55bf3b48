#![warn(missing_docs)]

//! Monte Carlo estimation of a geometric probability: sample two points
//! uniformly in the unit square and test whether some point on the side of
//! the square nearest the first is equidistant from both, i.e. whether the
//! perpendicular bisector of the pair crosses that side.
//!
//! Trials are independent and pure; [`estimate`] partitions them into equal
//! chunks across a worker pool and sums successes after all workers finish.

use std::fmt::{Display, Formatter};

use rand::Rng;
use rayon::prelude::*;

/// A point in the unit square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate in `[0, 1)`.
    pub x: f64,
    /// Vertical coordinate in `[0, 1)`.
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

fn midpoint(p1: Point, p2: Point) -> Point {
    Point {
        x: (p1.x + p2.x) / 2.0,
        y: (p1.y + p2.y) / 2.0,
    }
}

fn gradient(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y) / (p2.x - p1.x)
}

fn nearest_side(p: Point) -> Side {
    let Point { x, y } = p;

    if y <= x && y < 1.0 - x {
        Side::Bottom
    } else if y > x && y <= 1.0 - x {
        Side::Left
    } else if y >= x && y > 1.0 - x {
        Side::Top
    } else if y < x && y >= 1.0 - x {
        Side::Right
    } else {
        // the exact center is equidistant from all four sides
        Side::Bottom
    }
}

/// Reasons a trial cannot be decided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrialError {
    /// Identical points do not define a bisector.
    DegenerateSegment,
}

impl Display for TrialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateSegment => write!(f, "identical points do not define a bisector"),
        }
    }
}

impl std::error::Error for TrialError {}

/// Whether the perpendicular bisector of `blue` and `red` crosses the side
/// of the unit square nearest `blue`.
pub fn bisector_reaches_nearest_side(blue: Point, red: Point) -> Result<bool, TrialError> {
    if blue == red {
        return Err(TrialError::DegenerateSegment);
    }

    let side = nearest_side(blue);
    let mid = midpoint(blue, red);

    // the bisector runs perpendicular to the segment, through its midpoint
    let slope = -1.0 / gradient(red, blue);
    let intercept = slope * -mid.x + mid.y;

    // where the bisector meets the side's supporting line, as a coordinate
    // along that side
    let crossing = match side {
        Side::Bottom => -intercept / slope,
        Side::Left => intercept,
        Side::Top => (1.0 - intercept) / slope,
        Side::Right => slope + intercept,
    };

    Ok((0.0..=1.0).contains(&crossing))
}

/// Run `n` independent trials with `rng`, counting successes.
///
/// The measure-zero degenerate draw (two identical points) counts as a
/// failure.
pub fn run_trials(n: u64, rng: &mut impl Rng) -> u64 {
    let mut successes = 0;

    for _ in 0..n {
        let blue = Point {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
        };
        let red = Point {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
        };

        if let Ok(true) = bisector_reaches_nearest_side(blue, red) {
            successes += 1;
        }
    }

    successes
}

/// Successes over the trials actually run.
#[derive(Clone, Copy, Debug)]
pub struct Estimate {
    /// Trials whose bisector reached the nearest side.
    pub successes: u64,
    /// Trials run across all workers.
    pub trials: u64,
}

impl Estimate {
    /// The estimated probability, weighted by the trial count actually run.
    pub fn ratio(&self) -> f64 {
        self.successes as f64 / self.trials as f64
    }
}

/// Partition `total` trials into `workers` equal chunks, run the chunks on
/// the worker pool, and sum successes once every worker completes.
///
/// Trials that do not divide evenly are dropped, so the reported ratio is
/// weighted by [`Estimate::trials`], not `total`. Each worker draws from its
/// own thread-local generator; no state is shared.
pub fn estimate(total: u64, workers: u64) -> Estimate {
    let per_worker = total / workers;
    let trials = per_worker * workers;

    let successes = (0..workers)
        .into_par_iter()
        .map(|_| run_trials(per_worker, &mut rand::thread_rng()))
        .sum();

    Estimate { successes, trials }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod bisector {
        use super::*;

        #[test]
        fn identical_points_are_rejected() {
            let blue = Point { x: 0.0, y: 0.0 };
            let red = Point { x: 0.0, y: 0.0 };

            assert_eq!(
                bisector_reaches_nearest_side(blue, red),
                Err(TrialError::DegenerateSegment)
            );
        }

        #[test]
        fn vertical_pair_misses_bottom_edge() {
            let blue = Point { x: 0.5, y: 0.2 };
            let red = Point { x: 0.5, y: 0.8 };

            assert_eq!(bisector_reaches_nearest_side(blue, red), Ok(false));
        }

        #[test]
        fn crossing_on_top_edge() {
            let blue = Point { x: 0.41903142181567776, y: 0.6453315775286078 };
            let red = Point { x: 0.7049400139371284, y: 0.8198186859873597 };

            assert_eq!(bisector_reaches_nearest_side(blue, red), Ok(true));
        }

        #[test]
        fn crossing_on_left_edge() {
            let blue = Point { x: 0.24847643665677582, y: 0.2975835100602469 };
            let red = Point { x: 0.11274437235696835, y: 0.7160251321672993 };

            assert_eq!(bisector_reaches_nearest_side(blue, red), Ok(true));
        }
    }

    mod geometry {
        use super::*;

        #[test]
        fn midpoint_splits_the_segment() {
            let p1 = Point { x: 0.0, y: 0.0 };
            let p2 = Point { x: 2.0, y: 2.0 };

            assert_eq!(midpoint(p1, p2), Point { x: 1.0, y: 1.0 });
        }

        #[test]
        fn each_quadrant_claims_its_side() {
            assert_eq!(nearest_side(Point { x: 0.5, y: 0.1 }), Side::Bottom);
            assert_eq!(nearest_side(Point { x: 0.1, y: 0.5 }), Side::Left);
            assert_eq!(nearest_side(Point { x: 0.5, y: 0.9 }), Side::Top);
            assert_eq!(nearest_side(Point { x: 0.9, y: 0.5 }), Side::Right);
        }
    }

    mod estimation {
        use super::*;

        #[test]
        fn uneven_totals_are_truncated() {
            let estimate = estimate(1001, 10);
            assert_eq!(estimate.trials, 1000);
        }

        #[test]
        fn ratio_lands_near_the_expected_probability() {
            // the analytic value is ≈ 0.4914; a quarter million trials keep
            // the sample comfortably inside this band
            let estimate = estimate(250_000, 10);
            let ratio = estimate.ratio();
            assert!(ratio > 0.46 && ratio < 0.52, "ratio was {}", ratio);
        }
    }
}
