//! Move sets as types: the [`Step`] trait and the knight's implementation.

use std::hash::Hash;

use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// Functionality that must be implemented on a case-by-case basis for any move set.
///
/// [`KnightStep`] is the built-in implementation.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside any particular board; callers filter against their own bounds.
    fn attempt_from(&self, location: Location) -> Location;
    /// The static array of all "forward" directions.
    ///
    /// Forward directions should be those which, upon stepping from one location to another, cause the destination location to be indexed higher than the origin location.
    /// Attempting only these from every cell inserts each undirected edge exactly once.
    const FORWARD_VARIANTS: &'static [Self];
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;
}

/// The knight move set: the eight offsets with deltas `(±1, ±2)` and `(±2, ±1)`.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum KnightStep {
    /// `(-1, -2)`
    UpUpLeft,
    /// `(1, -2)`
    UpUpRight,
    /// `(-2, -1)`
    LeftLeftUp,
    /// `(2, -1)`
    RightRightUp,
    /// `(-2, 1)`
    LeftLeftDown,
    /// `(2, 1)`
    RightRightDown,
    /// `(-1, 2)`
    DownDownLeft,
    /// `(1, 2)`
    DownDownRight,
}

impl Step for KnightStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::UpUpLeft => location.offset_by((-1, -2)),
            Self::UpUpRight => location.offset_by((1, -2)),
            Self::LeftLeftUp => location.offset_by((-2, -1)),
            Self::RightRightUp => location.offset_by((2, -1)),
            Self::LeftLeftDown => location.offset_by((-2, 1)),
            Self::RightRightDown => location.offset_by((2, 1)),
            Self::DownDownLeft => location.offset_by((-1, 2)),
            Self::DownDownRight => location.offset_by((1, 2)),
        }
    }

    // a knight move never keeps y constant, so the four downward variants cover every edge
    const FORWARD_VARIANTS: &'static [Self] = &[
        Self::LeftLeftDown,
        Self::RightRightDown,
        Self::DownDownLeft,
        Self::DownDownRight,
    ];

    fn invert(&self) -> Self {
        match self {
            Self::UpUpLeft => Self::DownDownRight,
            Self::UpUpRight => Self::DownDownLeft,
            Self::LeftLeftUp => Self::RightRightDown,
            Self::RightRightUp => Self::LeftLeftDown,
            Self::LeftLeftDown => Self::RightRightUp,
            Self::RightRightDown => Self::LeftLeftUp,
            Self::DownDownLeft => Self::UpUpRight,
            Self::DownDownRight => Self::UpUpLeft,
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation across all move sets.
pub trait BoardShape: Step {
    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction in `Self::VARIANTS`.
    ///
    /// No bounds are applied; destinations outside a board are the caller's problem.
    fn steps_from(location: Location) -> Vec<(Self, Location)>;
    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Step::attempt_from) until one works.
    ///
    /// Returns [`None`] when no single step connects the two locations.
    fn direction_to(a: Location, b: Location) -> Option<Self>;
    /// Convert this [`Self`] to a "forward" direction, if it is not already such a direction.
    ///
    /// For the definition of forward directions, see [`Step::FORWARD_VARIANTS`].
    fn ensure_forward(&self) -> Self;
}

impl<Sh> BoardShape for Sh
where
    Sh: Step,
{
    fn steps_from(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }

    fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    fn ensure_forward(&self) -> Self {
        match Self::FORWARD_VARIANTS.contains(self) {
            true => *self,
            false => self.invert(),
        }
    }
}
