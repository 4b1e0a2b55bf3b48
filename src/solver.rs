use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};

use itertools::{iproduct, Itertools};
use log::{debug, info};

use crate::color::Weights;
use crate::path::Path;
use crate::score::{Monomial, ScoreClasses, ScoreExpression};

/// All weight assignments in the `weights` cube under which some expression
/// on each side evaluates to `target`, keyed to one witnessing path per side.
///
/// Both sides are scanned independently and their satisfying sets
/// intersected; this visits each (expression, assignment) pair once instead
/// of once per expression pair, and returns the identical assignment set.
/// Every satisfying assignment is collected; callers pick the optimum
/// afterwards.
///
/// `stop` is polled between cube scans; raising it returns the assignments
/// gathered so far rather than discarding them. An empty result means no
/// satisfying weights, which is a valid terminal outcome.
pub fn solve(
    side_one: &ScoreClasses,
    side_two: &ScoreClasses,
    target: i64,
    weights: RangeInclusive<i64>,
    stop: &AtomicBool,
) -> HashMap<Weights, (Path, Path)> {
    let first = satisfying_assignments(side_one, target, weights.clone(), stop);
    let second = satisfying_assignments(side_two, target, weights, stop);

    let mut joint = HashMap::new();
    for (assignment, path_one) in first {
        if let Some(path_two) = second.get(&assignment) {
            joint.insert(assignment, (path_one, path_two.clone()));
        }
    }

    info!("{} joint satisfying assignments", joint.len());

    joint
}

/// Assignments in the `weights` cube under which any expression in `classes`
/// evaluates to `target`, each keyed to one witnessing path.
pub fn satisfying_assignments(
    classes: &ScoreClasses,
    target: i64,
    weights: RangeInclusive<i64>,
    stop: &AtomicBool,
) -> HashMap<Weights, Path> {
    let mut satisfying: HashMap<Weights, Path> = HashMap::new();

    for (expression, paths) in classes {
        if stop.load(Ordering::Relaxed) {
            debug!("interrupted; keeping the {} assignments gathered so far", satisfying.len());
            break;
        }

        let witness = match paths.first() {
            Some(path) => path,
            None => continue,
        };

        let evaluator = CompiledExpression::new(expression, weights.clone());
        for (a, b, c) in iproduct!(weights.clone(), weights.clone(), weights.clone()) {
            let assignment = Weights([a, b, c]);
            if evaluator.eval(assignment) == target {
                satisfying.entry(assignment).or_insert_with(|| witness.clone());
            }
        }
    }

    satisfying
}

/// A score expression lowered to a flat term list with per-variable power
/// tables over the scanned range, so the cube loop avoids repeated `pow`.
struct CompiledExpression {
    min: i64,
    terms: Vec<(i64, Monomial)>,
    // powers[variable][exponent][weight - min]
    powers: [Vec<Vec<i64>>; 3],
}

impl CompiledExpression {
    fn new(expression: &ScoreExpression, weights: RangeInclusive<i64>) -> Self {
        let terms = expression.terms()
            .map(|(monomial, coefficient)| (*coefficient, *monomial))
            .collect_vec();

        let powers = std::array::from_fn(|variable| {
            let max_exponent = terms.iter()
                .map(|(_, monomial)| monomial[variable])
                .max()
                .unwrap_or(0);

            (0..=max_exponent)
                .map(|exponent| weights.clone().map(|weight| weight.pow(exponent)).collect())
                .collect()
        });

        Self {
            min: *weights.start(),
            terms,
            powers,
        }
    }

    fn eval(&self, assignment: Weights) -> i64 {
        self.terms.iter()
            .map(|(coefficient, exponents)| {
                let mut product = *coefficient;
                for variable in 0..3 {
                    let index = (assignment.0[variable] - self.min) as usize;
                    product *= self.powers[variable][exponents[variable] as usize][index];
                }
                product
            })
            .sum()
    }
}
