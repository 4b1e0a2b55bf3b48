use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;
use strum::VariantArray;

use crate::board::{Board, BoardError};
use crate::color::{Color, Weights};
use crate::path::Path;
use crate::shape::BoardShape;

/// Exponents of one monomial, indexed like [`Weights`].
pub(crate) type Monomial = [u32; 3];

/// A score formula as a normalized multivariate polynomial over the three
/// weight variables: monomial exponents mapped to integer coefficients, zero
/// coefficients never stored.
///
/// Because the representation is normalized, two formulae built along
/// different paths compare equal exactly when they are algebraically equal,
/// however each was constructed.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct ScoreExpression {
    terms: BTreeMap<Monomial, i64>,
}

impl ScoreExpression {
    pub(crate) fn zero() -> Self {
        Self::default()
    }

    /// Whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_terms(terms: impl IntoIterator<Item = (Monomial, i64)>) -> Self {
        Self {
            terms: terms.into_iter().filter(|(_, coefficient)| *coefficient != 0).collect(),
        }
    }

    pub(crate) fn terms(&self) -> impl Iterator<Item = (&Monomial, &i64)> {
        self.terms.iter()
    }

    // score += variable
    fn add_var(&mut self, color: Color) {
        let mut exponents = [0u32; 3];
        exponents[color.index()] = 1;
        *self.terms.entry(exponents).or_insert(0) += 1;
    }

    // score *= variable
    fn mul_var(&mut self, color: Color) {
        let terms = std::mem::take(&mut self.terms);
        self.terms = terms.into_iter()
            .map(|(mut exponents, coefficient)| {
                exponents[color.index()] += 1;
                (exponents, coefficient)
            })
            .collect();
    }

    /// Substitute a concrete weight assignment.
    pub fn eval(&self, weights: Weights) -> i64 {
        self.terms.iter()
            .map(|(exponents, coefficient)| {
                coefficient
                    * exponents.iter()
                        .zip(weights.0)
                        .map(|(exponent, weight)| weight.pow(*exponent))
                        .product::<i64>()
            })
            .sum()
    }
}

impl Display for ScoreExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let rendered = self.terms.iter()
            .rev()
            .map(|(exponents, coefficient)| {
                let mut factors = Vec::new();
                if *coefficient != 1 || exponents.iter().all(|exponent| *exponent == 0) {
                    factors.push(coefficient.to_string());
                }

                for (color, exponent) in Color::VARIANTS.iter().zip(exponents) {
                    match exponent {
                        0 => {}
                        1 => factors.push(color.symbol().to_string()),
                        more => factors.push(format!("{}^{}", color.symbol(), more)),
                    }
                }

                factors.join("*")
            })
            .join(" + ");

        write!(f, "{}", rendered)
    }
}

/// Fold `path` into its score expression: a cell matching the previous cell's
/// color ADDS its weight variable to the running expression, a cell changing
/// color MULTIPLIES the running expression by its weight variable.
///
/// The first cell has no predecessor and always adds.
pub fn score_of<Sh: BoardShape>(board: &Board<Sh>, path: &Path) -> Result<ScoreExpression, BoardError> {
    let mut score = ScoreExpression::zero();
    let mut previous: Option<Color> = None;

    for location in path.cells() {
        let color = board.color_at(*location)?;
        match previous {
            Some(last) if last != color => score.mul_var(color),
            _ => score.add_var(color),
        }
        previous = Some(color);
    }

    Ok(score)
}

/// Paths grouped by algebraic equality of their score expressions.
pub type ScoreClasses = HashMap<ScoreExpression, Vec<Path>>;

/// Group `paths` by the score expression they fold to.
///
/// Expressions are normalized on construction, so two paths land in the same
/// class exactly when their formulae are algebraically equal: `a + b*c` and
/// `b*c + a` collapse, whatever order their terms accumulated in.
pub fn dedupe<Sh: BoardShape>(board: &Board<Sh>, paths: &[Path]) -> Result<ScoreClasses, BoardError> {
    let mut classes: ScoreClasses = HashMap::new();
    for path in paths {
        classes.entry(score_of(board, path)?).or_default().push(path.clone());
    }

    debug!("{} paths fold to {} distinct score expressions", paths.len(), classes.len());

    Ok(classes)
}
