//! Combination rules for merging independent evidence
//!
//! A rule folds a category's weights into one score, starting from the
//! rule's identity element. The engine stores raw observations; the rule is
//! the lens that turns them into a score.

/// Pluggable combination rule.
pub trait CombinationRule: Send + Sync {
    /// The accumulator's starting value; `combine(identity, y) == y`.
    fn identity(&self) -> f64 {
        0.0
    }

    /// Merge one more weight into the accumulator.
    fn combine(&self, acc: f64, weight: f64) -> f64;

    /// Left fold of `weights` from the identity element.
    ///
    /// An empty sequence reduces to the identity.
    fn reduce(&self, weights: &[f64]) -> f64 {
        weights
            .iter()
            .fold(self.identity(), |acc, &w| self.combine(acc, w))
    }
}

/// Default: the probabilistic (algebraic) sum t-conorm.
///
/// `S(x, y) = x + y - x·y`
///
/// Fuzzy-logic OR: 0 is the identity, 1 saturates, and the result never
/// decreases as observations are added. Bounded in [0, 1] when every weight
/// is. Out-of-range weights are not rejected here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbabilisticSum;

impl CombinationRule for ProbabilisticSum {
    fn combine(&self, acc: f64, weight: f64) -> f64 {
        probabilistic_sum(acc, weight)
    }
}

/// `x + y - x·y`
pub fn probabilistic_sum(x: f64, y: f64) -> f64 {
    x + y - x * y
}
