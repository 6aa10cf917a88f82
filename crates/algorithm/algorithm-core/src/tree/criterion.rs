//! Split quality measures for regression trees.

use std::fmt;
use std::str::FromStr;

use algorithm_spi::AlgorithmError;
use serde::{Deserialize, Serialize};

use crate::utils::validation::{mean, median};

/// Function measuring the quality of a split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// Sum of squared deviations from the node mean
    #[default]
    SquaredError,
    /// Friedman's improvement score over mean difference of the children
    FriedmanMse,
    /// Sum of absolute deviations from the node median
    AbsoluteError,
    /// Half Poisson deviance; the target must be non-negative
    Poisson,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::SquaredError => "squared_error",
            Criterion::FriedmanMse => "friedman_mse",
            Criterion::AbsoluteError => "absolute_error",
            Criterion::Poisson => "poisson",
        }
    }

    /// Prediction stored in a leaf holding `values`.
    pub(crate) fn leaf_value(&self, values: &mut [f64]) -> f64 {
        match self {
            Criterion::AbsoluteError => median(values),
            _ => mean(values),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "squared_error" => Ok(Criterion::SquaredError),
            "friedman_mse" => Ok(Criterion::FriedmanMse),
            "absolute_error" => Ok(Criterion::AbsoluteError),
            "poisson" => Ok(Criterion::Poisson),
            other => Err(AlgorithmError::InvalidParameter {
                name: "criterion".to_string(),
                reason: format!("unknown criterion '{}'", other),
            }),
        }
    }
}

/// Scores every split position of targets ordered by one feature.
///
/// `score(pos)` splits into `ys[..pos]` and `ys[pos..]`; lower is better.
pub(crate) struct SplitScorer<'a> {
    criterion: Criterion,
    ys: &'a [f64],
    sum: Vec<f64>,
    sum_sq: Vec<f64>,
    sum_ylogy: Vec<f64>,
}

impl<'a> SplitScorer<'a> {
    pub(crate) fn new(criterion: Criterion, ys: &'a [f64]) -> Self {
        let n = ys.len();
        let mut sum = Vec::with_capacity(n + 1);
        let mut sum_sq = Vec::with_capacity(n + 1);
        let mut sum_ylogy = Vec::with_capacity(n + 1);
        sum.push(0.0);
        sum_sq.push(0.0);
        sum_ylogy.push(0.0);
        for (i, &y) in ys.iter().enumerate() {
            sum.push(sum[i] + y);
            sum_sq.push(sum_sq[i] + y * y);
            sum_ylogy.push(sum_ylogy[i] + if y > 0.0 { y * y.ln() } else { 0.0 });
        }
        Self {
            criterion,
            ys,
            sum,
            sum_sq,
            sum_ylogy,
        }
    }

    /// Score of splitting at `pos`, `None` when the split is not allowed.
    pub(crate) fn score(&self, pos: usize) -> Option<f64> {
        let n = self.ys.len();
        let (nl, nr) = (pos as f64, (n - pos) as f64);
        let (sl, sr) = (self.sum[pos], self.sum[n] - self.sum[pos]);

        match self.criterion {
            Criterion::SquaredError => {
                let ql = self.sum_sq[pos];
                let qr = self.sum_sq[n] - ql;
                Some((ql - sl * sl / nl) + (qr - sr * sr / nr))
            }
            Criterion::FriedmanMse => {
                let diff = sl / nl - sr / nr;
                Some(-(nl * nr / (nl + nr)) * diff * diff)
            }
            Criterion::Poisson => {
                if sl <= 0.0 || sr <= 0.0 {
                    return None;
                }
                let yl = self.sum_ylogy[pos];
                let yr = self.sum_ylogy[n] - yl;
                Some((yl - sl * (sl / nl).ln()) + (yr - sr * (sr / nr).ln()))
            }
            Criterion::AbsoluteError => Some(
                Self::absolute_deviation(&self.ys[..pos])
                    + Self::absolute_deviation(&self.ys[pos..]),
            ),
        }
    }

    fn absolute_deviation(values: &[f64]) -> f64 {
        let mut sorted = values.to_vec();
        let m = median(&mut sorted);
        sorted.iter().map(|v| (v - m).abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for c in [
            Criterion::SquaredError,
            Criterion::FriedmanMse,
            Criterion::AbsoluteError,
            Criterion::Poisson,
        ] {
            assert_eq!(c.as_str().parse::<Criterion>().unwrap(), c);
        }
        assert!("gini".parse::<Criterion>().is_err());
    }

    #[test]
    fn test_squared_error_prefers_clean_split() {
        let ys = [1.0, 1.0, 5.0, 5.0];
        let scorer = SplitScorer::new(Criterion::SquaredError, &ys);
        let best = (1..4)
            .min_by(|&a, &b| scorer.score(a).unwrap().total_cmp(&scorer.score(b).unwrap()));
        assert_eq!(best, Some(2));
        assert!(scorer.score(2).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_friedman_and_absolute_agree_on_clean_split() {
        let ys = [1.0, 1.0, 9.0, 9.0];
        for criterion in [Criterion::FriedmanMse, Criterion::AbsoluteError] {
            let scorer = SplitScorer::new(criterion, &ys);
            let best = (1..4)
                .min_by(|&a, &b| scorer.score(a).unwrap().total_cmp(&scorer.score(b).unwrap()));
            assert_eq!(best, Some(2), "{}", criterion);
        }
    }

    #[test]
    fn test_poisson_rejects_zero_sum_child() {
        let ys = [0.0, 0.0, 3.0, 4.0];
        let scorer = SplitScorer::new(Criterion::Poisson, &ys);
        assert_eq!(scorer.score(2), None);
        assert!(scorer.score(3).is_some());
    }

    #[test]
    fn test_leaf_values() {
        let mut values = [1.0, 2.0, 9.0];
        assert_eq!(Criterion::SquaredError.leaf_value(&mut values), 4.0);
        assert_eq!(Criterion::AbsoluteError.leaf_value(&mut values), 2.0);
    }
}
