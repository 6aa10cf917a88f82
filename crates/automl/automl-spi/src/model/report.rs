//! Search and selection results.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::candidate::CandidateKind;
use super::param::ParamSet;

/// Held-out R² per candidate, in the order candidates were scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    scores: Vec<(String, f64)>,
}

impl ModelReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score. Re-recording a name overwrites it without moving it.
    pub fn record(&mut self, name: impl Into<String>, score: f64) {
        let name = name.into();
        match self.scores.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = score,
            None => self.scores.push((name, score)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.scores.iter().find(|(n, _)| n == name).map(|(_, s)| *s)
    }

    /// Highest score; the earliest entry wins ties. NaN scores never win.
    pub fn best(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, score) in &self.scores {
            if score.is_nan() {
                continue;
            }
            match best {
                Some((_, current)) if *score <= current => {}
                _ => best = Some((name.as_str(), *score)),
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(n, s)| (n.as_str(), *s))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl fmt::Display for ModelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, score) in &self.scores {
            writeln!(f, "{:<24} {:>8.4}", name, score)?;
        }
        Ok(())
    }
}

/// Outcome of a hyperparameter search for one candidate.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// Candidate refit on the whole training split with `best_params`.
    pub model: M,
    pub best_params: ParamSet,
    /// Mean cross-validated R² of `best_params`.
    pub best_cv_score: f64,
    /// Mean cross-validated R² of every grid point, in grid order.
    pub cv_results: Vec<(ParamSet, f64)>,
}

/// What a training run selected and how it scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    pub winner: CandidateKind,
    pub params: ParamSet,
    pub report: ModelReport,
    /// Test-split R² of the persisted winner.
    pub score: f64,
}
