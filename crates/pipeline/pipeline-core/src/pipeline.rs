//! Ordered chains of column steps.

use pipeline_spi::{ColumnData, ColumnStep, Result};
use serde::{Deserialize, Serialize};

use crate::steps::{MedianImputer, MostFrequentImputer, OneHotEncoder, StandardScaler};

/// Any step a [`Pipeline`] can hold.
///
/// A closed enum keeps the fitted pipeline serializable as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    MedianImputer(MedianImputer),
    MostFrequentImputer(MostFrequentImputer),
    OneHotEncoder(OneHotEncoder),
    StandardScaler(StandardScaler),
}

impl Step {
    fn inner(&self) -> &dyn ColumnStep {
        match self {
            Step::MedianImputer(s) => s,
            Step::MostFrequentImputer(s) => s,
            Step::OneHotEncoder(s) => s,
            Step::StandardScaler(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ColumnStep {
        match self {
            Step::MedianImputer(s) => s,
            Step::MostFrequentImputer(s) => s,
            Step::OneHotEncoder(s) => s,
            Step::StandardScaler(s) => s,
        }
    }
}

impl ColumnStep for Step {
    fn fit(&mut self, data: &ColumnData) -> Result<()> {
        self.inner_mut().fit(data)
    }

    fn transform(&self, data: &ColumnData) -> Result<ColumnData> {
        self.inner().transform(data)
    }

    fn is_fitted(&self) -> bool {
        self.inner().is_fitted()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }
}

impl From<MedianImputer> for Step {
    fn from(step: MedianImputer) -> Self {
        Step::MedianImputer(step)
    }
}

impl From<MostFrequentImputer> for Step {
    fn from(step: MostFrequentImputer) -> Self {
        Step::MostFrequentImputer(step)
    }
}

impl From<OneHotEncoder> for Step {
    fn from(step: OneHotEncoder) -> Self {
        Step::OneHotEncoder(step)
    }
}

impl From<StandardScaler> for Step {
    fn from(step: StandardScaler) -> Self {
        Step::StandardScaler(step)
    }
}

/// Composable preprocessing pipeline; each step feeds the next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(&mut self, step: impl Into<Step>) {
        self.steps.push(step.into());
    }

    pub fn with_step(mut self, step: impl Into<Step>) -> Self {
        self.add_step(step);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn fit_transform(&mut self, data: &ColumnData) -> Result<ColumnData> {
        let mut result = data.clone();
        for step in &mut self.steps {
            result = step.fit_transform(&result)?;
        }
        Ok(result)
    }

    pub fn transform(&self, data: &ColumnData) -> Result<ColumnData> {
        let mut result = data.clone();
        for step in &self.steps {
            result = step.transform(&result)?;
        }
        Ok(result)
    }

    pub fn is_fitted(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(Step::is_fitted)
    }
}
