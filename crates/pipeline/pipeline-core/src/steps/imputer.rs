//! Missing-value imputers.

use std::collections::BTreeMap;

use data_spi::Column;
use pipeline_spi::{ColumnData, ColumnStep, PipelineError, Result};
use serde::{Deserialize, Serialize};

use super::check_width;

/// Replaces missing numeric cells with the column median learned at fit.
///
/// NaN counts as missing. The median of an even count is the mean of the two
/// middle values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedianImputer {
    statistics: Option<Vec<f64>>,
}

impl MedianImputer {
    const NAME: &'static str = "median_imputer";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn statistics(&self) -> Option<&[f64]> {
        self.statistics.as_deref()
    }

    fn median(values: &mut [f64]) -> f64 {
        values.sort_by(f64::total_cmp);
        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        }
    }
}

impl ColumnStep for MedianImputer {
    fn fit(&mut self, data: &ColumnData) -> Result<()> {
        let columns = data.numeric_columns(Self::NAME)?;
        let statistics = columns
            .iter()
            .map(|(name, values)| {
                let mut observed: Vec<f64> =
                    values.iter().flatten().copied().filter(|v| !v.is_nan()).collect();
                if observed.is_empty() {
                    return Err(PipelineError::AllMissing {
                        step: Self::NAME.to_string(),
                        column: name.to_string(),
                    });
                }
                Ok(Self::median(&mut observed))
            })
            .collect::<Result<Vec<f64>>>()?;
        self.statistics = Some(statistics);
        Ok(())
    }

    fn transform(&self, data: &ColumnData) -> Result<ColumnData> {
        let statistics = self
            .statistics
            .as_ref()
            .ok_or_else(|| PipelineError::NotFitted(Self::NAME.to_string()))?;
        let columns = data.numeric_columns(Self::NAME)?;
        check_width(Self::NAME, statistics.len(), columns.len())?;

        let filled = columns
            .into_iter()
            .zip(statistics)
            .map(|((name, values), &fill)| {
                let values = values
                    .iter()
                    .map(|v| Some(v.filter(|x| !x.is_nan()).unwrap_or(fill)))
                    .collect();
                (name.to_string(), Column::Numeric(values))
            })
            .collect();
        Ok(ColumnData::Raw(filled))
    }

    fn is_fitted(&self) -> bool {
        self.statistics.is_some()
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

/// Replaces missing categorical cells with the most frequent value learned at fit.
///
/// Ties go to the lexicographically smallest value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MostFrequentImputer {
    statistics: Option<Vec<String>>,
}

impl MostFrequentImputer {
    const NAME: &'static str = "most_frequent_imputer";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn statistics(&self) -> Option<&[String]> {
        self.statistics.as_deref()
    }

    fn mode(values: &[Option<String>]) -> Option<String> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in values.iter().flatten() {
            *counts.entry(value.as_str()).or_default() += 1;
        }
        let mut best: Option<(&str, usize)> = None;
        for (value, count) in counts {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value.to_string())
    }
}

impl ColumnStep for MostFrequentImputer {
    fn fit(&mut self, data: &ColumnData) -> Result<()> {
        let columns = data.categorical_columns(Self::NAME)?;
        let statistics = columns
            .iter()
            .map(|(name, values)| {
                Self::mode(values).ok_or_else(|| PipelineError::AllMissing {
                    step: Self::NAME.to_string(),
                    column: name.to_string(),
                })
            })
            .collect::<Result<Vec<String>>>()?;
        self.statistics = Some(statistics);
        Ok(())
    }

    fn transform(&self, data: &ColumnData) -> Result<ColumnData> {
        let statistics = self
            .statistics
            .as_ref()
            .ok_or_else(|| PipelineError::NotFitted(Self::NAME.to_string()))?;
        let columns = data.categorical_columns(Self::NAME)?;
        check_width(Self::NAME, statistics.len(), columns.len())?;

        let filled = columns
            .into_iter()
            .zip(statistics)
            .map(|((name, values), fill)| {
                let values = values
                    .iter()
                    .map(|v| Some(v.clone().unwrap_or_else(|| fill.clone())))
                    .collect();
                (name.to_string(), Column::Categorical(values))
            })
            .collect();
        Ok(ColumnData::Raw(filled))
    }

    fn is_fitted(&self) -> bool {
        self.statistics.is_some()
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
