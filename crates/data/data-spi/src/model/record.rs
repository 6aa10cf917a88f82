//! A single row of the student-performance dataset.

use serde::{Deserialize, Serialize};

/// One labeled example as stored in the CSV files.
///
/// Every field is optional so that missing cells survive parsing and reach the
/// imputers. `math_score` is the target and is `None` for inference rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub gender: Option<String>,
    pub race_ethnicity: Option<String>,
    pub parental_level_of_education: Option<String>,
    pub lunch: Option<String>,
    pub test_preparation_course: Option<String>,
    #[serde(default)]
    pub math_score: Option<f64>,
    pub reading_score: Option<f64>,
    pub writing_score: Option<f64>,
}

impl StudentRecord {
    /// Value of a numeric column, `None` when missing or not numeric.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "math_score" => self.math_score,
            "reading_score" => self.reading_score,
            "writing_score" => self.writing_score,
            _ => None,
        }
    }

    /// Value of a categorical column, `None` when missing or not categorical.
    pub fn categorical(&self, column: &str) -> Option<&str> {
        let value = match column {
            "gender" => &self.gender,
            "race_ethnicity" => &self.race_ethnicity,
            "parental_level_of_education" => &self.parental_level_of_education,
            "lunch" => &self.lunch,
            "test_preparation_course" => &self.test_preparation_course,
            _ => return None,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Drop the target, leaving an inference-shaped row.
    pub fn without_target(mut self) -> Self {
        self.math_score = None;
        self
    }
}
