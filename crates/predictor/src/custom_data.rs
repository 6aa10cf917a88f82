//! Single input row for inference.

use common::ScoreFieldMapping;
use data_spi::{FeatureFrame, StudentRecord};
use serde::{Deserialize, Serialize};

use crate::error::{PredictionError, Result};

/// Form fields exactly as posted to `/predictdata`.
///
/// Every field is optional text so that missing and non-numeric input can be
/// reported instead of rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictForm {
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    pub parental_level_of_education: Option<String>,
    pub lunch: Option<String>,
    pub test_preparation_course: Option<String>,
    pub reading_score: Option<String>,
    pub writing_score: Option<String>,
}

/// One student's features, target excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomData {
    pub gender: String,
    pub race_ethnicity: String,
    pub parental_level_of_education: String,
    pub lunch: String,
    pub test_preparation_course: String,
    pub reading_score: f64,
    pub writing_score: f64,
}

impl CustomData {
    /// Validate a submitted form.
    ///
    /// With [`ScoreFieldMapping::LegacySwapped`] the `writing_score` field is
    /// stored as `reading_score` and the `reading_score` field as
    /// `writing_score`.
    pub fn from_form(form: &PredictForm, mapping: ScoreFieldMapping) -> Result<Self> {
        let reading = parse_score("reading_score", form.reading_score.as_deref())?;
        let writing = parse_score("writing_score", form.writing_score.as_deref())?;
        let (reading_score, writing_score) = match mapping {
            ScoreFieldMapping::Direct => (reading, writing),
            ScoreFieldMapping::LegacySwapped => (writing, reading),
        };

        Ok(Self {
            gender: required("gender", form.gender.as_deref())?,
            race_ethnicity: required("ethnicity", form.ethnicity.as_deref())?,
            parental_level_of_education: required(
                "parental_level_of_education",
                form.parental_level_of_education.as_deref(),
            )?,
            lunch: required("lunch", form.lunch.as_deref())?,
            test_preparation_course: required(
                "test_preparation_course",
                form.test_preparation_course.as_deref(),
            )?,
            reading_score,
            writing_score,
        })
    }

    pub fn to_record(&self) -> StudentRecord {
        StudentRecord {
            gender: Some(self.gender.clone()),
            race_ethnicity: Some(self.race_ethnicity.clone()),
            parental_level_of_education: Some(self.parental_level_of_education.clone()),
            lunch: Some(self.lunch.clone()),
            test_preparation_course: Some(self.test_preparation_course.clone()),
            math_score: None,
            reading_score: Some(self.reading_score),
            writing_score: Some(self.writing_score),
        }
    }

    /// Single-row feature frame in schema column order.
    pub fn to_frame(&self) -> FeatureFrame {
        FeatureFrame::from_records(&[self.to_record()])
    }
}

fn required(field: &str, value: Option<&str>) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(PredictionError::MissingField(field.to_string())),
    }
}

fn parse_score(field: &str, value: Option<&str>) -> Result<f64> {
    let text = required(field, value)?;
    match text.parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(score),
        _ => Err(PredictionError::InvalidScore {
            field: field.to_string(),
            value: text,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_spi::Column;

    fn form() -> PredictForm {
        PredictForm {
            gender: Some("female".into()),
            ethnicity: Some("group B".into()),
            parental_level_of_education: Some("bachelor's degree".into()),
            lunch: Some("standard".into()),
            test_preparation_course: Some("none".into()),
            reading_score: Some("72".into()),
            writing_score: Some(" 74 ".into()),
        }
    }

    #[test]
    fn test_direct_mapping() {
        let data = CustomData::from_form(&form(), ScoreFieldMapping::Direct).unwrap();
        assert_eq!(data.race_ethnicity, "group B");
        assert_eq!(data.reading_score, 72.0);
        assert_eq!(data.writing_score, 74.0);
    }

    #[test]
    fn test_legacy_mapping_swaps_scores() {
        let data = CustomData::from_form(&form(), ScoreFieldMapping::LegacySwapped).unwrap();
        assert_eq!(data.reading_score, 74.0);
        assert_eq!(data.writing_score, 72.0);
    }

    #[test]
    fn test_non_numeric_score() {
        let mut bad = form();
        bad.reading_score = Some("seventy".into());
        let err = CustomData::from_form(&bad, ScoreFieldMapping::Direct).unwrap_err();
        assert_eq!(
            err,
            PredictionError::InvalidScore {
                field: "reading_score".into(),
                value: "seventy".into()
            }
        );

        bad.reading_score = Some("NaN".into());
        assert!(CustomData::from_form(&bad, ScoreFieldMapping::Direct).is_err());
    }

    #[test]
    fn test_blank_field_is_missing() {
        let mut bad = form();
        bad.lunch = Some("   ".into());
        let err = CustomData::from_form(&bad, ScoreFieldMapping::Direct).unwrap_err();
        assert_eq!(err, PredictionError::MissingField("lunch".into()));

        bad = form();
        bad.ethnicity = None;
        let err = CustomData::from_form(&bad, ScoreFieldMapping::Direct).unwrap_err();
        assert_eq!(err, PredictionError::MissingField("ethnicity".into()));
    }

    #[test]
    fn test_frame_has_one_row_without_target() {
        let data = CustomData::from_form(&form(), ScoreFieldMapping::Direct).unwrap();
        let frame = data.to_frame();
        assert_eq!(frame.n_rows(), 1);
        assert_eq!(frame.n_columns(), 7);
        assert!(frame.column("math_score").is_none());
        assert_eq!(
            frame.column("writing_score"),
            Some(&Column::Numeric(vec![Some(74.0)]))
        );
    }
}
