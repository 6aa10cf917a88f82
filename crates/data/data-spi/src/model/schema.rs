//! Fixed column schema of the student-performance dataset.

/// Column predicted by every model.
pub const TARGET_COLUMN: &str = "math_score";

/// Numeric features, in the order the preprocessor emits them.
pub const NUMERIC_COLUMNS: [&str; 2] = ["writing_score", "reading_score"];

/// Categorical features, in the order the preprocessor emits them.
pub const CATEGORICAL_COLUMNS: [&str; 5] = [
    "gender",
    "race_ethnicity",
    "parental_level_of_education",
    "lunch",
    "test_preparation_course",
];

/// Feature columns in dataset (file) order; the target is excluded.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "gender",
    "race_ethnicity",
    "parental_level_of_education",
    "lunch",
    "test_preparation_course",
    "reading_score",
    "writing_score",
];

/// Every column a labeled training file must carry.
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    FEATURE_COLUMNS.into_iter().chain(std::iter::once(TARGET_COLUMN))
}

pub fn is_numeric(column: &str) -> bool {
    NUMERIC_COLUMNS.contains(&column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_columns_cover_both_branches() {
        for column in NUMERIC_COLUMNS.iter().chain(CATEGORICAL_COLUMNS.iter()) {
            assert!(FEATURE_COLUMNS.contains(column));
        }
        assert_eq!(
            FEATURE_COLUMNS.len(),
            NUMERIC_COLUMNS.len() + CATEGORICAL_COLUMNS.len()
        );
    }

    #[test]
    fn test_target_is_not_a_feature() {
        assert!(!FEATURE_COLUMNS.contains(&TARGET_COLUMN));
        assert_eq!(required_columns().count(), 8);
    }
}
