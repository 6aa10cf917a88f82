//! Regression accuracy metrics
//!
//! Every metric returns NaN when the inputs are empty or of different lengths.

/// Coefficient of determination (R²)
///
/// `1 - SS_res / SS_tot` over the given values. 1.0 is a perfect fit, 0.0 is
/// no better than predicting the mean, and the score goes negative for worse
/// models. When `actual` is constant the score is 1.0 for a perfect
/// prediction and 0.0 otherwise.
///
/// # Example
///
/// ```rust
/// use algorithm_core::utils::metrics::r2_score;
///
/// let actual = vec![3.0, -0.5, 2.0, 7.0];
/// let predicted = vec![2.5, 0.0, 2.0, 8.0];
/// let score = r2_score(&actual, &predicted);
/// assert!((score - 0.9486081370449679).abs() < 1e-12);
/// ```
pub fn r2_score(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;

    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }

    1.0 - ss_res / ss_tot
}

/// Mean Squared Error (MSE)
pub fn mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    sum / actual.len() as f64
}

/// Root Mean Squared Error (RMSE)
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    mean_squared_error(actual, predicted).sqrt()
}

/// Mean Absolute Error (MAE)
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    sum / actual.len() as f64
}
