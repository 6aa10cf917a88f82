//! Feature/target separation and row splitting.

use data_spi::{DataError, FeatureFrame, Result, StudentRecord, TARGET_COLUMN};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Separate the target from labeled records.
///
/// Every row must carry a finite target value; the remaining columns form the
/// feature frame in schema order.
pub fn split_target(records: &[StudentRecord]) -> Result<(FeatureFrame, Vec<f64>)> {
    if records.is_empty() {
        return Err(DataError::Empty);
    }

    let target = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            r.math_score
                .filter(|v| v.is_finite())
                .ok_or_else(|| DataError::MissingTarget {
                    row: i + 1,
                    column: TARGET_COLUMN.to_string(),
                })
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok((FeatureFrame::from_records(records), target))
}

/// Seeded shuffled split of `0..n` into (train, test) index sets.
///
/// The test side receives `ceil(n * test_ratio)` rows; both sides keep at
/// least one row.
pub fn train_test_indices(
    n: usize,
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(DataError::InvalidParameter {
            name: "test_ratio".to_string(),
            reason: format!("must be in (0, 1), got {}", test_ratio),
        });
    }
    if n < 2 {
        return Err(DataError::InvalidParameter {
            name: "rows".to_string(),
            reason: format!("need at least 2 rows to split, got {}", n),
        });
    }

    let n_test = ((n as f64) * test_ratio).ceil() as usize;
    let n_test = n_test.clamp(1, n - 1);

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    Ok((train, indices))
}
