//! Contiguous k-fold splitting.

use automl_spi::{AutoMLError, Result};

/// Row indices of one cross-validation round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldSplit {
    pub train: Vec<usize>,
    pub validation: Vec<usize>,
}

/// K-fold cross-validator over contiguous, unshuffled blocks.
///
/// The first `n % k` folds hold one extra row, so fold sizes differ by at
/// most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KFold {
    folds: usize,
}

impl KFold {
    pub fn new(folds: usize) -> Result<Self> {
        if folds < 2 {
            return Err(AutoMLError::InvalidParameter {
                name: "cv_folds".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        Ok(Self { folds })
    }

    pub fn folds(&self) -> usize {
        self.folds
    }

    pub fn splits(&self, n_rows: usize) -> Result<Vec<FoldSplit>> {
        if n_rows < self.folds {
            return Err(AutoMLError::InsufficientData {
                required: self.folds,
                actual: n_rows,
            });
        }

        let base = n_rows / self.folds;
        let extra = n_rows % self.folds;
        let mut splits = Vec::with_capacity(self.folds);
        let mut start = 0;

        for i in 0..self.folds {
            let size = base + usize::from(i < extra);
            let end = start + size;
            splits.push(FoldSplit {
                train: (0..start).chain(end..n_rows).collect(),
                validation: (start..end).collect(),
            });
            start = end;
        }

        Ok(splits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let splits = KFold::new(3).unwrap().splits(9).unwrap();
        assert_eq!(splits.len(), 3);
        assert_eq!(splits[0].validation, vec![0, 1, 2]);
        assert_eq!(splits[1].validation, vec![3, 4, 5]);
        assert_eq!(splits[1].train, vec![0, 1, 2, 6, 7, 8]);
        assert_eq!(splits[2].train, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_remainder_goes_to_first_folds() {
        let splits = KFold::new(3).unwrap().splits(11).unwrap();
        let sizes: Vec<usize> = splits.iter().map(|s| s.validation.len()).collect();
        assert_eq!(sizes, vec![4, 4, 3]);
        assert_eq!(splits[2].validation, vec![8, 9, 10]);
    }

    #[test]
    fn test_every_row_validated_once() {
        let splits = KFold::new(4).unwrap().splits(17).unwrap();
        let mut seen: Vec<usize> = splits.iter().flat_map(|s| s.validation.clone()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..17).collect::<Vec<_>>());
        for split in &splits {
            assert_eq!(split.train.len() + split.validation.len(), 17);
        }
    }

    #[test]
    fn test_invalid_folds() {
        assert!(KFold::new(1).is_err());
        let err = KFold::new(5).unwrap().splits(3).unwrap_err();
        assert_eq!(
            err,
            AutoMLError::InsufficientData {
                required: 5,
                actual: 3
            }
        );
    }
}
