//! Dimension traversal orders.

use crate::error::{IndexingError, Result};

/// The two conventional storage orders.
///
/// An index space `order` lists dimensions from slowest-varying to
/// fastest-varying, so the last entry of the permutation is the contiguous
/// dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageOrder {
    /// C order: the last dimension varies fastest. Permutation `[0, 1, ..., N-1]`.
    #[default]
    RowMajor,
    /// Fortran order: the first dimension varies fastest. Permutation `[N-1, ..., 1, 0]`.
    ColumnMajor,
}

impl StorageOrder {
    /// The `order` permutation realizing this storage order for `rank` dimensions.
    pub fn permutation(self, rank: usize) -> Vec<usize> {
        match self {
            StorageOrder::RowMajor => (0..rank).collect(),
            StorageOrder::ColumnMajor => (0..rank).rev().collect(),
        }
    }

    /// Classify a permutation. Rank 0 and 1 permutations are row-major.
    pub fn classify(order: &[usize]) -> Option<StorageOrder> {
        if order.iter().enumerate().all(|(k, &d)| k == d) {
            Some(StorageOrder::RowMajor)
        } else if order.iter().rev().enumerate().all(|(k, &d)| k == d) {
            Some(StorageOrder::ColumnMajor)
        } else {
            None
        }
    }
}

/// Check that `order` is a permutation of `[0, order.len())`.
///
/// Uses a presence bitmap; the first offending entry is reported.
pub(crate) fn validate_permutation(order: &[usize]) -> Result<()> {
    let rank = order.len();
    let mut seen = vec![false; rank];
    for (position, &axis) in order.iter().enumerate() {
        if axis >= rank {
            return Err(IndexingError::AxisOutOfRange {
                position,
                axis,
                rank,
            });
        }
        if seen[axis] {
            return Err(IndexingError::DuplicateAxis { axis });
        }
        seen[axis] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutations() {
        assert_eq!(StorageOrder::RowMajor.permutation(3), vec![0, 1, 2]);
        assert_eq!(StorageOrder::ColumnMajor.permutation(3), vec![2, 1, 0]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(StorageOrder::classify(&[0, 1, 2]), Some(StorageOrder::RowMajor));
        assert_eq!(StorageOrder::classify(&[2, 1, 0]), Some(StorageOrder::ColumnMajor));
        assert_eq!(StorageOrder::classify(&[1, 0, 2]), None);
        // A single dimension is both; row-major wins.
        assert_eq!(StorageOrder::classify(&[0]), Some(StorageOrder::RowMajor));
    }

    #[test]
    fn test_validate_permutation() {
        assert!(validate_permutation(&[2, 0, 1]).is_ok());
        assert_eq!(
            validate_permutation(&[0, 0]),
            Err(IndexingError::DuplicateAxis { axis: 0 })
        );
        assert_eq!(
            validate_permutation(&[0, 3, 1]),
            Err(IndexingError::AxisOutOfRange {
                position: 1,
                axis: 3,
                rank: 3
            })
        );
    }
}
