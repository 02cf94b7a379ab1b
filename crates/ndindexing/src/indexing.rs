//! The index space mapping engine.

use std::marker::PhantomData;

use num_traits::{NumCast, ToPrimitive};

use crate::error::{IndexingError, Result};
use crate::order::{validate_permutation, StorageOrder};
use crate::scalar::{Coordinate, FlatIndex, ScalarType};

/// A rectangular N-dimensional index space with an arbitrary storage order.
///
/// Maps every coordinate tuple `t` with `base[i] <= t[i] < base[i] + extent[i]`
/// onto a unique flat index in `[0, size())` and back.
///
/// `order` lists the dimensions from slowest-varying to fastest-varying:
/// `order[rank - 1]` has stride 1.
///
/// # Example
/// ```
/// use ndindexing::Indexing;
///
/// // Dimension 0 is contiguous.
/// let ind: Indexing = Indexing::new(&[0, 0], &[5, 4], &[1, 0]).unwrap();
/// assert_eq!(ind.size(), 20);
/// assert_eq!(ind.tuple_to_index(&[3, 2]).unwrap(), 13);
/// assert_eq!(ind.index_to_tuple(13).unwrap(), vec![3, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Indexing<C: Coordinate = i32, I: FlatIndex = i64> {
    base: Vec<C>,
    extent: Vec<C>,
    /// Dimensions from slowest to fastest varying
    order: Vec<usize>,
    /// strides[d] is the flat-index step for a unit step along dimension d
    strides: Vec<I>,
    size: I,
}

/// Parameters of an [`Indexing`] in a type-erased form, for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexingParams {
    /// Coordinate type the parameters were exported from
    pub coord_type: ScalarType,
    /// Flat index type the parameters were exported from
    pub index_type: ScalarType,
    pub base: Vec<i64>,
    pub extent: Vec<i64>,
    pub order: Vec<usize>,
}

impl<C: Coordinate, I: FlatIndex> Indexing<C, I> {
    /// Build an index space from per-dimension base, extent and a traversal
    /// order (slowest dimension first).
    ///
    /// All parameters are validated here; a successfully built value is
    /// always usable.
    pub fn new(base: &[C], extent: &[C], order: &[usize]) -> Result<Self> {
        if base.len() != extent.len() || base.len() != order.len() {
            return Err(IndexingError::LengthMismatch {
                base: base.len(),
                extent: extent.len(),
                order: order.len(),
            });
        }
        let rank = order.len();
        if rank == 0 {
            return Err(IndexingError::EmptyRank);
        }
        validate_permutation(order)?;

        for (dim, (&b, &e)) in base.iter().zip(extent.iter()).enumerate() {
            if e < C::zero() {
                return Err(IndexingError::NegativeExtent {
                    dim,
                    extent: e.to_i64().unwrap_or_default(),
                });
            }
            if b.checked_add(&e).is_none() {
                return Err(IndexingError::CoordinateOverflow {
                    dim,
                    value: b.to_i128().unwrap_or_default() + e.to_i128().unwrap_or_default(),
                    ty: C::SCALAR_TYPE.as_str(),
                });
            }
        }

        let (strides, size) = compute_strides::<C, I>(extent, order)?;
        tracing::trace!(rank, size = %size, "built index space");

        Ok(Self {
            base: base.to_vec(),
            extent: extent.to_vec(),
            order: order.to_vec(),
            strides,
            size,
        })
    }

    /// Index space whose last dimension varies fastest.
    pub fn row_major(base: &[C], extent: &[C]) -> Result<Self> {
        Self::new(base, extent, &StorageOrder::RowMajor.permutation(extent.len()))
    }

    /// Index space whose first dimension varies fastest.
    pub fn column_major(base: &[C], extent: &[C]) -> Result<Self> {
        Self::new(
            base,
            extent,
            &StorageOrder::ColumnMajor.permutation(extent.len()),
        )
    }

    /// Start building an index space with the given extents.
    ///
    /// # Example
    /// ```
    /// use ndindexing::{Indexing, StorageOrder};
    ///
    /// let ind = Indexing::<i32, i64>::builder(&[4, 5])
    ///     .with_base(&[1, 1])
    ///     .with_storage_order(StorageOrder::ColumnMajor)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(ind.strides(), &[1, 4]);
    /// ```
    pub fn builder(extent: &[C]) -> IndexingBuilder<C, I> {
        IndexingBuilder::new(extent)
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.order.len()
    }

    /// Inclusive lower bound per dimension
    pub fn base(&self) -> &[C] {
        &self.base
    }

    /// Number of legal values per dimension
    pub fn extent(&self) -> &[C] {
        &self.extent
    }

    /// Traversal order, slowest-varying dimension first
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Flat-index stride per dimension
    pub fn strides(&self) -> &[I] {
        &self.strides
    }

    /// Number of legal tuples (product of extents)
    pub fn size(&self) -> I {
        self.size
    }

    /// Returns true if some extent is zero
    pub fn is_empty(&self) -> bool {
        self.size.is_zero()
    }

    /// The conventional storage order this index space follows, if any.
    pub fn storage_order(&self) -> Option<StorageOrder> {
        StorageOrder::classify(&self.order)
    }

    /// Returns true if `tuple` has the right rank and lies inside the space.
    pub fn contains(&self, tuple: &[C]) -> bool {
        tuple.len() == self.rank()
            && tuple
                .iter()
                .zip(self.base.iter().zip(self.extent.iter()))
                .all(|(&c, (&b, &e))| c >= b && c < b + e)
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Convert a coordinate tuple to its flat index.
    ///
    /// Fails with [`IndexingError::TupleLength`] for a tuple of the wrong rank
    /// and [`IndexingError::CoordinateOutOfRange`] for a coordinate outside the
    /// space.
    pub fn tuple_to_index(&self, tuple: &[C]) -> Result<I> {
        self.check_len(tuple.len())?;

        let mut index = I::zero();
        for (dim, &c) in tuple.iter().enumerate() {
            let lower = self.base[dim];
            let upper = lower + self.extent[dim];
            if c < lower || c >= upper {
                return Err(IndexingError::CoordinateOutOfRange {
                    dim,
                    value: c.to_i64().unwrap_or_default(),
                    lower: lower.to_i64().unwrap_or_default(),
                    upper: upper.to_i64().unwrap_or_default(),
                });
            }
            let offset = widen::<C, I>(c - lower).ok_or(IndexingError::IndexOverflow {
                dim,
                ty: I::SCALAR_TYPE.as_str(),
            })?;
            index = index + self.strides[dim] * offset;
        }
        Ok(index)
    }

    /// Convert a coordinate tuple to its flat index without bounds checks.
    ///
    /// Bounds and rank are only checked by `debug_assert!`. For a tuple
    /// outside the space the result is unspecified.
    #[inline]
    pub fn tuple_to_index_unchecked(&self, tuple: &[C]) -> I {
        debug_assert!(
            self.contains(tuple),
            "tuple {:?} outside index space",
            tuple
        );
        tuple
            .iter()
            .zip(self.base.iter().zip(self.strides.iter()))
            .fold(I::zero(), |acc, (&c, (&b, &s))| {
                acc + s * widen::<C, I>(c - b).unwrap_or_else(I::zero)
            })
    }

    /// Convert a flat index back to its coordinate tuple.
    ///
    /// Fails with [`IndexingError::IndexOutOfRange`] unless
    /// `0 <= index < size()`; on an empty space every index fails.
    pub fn index_to_tuple(&self, index: I) -> Result<Vec<C>> {
        let mut tuple = self.base.clone();
        self.index_to_tuple_into(index, &mut tuple)?;
        Ok(tuple)
    }

    /// Like [`Indexing::index_to_tuple`], writing into a caller-provided buffer
    /// of length `rank()`.
    pub fn index_to_tuple_into(&self, index: I, tuple: &mut [C]) -> Result<()> {
        self.check_len(tuple.len())?;
        if index < I::zero() || index >= self.size {
            return Err(IndexingError::IndexOutOfRange {
                index: index.to_i128().unwrap_or_default(),
                size: self.size.to_i128().unwrap_or_default(),
            });
        }

        let mut remaining = index;
        for &dim in &self.order {
            // Non-empty space, so every stride is positive.
            let stride = self.strides[dim];
            let offset = remaining / stride;
            remaining = remaining % stride;
            let offset = narrow::<C, I>(offset).ok_or(IndexingError::CoordinateOverflow {
                dim,
                value: offset.to_i128().unwrap_or_default(),
                ty: C::SCALAR_TYPE.as_str(),
            })?;
            tuple[dim] = self.base[dim] + offset;
        }
        Ok(())
    }

    /// Fixed-rank variant of [`Indexing::index_to_tuple`].
    ///
    /// Fails with [`IndexingError::TupleLength`] when `N != rank()`.
    pub fn index_to_array<const N: usize>(&self, index: I) -> Result<[C; N]> {
        let mut tuple = [C::zero(); N];
        self.index_to_tuple_into(index, &mut tuple)?;
        Ok(tuple)
    }

    /// Iterate over every tuple of the space in flat-index order.
    pub fn tuples(&self) -> Tuples<'_, C, I> {
        Tuples {
            indexing: self,
            current: if self.is_empty() {
                None
            } else {
                Some(self.base.clone())
            },
        }
    }

    // ========================================================================
    // Persistence hook
    // ========================================================================

    /// Export base, extent, order and type tags.
    pub fn params(&self) -> IndexingParams {
        IndexingParams {
            coord_type: C::SCALAR_TYPE,
            index_type: I::SCALAR_TYPE,
            base: self.base.iter().map(|c| c.to_i64().unwrap_or_default()).collect(),
            extent: self
                .extent
                .iter()
                .map(|c| c.to_i64().unwrap_or_default())
                .collect(),
            order: self.order.clone(),
        }
    }

    /// Rebuild an index space from exported parameters.
    ///
    /// The stored type tags need not match `C` and `I`; values are converted
    /// and fail with an overflow error if they do not fit.
    pub fn from_params(params: &IndexingParams) -> Result<Self> {
        let base = to_coordinates::<C>(&params.base)?;
        let extent = to_coordinates::<C>(&params.extent)?;
        Self::new(&base, &extent, &params.order)
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        if actual != self.rank() {
            return Err(IndexingError::TupleLength {
                expected: self.rank(),
                actual,
            });
        }
        Ok(())
    }
}

/// Iterator over the tuples of an [`Indexing`] in flat-index order.
///
/// Created by [`Indexing::tuples`].
#[derive(Debug, Clone)]
pub struct Tuples<'a, C: Coordinate, I: FlatIndex> {
    indexing: &'a Indexing<C, I>,
    current: Option<Vec<C>>,
}

impl<C: Coordinate, I: FlatIndex> Iterator for Tuples<'_, C, I> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        let item = current.clone();

        // Odometer step, fastest dimension first.
        let ind = self.indexing;
        let mut wrapped = true;
        for &dim in ind.order.iter().rev() {
            current[dim] = current[dim] + C::one();
            if current[dim] < ind.base[dim] + ind.extent[dim] {
                wrapped = false;
                break;
            }
            current[dim] = ind.base[dim];
        }
        if wrapped {
            self.current = None;
        }
        Some(item)
    }
}

/// Builder for [`Indexing`]
#[derive(Debug, Clone)]
pub struct IndexingBuilder<C: Coordinate, I: FlatIndex> {
    extent: Vec<C>,
    base: Option<Vec<C>>,
    order: Option<Vec<usize>>,
    storage_order: StorageOrder,
    _index: PhantomData<I>,
}

impl<C: Coordinate, I: FlatIndex> IndexingBuilder<C, I> {
    /// Create a new builder with given extents
    pub fn new(extent: &[C]) -> Self {
        Self {
            extent: extent.to_vec(),
            base: None,
            order: None,
            storage_order: StorageOrder::RowMajor,
            _index: PhantomData,
        }
    }

    /// Set the lower bound of each dimension (default all zero)
    pub fn with_base(mut self, base: &[C]) -> Self {
        self.base = Some(base.to_vec());
        self
    }

    /// Set an explicit traversal order, slowest dimension first.
    /// Takes precedence over [`IndexingBuilder::with_storage_order`].
    pub fn with_order(mut self, order: &[usize]) -> Self {
        self.order = Some(order.to_vec());
        self
    }

    /// Use a conventional storage order (default row-major)
    pub fn with_storage_order(mut self, storage_order: StorageOrder) -> Self {
        self.storage_order = storage_order;
        self
    }

    /// Build the Indexing
    pub fn build(self) -> Result<Indexing<C, I>> {
        let rank = self.extent.len();
        let base = self.base.unwrap_or_else(|| vec![C::zero(); rank]);
        let order = self
            .order
            .unwrap_or_else(|| self.storage_order.permutation(rank));
        Indexing::new(&base, &self.extent, &order)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Stride table and total size. The fastest dimension gets stride 1 and each
/// slower dimension the product of the extents of all faster ones.
fn compute_strides<C: Coordinate, I: FlatIndex>(
    extent: &[C],
    order: &[usize],
) -> Result<(Vec<I>, I)> {
    let overflow = |dim| IndexingError::IndexOverflow {
        dim,
        ty: I::SCALAR_TYPE.as_str(),
    };

    let mut strides = vec![I::zero(); order.len()];
    let mut acc = I::one();
    for &dim in order.iter().rev() {
        strides[dim] = acc;
        let e = widen::<C, I>(extent[dim]).ok_or_else(|| overflow(dim))?;
        acc = acc.checked_mul(&e).ok_or_else(|| overflow(dim))?;
    }
    Ok((strides, acc))
}

fn to_coordinates<C: Coordinate>(values: &[i64]) -> Result<Vec<C>> {
    values
        .iter()
        .enumerate()
        .map(|(dim, &v)| {
            <C as NumCast>::from(v).ok_or(IndexingError::CoordinateOverflow {
                dim,
                value: v as i128,
                ty: C::SCALAR_TYPE.as_str(),
            })
        })
        .collect()
}

#[inline]
fn widen<C: Coordinate, I: FlatIndex>(value: C) -> Option<I> {
    <I as NumCast>::from(value)
}

#[inline]
fn narrow<C: Coordinate, I: FlatIndex>(value: I) -> Option<C> {
    <C as NumCast>::from(value)
}
