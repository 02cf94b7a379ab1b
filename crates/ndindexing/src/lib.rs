//! Bijective mapping between N-dimensional coordinate tuples and flat indices.
//!
//! An [`Indexing`] describes a rectangular index space by a base (inclusive
//! lower bound) and an extent per dimension, plus a storage order: a
//! permutation listing the dimensions from slowest-varying to
//! fastest-varying. It converts between coordinate tuples and flat indices in
//! `[0, size())`, in both directions.
//!
//! # Quick Start
//!
//! ```
//! use ndindexing::{Indexing, StorageOrder};
//!
//! // Row-major 4 x 5 space: dimension 1 is contiguous.
//! let ind: Indexing = Indexing::new(&[0, 0], &[4, 5], &[0, 1]).unwrap();
//! assert_eq!(ind.tuple_to_index(&[3, 2]).unwrap(), 17);
//! assert_eq!(ind.index_to_tuple(17).unwrap(), vec![3, 2]);
//! assert_eq!(ind.storage_order(), Some(StorageOrder::RowMajor));
//! ```
//!
//! # Coordinate and index types
//!
//! `Indexing<C, I>` is generic over the coordinate type `C` (signed, holds
//! bases and extents) and the flat index type `I` (holds strides and the total
//! size). They are independent so that small coordinates can address large
//! spaces:
//!
//! ```
//! use ndindexing::Indexing;
//!
//! let ind = Indexing::<i16, u64>::row_major(&[0, 0, 0], &[3000, 3000, 3000]).unwrap();
//! assert_eq!(ind.size(), 27_000_000_000);
//! ```
//!
//! # Bounds checking
//!
//! [`Indexing::tuple_to_index`] and [`Indexing::index_to_tuple`] always check
//! their input and fail with an out-of-range error.
//! [`Indexing::tuple_to_index_unchecked`] skips the checks outside debug
//! builds.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result`] with [`IndexingError`]. Each
//! error belongs to one [`ErrorKind`]:
//!
//! ```
//! use ndindexing::{ErrorKind, Indexing, IndexingError};
//!
//! // Order is not a permutation
//! let result = Indexing::<i32, i64>::new(&[0, 0], &[2, 2], &[0, 0]);
//! assert!(matches!(result, Err(IndexingError::DuplicateAxis { axis: 0 })));
//!
//! // Index past the end
//! let ind: Indexing = Indexing::row_major(&[0], &[4]).unwrap();
//! assert_eq!(ind.index_to_tuple(4).unwrap_err().kind(), ErrorKind::OutOfRange);
//! ```

mod error;
mod indexing;
mod order;
mod scalar;

pub use error::{ErrorKind, IndexingError, Result};
pub use indexing::{Indexing, IndexingBuilder, IndexingParams, Tuples};
pub use order::StorageOrder;
pub use scalar::{Coordinate, FlatIndex, ParseScalarTypeError, ScalarType};
