//! Structured-store persistence for [`ndindexing`] index spaces.
//!
//! Index spaces are written into a hierarchical [`Group`] (attributes,
//! one-dimensional datasets and child groups, the shape of an HDF5 or NetCDF
//! file) and persisted as JSON through [`StoreFile`].
//!
//! # Data layout
//!
//! Row-major writers list dimensions slowest first; column-major writers
//! (Fortran, Julia) list them fastest first. [`DimOrderConvention`] records
//! which one a group uses, and [`relayout`] moves flat data between storage
//! orders of the same index space.
//!
//! ```
//! use ndindexing::Indexing;
//! use ndindexing_store::{read_indexing, write_indexing, Group, IndexingWriteOptions};
//!
//! let ind: Indexing = Indexing::new(&[0, 0], &[5, 4], &[1, 0]).unwrap();
//! let mut root = Group::new();
//! write_indexing(&mut root, "grid", &ind, &IndexingWriteOptions::default()).unwrap();
//!
//! let (back, _names): (Indexing, _) = read_indexing(&root, "grid").unwrap();
//! assert_eq!(back.tuple_to_index(&[3, 2]).unwrap(), 13);
//! ```

mod file;
mod group;
mod indexing;
mod layout;
mod locate;
mod schema;

use std::path::Path;

use anyhow::Result;
use ndindexing::{Coordinate, FlatIndex, Indexing};

pub use file::StoreFile;
pub use group::{Attr, Dataset, Group};
pub use indexing::{read_indexing, write_indexing, AxisNames, IndexingWriteOptions};
pub use layout::{col_major_to_row_major, relayout, row_major_to_col_major, DimOrderConvention};
pub use locate::{EnvSearchPath, FileLocator};

/// Save an [`Indexing`] as group `name` of a new store file.
pub fn save_indexing<C: Coordinate, I: FlatIndex>(
    filepath: impl AsRef<Path>,
    name: &str,
    indexing: &Indexing<C, I>,
) -> Result<()> {
    let mut file = StoreFile::create(filepath)?;
    write_indexing(
        file.root_mut(),
        name,
        indexing,
        &IndexingWriteOptions::default(),
    )?;
    file.flush()
}

/// Load an [`Indexing`] from group `name` of a store file.
pub fn load_indexing<C: Coordinate, I: FlatIndex>(
    filepath: impl AsRef<Path>,
    name: &str,
) -> Result<Indexing<C, I>> {
    let file = StoreFile::open(filepath)?;
    let (indexing, _names) = read_indexing(file.root(), name)?;
    Ok(indexing)
}
