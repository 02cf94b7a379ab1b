//! Storage order bridging.
//!
//! Row-major stores (C, NumPy, NetCDF-C) list dimensions slowest first, while
//! column-major writers (Fortran, Julia) list them fastest first. This module
//! converts dimension-name lists between the two conventions and relayouts
//! flat data between any two storage orders of the same index space.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};
use ndindexing::{Coordinate, FlatIndex, Indexing};
use num_traits::ToPrimitive;

/// How a store lists dimension names on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DimOrderConvention {
    /// Names are stored as-is, slowest dimension first.
    #[default]
    RowMajor,
    /// Names are stored reversed, fastest dimension first.
    ColumnMajor,
}

impl DimOrderConvention {
    pub fn as_str(self) -> &'static str {
        match self {
            DimOrderConvention::RowMajor => "row_major",
            DimOrderConvention::ColumnMajor => "column_major",
        }
    }

    /// Convert an in-memory per-dimension list (names, bases, extents) to its
    /// on-disk form.
    pub fn to_disk<T: Clone>(self, values: &[T]) -> Vec<T> {
        self.apply(values)
    }

    /// Convert an on-disk per-dimension list back to its in-memory form.
    pub fn from_disk<T: Clone>(self, values: &[T]) -> Vec<T> {
        // Reversal is its own inverse.
        self.apply(values)
    }

    fn apply<T: Clone>(self, values: &[T]) -> Vec<T> {
        match self {
            DimOrderConvention::RowMajor => values.to_vec(),
            DimOrderConvention::ColumnMajor => values.iter().rev().cloned().collect(),
        }
    }
}

impl fmt::Display for DimOrderConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimOrderConvention {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "row_major" => Ok(DimOrderConvention::RowMajor),
            "column_major" => Ok(DimOrderConvention::ColumnMajor),
            other => bail!("Unknown dimension order convention '{}'", other),
        }
    }
}

/// Relayout flat `data` stored in the order of `from` into the order of `to`.
///
/// Both index spaces must share base and extent; only their order may differ.
pub fn relayout<T: Clone, C: Coordinate, I: FlatIndex>(
    data: &[T],
    from: &Indexing<C, I>,
    to: &Indexing<C, I>,
) -> Result<Vec<T>> {
    ensure!(
        from.base() == to.base() && from.extent() == to.extent(),
        "Cannot relayout between index spaces of different shape: base {:?} extent {:?} vs base {:?} extent {:?}",
        from.base(),
        from.extent(),
        to.base(),
        to.extent()
    );
    let size = from
        .size()
        .to_usize()
        .context("Index space too large to hold in memory")?;
    ensure!(
        data.len() == size,
        "Shape mismatch in relayout: data length {} vs extent {:?} (expected {})",
        data.len(),
        from.extent(),
        size
    );

    let mut out = data.to_vec();
    for (src, tuple) in from.tuples().enumerate() {
        let dst = to
            .tuple_to_index(&tuple)?
            .to_usize()
            .context("Flat index does not fit usize")?;
        out[dst] = data[src].clone();
    }
    Ok(out)
}

/// Convert row-major flat data to column-major flat data.
///
/// Row-major (C order): last axis varies fastest.
/// Column-major (Fortran order): first axis varies fastest.
pub fn row_major_to_col_major<T: Clone>(data: &[T], dims: &[usize]) -> Result<Vec<T>> {
    if dims.is_empty() {
        return Ok(data.to_vec());
    }
    let (row, col) = conventional_pair(dims)?;
    relayout(data, &row, &col)
}

/// Convert column-major flat data to row-major flat data.
pub fn col_major_to_row_major<T: Clone>(data: &[T], dims: &[usize]) -> Result<Vec<T>> {
    if dims.is_empty() {
        return Ok(data.to_vec());
    }
    let (row, col) = conventional_pair(dims)?;
    relayout(data, &col, &row)
}

fn conventional_pair(dims: &[usize]) -> Result<(Indexing<i64, u64>, Indexing<i64, u64>)> {
    let extent = dims
        .iter()
        .map(|&d| i64::try_from(d))
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Dimension too large")?;
    let base = vec![0; extent.len()];
    Ok((
        Indexing::row_major(&base, &extent)?,
        Indexing::column_major(&base, &extent)?,
    ))
}
