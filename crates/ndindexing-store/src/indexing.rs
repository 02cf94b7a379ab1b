//! Indexing parameter read/write.

use std::collections::HashSet;

use anyhow::{ensure, Context, Result};
use ndindexing::{Coordinate, FlatIndex, Indexing, IndexingParams, ScalarType};

use crate::group::{Attr, Group};
use crate::layout::DimOrderConvention;
use crate::schema::{require_type_version, write_type_version};

const TYPE_NAME: &str = "Indexing";
const VERSION: i64 = 1;

/// Per-dimension labels used to name axes on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisNames(Vec<String>);

impl AxisNames {
    /// Labels must be non-empty and unique.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(labels.len());
        for (dim, label) in labels.iter().enumerate() {
            let label = label.as_ref();
            ensure!(!label.is_empty(), "Axis name for dimension {} is empty", dim);
            ensure!(seen.insert(label), "Duplicate axis name '{}'", label);
            names.push(label.to_string());
        }
        Ok(Self(names))
    }

    /// `dim0`, `dim1`, ... for a space of the given rank.
    pub fn default_for(rank: usize) -> Self {
        Self((0..rank).map(|d| format!("dim{}", d)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Dimension carrying `label`, if any.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.0.iter().position(|n| n == label)
    }
}

/// Options for [`write_indexing`].
#[derive(Debug, Clone, Default)]
pub struct IndexingWriteOptions {
    /// Order in which per-dimension lists are written.
    pub convention: DimOrderConvention,
    /// Axis labels; `dim0 .. dimN-1` when `None`.
    pub axis_names: Option<AxisNames>,
}

/// Write an [`Indexing`] into a new child group `name` of `parent`.
///
/// Schema:
/// ```text
/// <name>/
///   @type = "Indexing"
///   @version = 1
///   @coord_type = "int32"         (informational)
///   @index_type = "int64"         (informational)
///   @order_convention = "row_major" | "column_major"
///   base:  Int64[N]
///   shape: Int64[N]
///   dims:  String[N]   (axis label per dimension)
///   order: String[N]   (axis labels, slowest to fastest)
/// ```
///
/// Under the column-major convention every list is stored reversed.
pub fn write_indexing<C: Coordinate, I: FlatIndex>(
    parent: &mut Group,
    name: &str,
    indexing: &Indexing<C, I>,
    options: &IndexingWriteOptions,
) -> Result<()> {
    let rank = indexing.rank();
    let names = match &options.axis_names {
        Some(names) => names.clone(),
        None => AxisNames::default_for(rank),
    };
    ensure!(
        names.len() == rank,
        "Got {} axis names for an index space of rank {}",
        names.len(),
        rank
    );

    let params = indexing.params();
    let order_labels: Vec<&str> = params
        .order
        .iter()
        .map(|&d| names.as_slice()[d].as_str())
        .collect();
    let convention = options.convention;

    let group = parent.create_group(name)?;
    write_type_version(group, TYPE_NAME, VERSION);
    group.set_attr("coord_type", Attr::Str(params.coord_type.to_string()));
    group.set_attr("index_type", Attr::Str(params.index_type.to_string()));
    group.set_attr("order_convention", Attr::Str(convention.to_string()));

    group.write_ints("base", &convention.to_disk(&params.base));
    group.write_ints("shape", &convention.to_disk(&params.extent));
    group.write_strings("dims", &convention.to_disk(names.as_slice()));
    group.write_strings("order", &convention.to_disk(&order_labels));

    tracing::debug!(group = name, rank, %convention, "wrote indexing");
    Ok(())
}

/// Read an [`Indexing`] from the child group `name` of `parent`.
///
/// The stored coordinate and index types need not match `C` and `I`; values
/// are converted and out-of-range values are rejected.
pub fn read_indexing<C: Coordinate, I: FlatIndex>(
    parent: &Group,
    name: &str,
) -> Result<(Indexing<C, I>, AxisNames)> {
    let group = parent.group(name)?;
    require_type_version(group, TYPE_NAME, VERSION)?;

    let convention: DimOrderConvention = group.str_attr("order_convention")?.parse()?;
    let coord_type: ScalarType = group
        .str_attr("coord_type")?
        .parse()
        .with_context(|| format!("Invalid coord_type in group '{}'", name))?;
    let index_type: ScalarType = group
        .str_attr("index_type")?
        .parse()
        .with_context(|| format!("Invalid index_type in group '{}'", name))?;

    let base = convention.from_disk(group.read_ints("base")?);
    let extent = convention.from_disk(group.read_ints("shape")?);
    let dims = convention.from_disk(group.read_strings("dims")?);
    let order_labels = convention.from_disk(group.read_strings("order")?);

    let rank = dims.len();
    ensure!(
        base.len() == rank && extent.len() == rank && order_labels.len() == rank,
        "Inconsistent lengths in group '{}': base {}, shape {}, dims {}, order {}",
        name,
        base.len(),
        extent.len(),
        rank,
        order_labels.len()
    );

    let names =
        AxisNames::new(&dims).with_context(|| format!("Invalid dims in group '{}'", name))?;
    let order = order_labels
        .iter()
        .map(|label| {
            names.position(label).with_context(|| {
                format!(
                    "Order label '{}' in group '{}' is not one of the dims {:?}",
                    label, name, dims
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let (target_coord, target_index) = (C::SCALAR_TYPE, I::SCALAR_TYPE);
    if coord_type != target_coord || index_type != target_index {
        tracing::debug!(
            group = name,
            stored_coord = %coord_type,
            stored_index = %index_type,
            coord = %target_coord,
            index = %target_index,
            "converting stored indexing types"
        );
    }

    let params = IndexingParams {
        coord_type,
        index_type,
        base,
        extent,
        order,
    };
    let indexing = Indexing::from_params(&params)
        .with_context(|| format!("Invalid indexing parameters in group '{}'", name))?;

    tracing::debug!(group = name, rank, %convention, "read indexing");
    Ok((indexing, names))
}
