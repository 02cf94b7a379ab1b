//! Integer types usable as coordinates and flat indices.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use num_traits::{PrimInt, Signed};

/// Element type tag recorded alongside persisted index-space parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    I8,
    I16,
    I32,
    I64,
    U32,
    U64,
}

impl ScalarType {
    /// Canonical lowercase name, e.g. `"int32"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarType::I8 => "int8",
            ScalarType::I16 => "int16",
            ScalarType::I32 => "int32",
            ScalarType::I64 => "int64",
            ScalarType::U32 => "uint32",
            ScalarType::U64 => "uint64",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`ScalarType`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown scalar type '{0}'")]
pub struct ParseScalarTypeError(pub String);

impl FromStr for ScalarType {
    type Err = ParseScalarTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int8" => Ok(ScalarType::I8),
            "int16" => Ok(ScalarType::I16),
            "int32" => Ok(ScalarType::I32),
            "int64" => Ok(ScalarType::I64),
            "uint32" => Ok(ScalarType::U32),
            "uint64" => Ok(ScalarType::U64),
            other => Err(ParseScalarTypeError(other.to_string())),
        }
    }
}

/// Signed integer type holding per-dimension coordinates, bases and extents.
pub trait Coordinate:
    PrimInt + Signed + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Tag written next to persisted parameters.
    const SCALAR_TYPE: ScalarType;
}

/// Integer type holding flat indices, strides and sizes.
pub trait FlatIndex: PrimInt + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Tag written next to persisted parameters.
    const SCALAR_TYPE: ScalarType;
}

macro_rules! impl_coordinate {
    ($($t:ty => $tag:ident),* $(,)?) => {
        $(
            impl Coordinate for $t {
                const SCALAR_TYPE: ScalarType = ScalarType::$tag;
            }
        )*
    };
}

macro_rules! impl_flat_index {
    ($($t:ty => $tag:ident),* $(,)?) => {
        $(
            impl FlatIndex for $t {
                const SCALAR_TYPE: ScalarType = ScalarType::$tag;
            }
        )*
    };
}

impl_coordinate!(i8 => I8, i16 => I16, i32 => I32, i64 => I64);
impl_flat_index!(i32 => I32, i64 => I64, u32 => U32, u64 => U64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_type_names_roundtrip() {
        for ty in [
            ScalarType::I8,
            ScalarType::I16,
            ScalarType::I32,
            ScalarType::I64,
            ScalarType::U32,
            ScalarType::U64,
        ] {
            assert_eq!(ty.as_str().parse::<ScalarType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_scalar_type() {
        let err = "float64".parse::<ScalarType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown scalar type 'float64'");
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(<i32 as Coordinate>::SCALAR_TYPE, ScalarType::I32);
        assert_eq!(<u64 as FlatIndex>::SCALAR_TYPE, ScalarType::U64);
    }
}
