//! `type` / `version` attribute helpers.
//!
//! Every object persisted by this crate carries a `type` (string) and a
//! `version` (integer) attribute on its group so that readers can reject
//! foreign or newer layouts.

use anyhow::{bail, Result};

use crate::group::{Attr, Group};

/// Write `type` and `version` attributes to a group.
pub(crate) fn write_type_version(group: &mut Group, type_name: &str, version: i64) {
    group.set_attr("type", Attr::Str(type_name.to_string()));
    group.set_attr("version", Attr::Int(version));
}

/// Read `type` and `version` attributes from a group.
pub(crate) fn read_type_version(group: &Group) -> Result<(String, i64)> {
    let type_str = group.str_attr("type")?.to_string();
    let version = group.int_attr("version")?;
    Ok((type_str, version))
}

/// Read and validate `type` and `version` attributes.
///
/// Returns the version number on success, or an error if:
/// - The type doesn't match `expected_type`
/// - The version exceeds `max_version`
pub(crate) fn require_type_version(
    group: &Group,
    expected_type: &str,
    max_version: i64,
) -> Result<i64> {
    let (type_str, version) = read_type_version(group)?;

    if type_str != expected_type {
        bail!("Expected type '{}', found '{}'", expected_type, type_str);
    }
    if version > max_version {
        bail!(
            "Unsupported {} version {} (max supported: {})",
            expected_type,
            version,
            max_version
        );
    }

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_type_version() {
        let mut group = Group::new();
        write_type_version(&mut group, "Indexing", 1);
        let (t, v) = read_type_version(&group).unwrap();
        assert_eq!(t, "Indexing");
        assert_eq!(v, 1);
    }

    #[test]
    fn test_require_type_version_wrong_type() {
        let mut group = Group::new();
        write_type_version(&mut group, "Shape", 1);
        let err = require_type_version(&group, "Indexing", 1).unwrap_err();
        assert!(err.to_string().contains("Expected type 'Indexing'"));
    }

    #[test]
    fn test_require_type_version_too_new() {
        let mut group = Group::new();
        write_type_version(&mut group, "Indexing", 99);
        let err = require_type_version(&group, "Indexing", 1).unwrap_err();
        assert!(err.to_string().contains("Unsupported Indexing version 99"));
    }

    #[test]
    fn test_missing_attributes() {
        let group = Group::new();
        assert!(read_type_version(&group).is_err());
    }
}
