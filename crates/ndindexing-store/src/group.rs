//! Hierarchical groups of attributes and integer/string datasets.
//!
//! A [`Group`] plays the role of an HDF5 or NetCDF group: it holds scalar
//! attributes, one-dimensional datasets, and named child groups. Names are
//! unique within each of the three namespaces.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// A scalar attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attr {
    Int(i64),
    Str(String),
}

/// A one-dimensional dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dtype", content = "values", rename_all = "lowercase")]
pub enum Dataset {
    Int(Vec<i64>),
    Str(Vec<String>),
}

impl Dataset {
    fn dtype(&self) -> &'static str {
        match self {
            Dataset::Int(_) => "int",
            Dataset::Str(_) => "str",
        }
    }
}

/// A named container of attributes, datasets and child groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attrs: BTreeMap<String, Attr>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    datasets: BTreeMap<String, Dataset>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    groups: BTreeMap<String, Group>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Child groups

    /// Create an empty child group. Fails if `name` already exists.
    pub fn create_group(&mut self, name: &str) -> Result<&mut Group> {
        if self.groups.contains_key(name) {
            bail!("Group '{}' already exists", name);
        }
        Ok(self.groups.entry(name.to_string()).or_default())
    }

    pub fn group(&self, name: &str) -> Result<&Group> {
        self.groups
            .get(name)
            .with_context(|| format!("Group '{}' not found", name))
    }

    pub fn group_mut(&mut self, name: &str) -> Result<&mut Group> {
        self.groups
            .get_mut(name)
            .with_context(|| format!("Group '{}' not found", name))
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Names of the child groups, sorted.
    pub fn group_names(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    // ------------------------------------------------------------------
    // Attributes

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: &str, value: Attr) {
        self.attrs.insert(name.to_string(), value);
    }

    pub fn attr(&self, name: &str) -> Result<&Attr> {
        self.attrs
            .get(name)
            .with_context(|| format!("Attribute '{}' not found", name))
    }

    pub fn int_attr(&self, name: &str) -> Result<i64> {
        match self.attr(name)? {
            Attr::Int(v) => Ok(*v),
            Attr::Str(s) => bail!("Attribute '{}' is a string ('{}'), expected an integer", name, s),
        }
    }

    pub fn str_attr(&self, name: &str) -> Result<&str> {
        match self.attr(name)? {
            Attr::Str(s) => Ok(s),
            Attr::Int(v) => bail!("Attribute '{}' is an integer ({}), expected a string", name, v),
        }
    }

    // ------------------------------------------------------------------
    // Datasets

    /// Write an integer dataset, replacing any previous dataset of that name.
    pub fn write_ints(&mut self, name: &str, values: &[i64]) {
        self.datasets
            .insert(name.to_string(), Dataset::Int(values.to_vec()));
    }

    /// Write a string dataset, replacing any previous dataset of that name.
    pub fn write_strings<S: AsRef<str>>(&mut self, name: &str, values: &[S]) {
        let values = values.iter().map(|s| s.as_ref().to_string()).collect();
        self.datasets.insert(name.to_string(), Dataset::Str(values));
    }

    pub fn read_ints(&self, name: &str) -> Result<&[i64]> {
        match self.dataset(name)? {
            Dataset::Int(v) => Ok(v),
            other => bail!("Dataset '{}' has type {}, expected int", name, other.dtype()),
        }
    }

    pub fn read_strings(&self, name: &str) -> Result<&[String]> {
        match self.dataset(name)? {
            Dataset::Str(v) => Ok(v),
            other => bail!("Dataset '{}' has type {}, expected str", name, other.dtype()),
        }
    }

    fn dataset(&self, name: &str) -> Result<&Dataset> {
        self.datasets
            .get(name)
            .with_context(|| format!("Dataset '{}' not found", name))
    }
}
