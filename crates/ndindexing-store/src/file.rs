//! File-backed stores.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::group::Group;
use crate::locate::FileLocator;

/// A root [`Group`] bound to a JSON file.
///
/// Changes are kept in memory until [`StoreFile::flush`].
#[derive(Debug)]
pub struct StoreFile {
    path: PathBuf,
    root: Group,
}

impl StoreFile {
    /// Create (or truncate) a store at `path` with an empty root group.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            root: Group::new(),
        };
        store.flush()?;
        Ok(store)
    }

    /// Open an existing store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open store '{}'", path.display()))?;
        let root: Group = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse store '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), groups = root.group_names().len(), "opened store");
        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    /// Open the store that `locator` finds for `file_name`.
    pub fn open_located(locator: &dyn FileLocator, file_name: &str) -> Result<Self> {
        let path = locator.locate(file_name)?;
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Group {
        &mut self.root
    }

    /// Write the root group to disk.
    pub fn flush(&self) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create store '{}'", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.root)
            .with_context(|| format!("Failed to write store '{}'", self.path.display()))?;
        writer.flush()?;
        Ok(())
    }
}
