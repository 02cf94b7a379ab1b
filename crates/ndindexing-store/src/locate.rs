//! Locating store files on a search path.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Resolves a file name to the path of an existing file.
pub trait FileLocator {
    fn locate(&self, file_name: &str) -> Result<PathBuf>;
}

/// A list of directories, usually taken from an environment variable such as
/// `NDINDEXING_PATH=/data/a:/data/b`.
///
/// The variable is read once, at construction.
#[derive(Debug, Clone, Default)]
pub struct EnvSearchPath {
    env_var: Option<String>,
    dirs: Vec<PathBuf>,
}

impl EnvSearchPath {
    /// Search the directories listed in `env_var`, split with the platform
    /// path separator. An unset variable gives an empty search path.
    pub fn new(env_var: &str) -> Self {
        let dirs: Vec<PathBuf> = match std::env::var_os(env_var) {
            Some(value) => std::env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        };
        tracing::debug!(env_var, dirs = dirs.len(), "search path from environment");
        Self {
            env_var: Some(env_var.to_string()),
            dirs,
        }
    }

    /// Search an explicit list of directories.
    pub fn from_dirs<P: Into<PathBuf>>(dirs: impl IntoIterator<Item = P>) -> Self {
        Self {
            env_var: None,
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn env_var(&self) -> Option<&str> {
        self.env_var.as_deref()
    }
}

impl FileLocator for EnvSearchPath {
    fn locate(&self, file_name: &str) -> Result<PathBuf> {
        let candidate = Path::new(file_name);
        if candidate.is_absolute() {
            if candidate.is_file() {
                return Ok(candidate.to_path_buf());
            }
            bail!("File '{}' not found", file_name);
        }

        if self.dirs.is_empty() {
            match &self.env_var {
                Some(var) => bail!(
                    "Cannot locate '{}': search path variable '{}' is unset or empty",
                    file_name,
                    var
                ),
                None => bail!("Cannot locate '{}': search path is empty", file_name),
            }
        }

        for dir in &self.dirs {
            let path = dir.join(file_name);
            if path.is_file() {
                tracing::debug!(file = file_name, path = %path.display(), "located file");
                return Ok(path);
            }
        }
        bail!(
            "File '{}' not found in search path {:?}",
            file_name,
            self.dirs
        )
    }
}
