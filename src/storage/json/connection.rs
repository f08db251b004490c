//! Session storage connection managing the on-disk location of mirror files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Connection to the session data directory.
///
/// All mirror files live under a single base directory created on
/// construction. Cloning is cheap; clones share the same location.
#[derive(Debug, Clone)]
pub struct SessionConnection {
    base_path: PathBuf,
}

impl SessionConnection {
    /// Create a connection rooted at the given directory, creating it if
    /// necessary.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).with_context(|| {
            format!("Failed to create session directory {}", base_path.display())
        })?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the JSON file backing a given storage key.
    pub fn key_file_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}
