//! Test utilities for file-backed storage tests.
//!
//! Provides an RAII temp-directory environment so test data is removed
//! even when a test panics.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::SessionConnection;

/// Test environment with a temporary session directory that is cleaned up
/// automatically when dropped.
pub struct TestEnvironment {
    pub connection: SessionConnection,
    /// Base directory path for manual inspection if needed.
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = SessionConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}
