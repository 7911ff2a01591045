//! Temporary directory management with RAII cleanup.

use crate::fs::dirs::{ensure_dir, remove_dir_all};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// A temporary directory that is removed when dropped.
///
/// The directory is created under the system temporary directory with a
/// unique name, so instances never collide across threads or processes.
/// Cleanup runs on drop even when the owning scope unwinds from a panic;
/// a cleanup failure is ignored rather than aborting the process.
///
/// # Examples
///
/// ```rust,no_run
/// use fskit::fs::TempDir;
///
/// # fn example() -> anyhow::Result<()> {
/// {
///     let temp = TempDir::new("staging")?;
///     std::fs::write(temp.path().join("scratch.txt"), "data")?;
/// } // directory removed here
/// # Ok(())
/// # }
/// ```
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    /// Creates a new temporary directory with the given prefix in its name.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(prefix: &str) -> Result<Self> {
        let temp_dir = std::env::temp_dir();
        let unique_name = format!("fskit_{}_{}", prefix, uuid::Uuid::new_v4());
        let path = temp_dir.join(unique_name);

        ensure_dir(&path)?;

        Ok(Self { path })
    }

    /// Returns the path to the temporary directory.
    ///
    /// The directory exists for as long as this instance does.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = remove_dir_all(&self.path);
    }
}
