//! Directory operations for creating, copying, cleaning, and removing
//! directories.
//!
//! This module provides cross-platform directory operations with proper
//! error handling and Windows long path support.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ensures a directory exists, creating it and all parent directories if
/// necessary.
///
/// # Arguments
///
/// * `path` - The directory path to create
///
/// # Returns
///
/// - `Ok(())` if the directory exists or was successfully created
/// - `Err` if the path exists but is not a directory, or creation fails
///
/// # Examples
///
/// ```rust,no_run
/// use fskit::fs::ensure_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// ensure_dir(Path::new("output/reports/daily"))?;
/// # Ok(())
/// # }
/// ```
///
/// # Platform Notes
///
/// - **Windows**: Long paths (>260 characters) are handled automatically
/// - **Unix**: Respects umask for directory permissions
pub fn ensure_dir(path: &Path) -> Result<()> {
    let safe_path = crate::platform::windows_long_path(path);

    if !safe_path.exists() {
        fs::create_dir_all(&safe_path).with_context(|| {
            let platform_help = if crate::platform::is_windows() {
                "On Windows: Check that the path length is < 260 chars or that long path support is enabled"
            } else {
                "Check directory permissions and path validity"
            };

            format!("Failed to create directory: {}\n\n{}", path.display(), platform_help)
        })?;
    } else if !safe_path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Ensures that the parent directory of a file path exists.
///
/// This is a convenience function for creating the directory structure
/// needed for a file before writing to it. A path with no parent is fine.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    Ok(())
}

/// Recursively copies a directory and all its contents to a new location.
///
/// Creates the destination directory if it doesn't exist and preserves the
/// directory structure.
///
/// # Behavior
///
/// - Recursively copies all subdirectories
/// - Copies only regular files (symlinks and special files are skipped)
/// - Overwrites existing files in the destination
///
/// # Errors
///
/// Returns an error if any directory cannot be read or any file copy fails.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    ensure_dir(dst)?;

    for entry in
        fs::read_dir(src).with_context(|| format!("Failed to read directory: {}", src.display()))?
    {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir(&src_path, &dst_path)?;
        } else if file_type.is_file() {
            fs::copy(&src_path, &dst_path).with_context(|| {
                format!("Failed to copy file from {} to {}", src_path.display(), dst_path.display())
            })?;
        }
        // Skip symlinks and other file types
    }

    Ok(())
}

/// Removes a directory's contents without removing the directory itself.
///
/// Subdirectories are removed recursively; symlinks are removed without
/// being followed.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or an entry cannot be
/// removed.
pub fn clean_dir(path: &Path) -> Result<()> {
    for entry in
        fs::read_dir(path).with_context(|| format!("Failed to read directory: {}", path.display()))?
    {
        let entry = entry?;
        let entry_path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&entry_path)
                .with_context(|| format!("Failed to remove directory: {}", entry_path.display()))?;
        } else {
            fs::remove_file(&entry_path)
                .with_context(|| format!("Failed to remove file: {}", entry_path.display()))?;
        }
    }
    Ok(())
}

/// Recursively removes a directory and all its contents.
///
/// Safe to call on a directory that does not exist; that is not an error,
/// which makes this suitable for cleanup paths.
///
/// # Errors
///
/// Returns an error if the removal fails due to permissions or other
/// filesystem errors.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove directory: {}", path.display()))?;
    }
    Ok(())
}
