//! File metadata operations: sizes, checksums, and timestamps.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Calculates the total size in bytes of all regular files under a path.
///
/// Symlinks are not followed. A path that is a single file reports that
/// file's size; a missing path reports an error.
///
/// # Examples
///
/// ```rust,no_run
/// use fskit::fs::dir_size;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let bytes = dir_size(Path::new("target"))?;
/// println!("build artifacts: {bytes} bytes");
/// # Ok(())
/// # }
/// ```
pub fn dir_size(path: &Path) -> Result<u64> {
    let mut total = 0;
    for entry in WalkDir::new(path).follow_links(false) {
        let entry = entry
            .with_context(|| format!("Failed to read directory entry under {}", path.display()))?;
        if entry.file_type().is_file() {
            total += entry
                .metadata()
                .with_context(|| format!("Failed to read metadata: {}", entry.path().display()))?
                .len();
        }
    }
    Ok(total)
}

/// Calculates the SHA-256 checksum of a file, returned as lowercase hex.
///
/// The file is read in streaming fashion, so arbitrarily large files do
/// not load into memory at once.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn calculate_checksum(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path)
        .with_context(|| format!("Failed to open file for checksum: {}", path.display()))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)
        .with_context(|| format!("Failed to read file for checksum: {}", path.display()))?;
    Ok(hex::encode(hasher.finalize()))
}

/// Returns the last-modified time of a path.
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the platform does
/// not record modification times.
pub fn get_modified_time(path: &Path) -> Result<std::time::SystemTime> {
    fs::metadata(path)
        .with_context(|| format!("Failed to read metadata: {}", path.display()))?
        .modified()
        .with_context(|| format!("Modification time unavailable for {}", path.display()))
}

/// Compares the modification times of two paths.
///
/// Returns `Ordering::Less` when `path1` is older than `path2`.
///
/// # Errors
///
/// Returns an error if either path's metadata cannot be read.
pub fn compare_file_times(path1: &Path, path2: &Path) -> Result<std::cmp::Ordering> {
    let time1 = get_modified_time(path1)?;
    let time2 = get_modified_time(path2)?;
    Ok(time1.cmp(&time2))
}

/// Checks whether a path is a regular file that the current process can
/// open for reading.
#[must_use]
pub fn file_exists_and_readable(path: &Path) -> bool {
    path.is_file() && fs::File::open(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_dir_size() {
        let temp = tempdir().unwrap();
        let root = temp.path();

        std::fs::write(root.join("a.bin"), vec![0u8; 100]).unwrap();
        std::fs::create_dir(root.join("sub")).unwrap();
        std::fs::write(root.join("sub/b.bin"), vec![0u8; 50]).unwrap();

        assert_eq!(dir_size(root).unwrap(), 150);
        assert_eq!(dir_size(&root.join("a.bin")).unwrap(), 100);
    }

    #[test]
    fn test_dir_size_missing_path() {
        let temp = tempdir().unwrap();
        assert!(dir_size(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_calculate_checksum() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("data.txt");
        std::fs::write(&file, "hello world").unwrap();

        let checksum = calculate_checksum(&file).unwrap();
        // well-known SHA-256 of "hello world"
        assert_eq!(
            checksum,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );

        // identical content, identical checksum
        let copy = temp.path().join("copy.txt");
        std::fs::write(&copy, "hello world").unwrap();
        assert_eq!(calculate_checksum(&copy).unwrap(), checksum);
    }

    #[test]
    fn test_calculate_checksum_missing_file() {
        let temp = tempdir().unwrap();
        assert!(calculate_checksum(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_compare_file_times() {
        let temp = tempdir().unwrap();
        let older = temp.path().join("older.txt");
        let newer = temp.path().join("newer.txt");

        std::fs::write(&older, "1").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        std::fs::write(&newer, "2").unwrap();

        let ordering = compare_file_times(&older, &newer).unwrap();
        assert_ne!(ordering, std::cmp::Ordering::Greater);
        assert_eq!(compare_file_times(&older, &older).unwrap(), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_file_exists_and_readable() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(file_exists_and_readable(&file));
        assert!(!file_exists_and_readable(&temp.path().join("missing")));
        // directories are not files
        assert!(!file_exists_and_readable(temp.path()));
    }
}
