//! File system utilities for cross-platform file operations
//!
//! This module provides directory, metadata, discovery, and temporary-file
//! helpers designed to work consistently across Windows, macOS, and Linux.
//! All functions handle platform differences such as path lengths and
//! separators, and report failures with enough context to act on.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fskit::fs::{ensure_dir, calculate_checksum, dir_size};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! // Create directory structure
//! ensure_dir(Path::new("output/reports"))?;
//!
//! // Verify file integrity
//! let checksum = calculate_checksum(Path::new("output/report.csv"))?;
//! println!("File checksum: {checksum}");
//!
//! // Measure a tree
//! println!("{} bytes", dir_size(Path::new("output"))?);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod dirs;
pub mod discovery;
pub mod metadata;
pub mod temp;

// Re-export commonly used items from each module

// Directory operations
pub use dirs::{clean_dir, copy_dir, ensure_dir, ensure_parent_dir, remove_dir_all};

// File discovery
pub use discovery::{find_files, find_matching};

// Temporary directories
pub use temp::TempDir;

// Metadata operations
pub use metadata::{
    calculate_checksum, compare_file_times, dir_size, file_exists_and_readable, get_modified_time,
};
