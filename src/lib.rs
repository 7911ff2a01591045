//! fskit - Cross-platform filesystem utilities
//!
//! A collection of small, focused helpers layered over the platform's
//! file and path primitives: pure path-string normalization, depth-first
//! directory traversal with filtering and cooperative cancellation,
//! predicate combinators, directory and metadata operations, and
//! byte-order helpers.
//!
//! # Architecture Overview
//!
//! The crate has two algorithmic cores and a ring of thin, stateless
//! utilities around them:
//!
//! - [`pathname`] normalizes path *strings* without touching the
//!   filesystem, so results are safe for display, comparison, and
//!   containment checks regardless of what exists on disk.
//! - [`walk`] visits directory trees depth-first over an explicit work
//!   stack, with split directory/file filters, depth limiting, and
//!   polled cancellation that is distinguishable from I/O failure.
//!
//! Everything else delegates to the operating system and adds error
//! context, cross-platform handling, or a more convenient shape.
//!
//! # Core Modules
//!
//! - [`pathname`] - Path-string normalization, prefix grammar, separators
//! - [`walk`] - Filtered depth-first traversal with cancellation
//! - [`filter`] - Path predicates and boolean combinators
//! - [`error`] - Typed errors for the core algorithms
//!
//! ## Supporting Modules
//!
//! - [`fs`] - Directory operations, metadata, discovery, temp directories
//! - [`platform`] - Home directory, path expansion, Windows long paths
//! - [`endian`] - Byte-order swapping and little-endian stream I/O
//! - [`constants`] - Separator and line-ending constants
//!
//! # Examples
//!
//! Normalize user-supplied paths without filesystem access:
//!
//! ```rust
//! use fskit::pathname::{normalize_with, SeparatorStyle};
//!
//! # fn main() -> Result<(), fskit::FskitError> {
//! assert_eq!(normalize_with("logs/../data/./cache", SeparatorStyle::Unix)?,
//!            Some("data/cache".into()));
//! assert_eq!(normalize_with("../escape", SeparatorStyle::Unix)?, None);
//! # Ok(())
//! # }
//! ```
//!
//! Walk a tree, collecting markdown files outside hidden directories:
//!
//! ```rust,no_run
//! use fskit::filter::PathFilter;
//! use fskit::walk::TreeWalker;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), fskit::FskitError> {
//! let walker = TreeWalker::new()
//!     .directory_filter(PathFilter::hidden().not())
//!     .file_filter(PathFilter::extension("md"));
//! let paths = walker.collect_paths(Path::new("docs"))?;
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod error;
pub mod filter;
pub mod pathname;
pub mod walk;

// Supporting modules
pub mod constants;
pub mod endian;
pub mod fs;
pub mod platform;

pub use error::{Cancellation, FskitError};
pub use filter::PathFilter;
pub use pathname::{SeparatorStyle, normalize, normalize_no_end_separator};
pub use walk::{PathCollector, TreeVisitor, TreeWalker};
