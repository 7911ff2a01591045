//! Error handling for fskit
//!
//! This module provides the typed error surface for the crate's core
//! operations. The error system follows two principles:
//! 1. **Strongly-typed errors** so callers can match on precise failure modes
//! 2. **Distinguishable interruption**: a cancelled traversal is a different
//!    variant from an I/O failure, so "the user stopped the operation" never
//!    gets conflated with "something broke"
//!
//! The higher-level file utilities in [`crate::fs`] and [`crate::platform`]
//! use [`anyhow`] with contextual messages instead; only the core algorithms
//! (path normalization and tree traversal) report through [`FskitError`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use fskit::FskitError;
//!
//! fn handle_error(error: FskitError) {
//!     match error {
//!         FskitError::Cancelled(cancel) => {
//!             eprintln!("stopped at {} (depth {})", cancel.path.display(), cancel.depth);
//!         }
//!         FskitError::DirectoryList { path, .. } => {
//!             eprintln!("could not list {}", path.display());
//!         }
//!         other => eprintln!("unexpected error: {other}"),
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// A cooperative cancellation raised during a tree walk.
///
/// Carries the node that triggered the cancellation check and its depth
/// relative to the walk root (root = 0). Produced by
/// [`TreeVisitor::is_cancelled`](crate::walk::TreeVisitor::is_cancelled)
/// returning `true` and delivered to
/// [`TreeVisitor::on_cancelled`](crate::walk::TreeVisitor::on_cancelled)
/// exactly once per cancelled walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    /// The file or directory being visited when the walk was cancelled.
    pub path: PathBuf,
    /// Depth of that node relative to the walk root.
    pub depth: usize,
}

/// The main error type for fskit core operations
#[derive(Error, Debug)]
pub enum FskitError {
    /// A path string contained an embedded NUL byte.
    ///
    /// NUL bytes in paths are rejected loudly rather than silently, since
    /// they are a common injection vector when path strings cross into C
    /// APIs. Ordinary malformed syntax is reported as a `None` result
    /// instead, never as an error.
    #[error("path contains an embedded NUL byte")]
    NulByte,

    /// A tree walk was cancelled by its visitor.
    ///
    /// Raised by the default
    /// [`on_cancelled`](crate::walk::TreeVisitor::on_cancelled) handler.
    /// A visitor that overrides the handler to return `Ok(())` suppresses
    /// this error and the walk returns the partial results instead.
    #[error("walk cancelled at {} (depth {})", .0.path.display(), .0.depth)]
    Cancelled(Cancellation),

    /// Listing a directory's children failed.
    ///
    /// This aborts the whole walk. There is no per-subtree recovery; a
    /// caller that wants to skip unreadable directories must check
    /// readability in its enter callback and veto descent there.
    #[error("failed to list directory {}", .path.display())]
    DirectoryList {
        /// The directory whose children could not be enumerated.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error raised from a visitor callback.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FskitError {
    /// Returns `true` if this error represents a cooperative cancellation
    /// rather than a genuine failure.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}
