//! Path filter predicates for directory traversal.
//!
//! A filter is anything callable as a predicate over a [`Path`]. This module
//! wraps such predicates in a cloneable [`PathFilter`] handle and provides
//! the usual boolean combinators as plain function composition, plus a set
//! of ready-made constructors for the common cases (file name, glob
//! pattern, extension, prefix, suffix, hidden files).
//!
//! Name-based constructors test the final path component only, so the same
//! filter works no matter how deep the candidate sits in a tree.
//!
//! # Examples
//!
//! ```rust
//! use fskit::filter::PathFilter;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let markdown = PathFilter::extension("md");
//! assert!(markdown.accept(Path::new("docs/guide.md")));
//! assert!(!markdown.accept(Path::new("docs/guide.txt")));
//!
//! let visible_markdown = markdown.and(PathFilter::hidden().not());
//! assert!(!visible_markdown.accept(Path::new("docs/.draft.md")));
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use glob::Pattern;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A cloneable predicate over paths.
///
/// `PathFilter` is thread-safe and cheap to clone; clones share the same
/// underlying predicate. The label given at construction is carried along
/// for `Debug` output and log messages.
#[derive(Clone)]
pub struct PathFilter {
    label: Arc<str>,
    predicate: Arc<dyn Fn(&Path) -> bool + Send + Sync>,
}

impl PathFilter {
    /// Wraps an arbitrary predicate function.
    ///
    /// The label is used only for diagnostics.
    pub fn from_fn<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into().into(),
            predicate: Arc::new(predicate),
        }
    }

    /// A filter that accepts every path.
    #[must_use]
    pub fn accept_all() -> Self {
        Self::from_fn("all", |_| true)
    }

    /// A filter that rejects every path.
    #[must_use]
    pub fn accept_none() -> Self {
        Self::from_fn("none", |_| false)
    }

    /// Accepts paths whose file name equals `name` exactly.
    pub fn name(name: impl Into<String>) -> Self {
        let name = name.into();
        let label = format!("name({name})");
        Self::from_fn(label, move |path| {
            path.file_name().is_some_and(|n| n.to_string_lossy() == name.as_str())
        })
    }

    /// Accepts paths whose file name matches a glob pattern.
    ///
    /// The pattern is compiled once during creation for efficient matching
    /// and applies to the final path component only.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern contains invalid glob syntax.
    pub fn glob(pattern_str: &str) -> Result<Self> {
        let pattern = Pattern::new(pattern_str)
            .with_context(|| format!("Invalid glob pattern: {pattern_str}"))?;
        let label = format!("glob({pattern_str})");
        Ok(Self::from_fn(label, move |path| {
            path.file_name().is_some_and(|n| pattern.matches(&n.to_string_lossy()))
        }))
    }

    /// Accepts paths with the given extension (without the leading dot).
    pub fn extension(ext: impl Into<String>) -> Self {
        let ext = ext.into();
        let label = format!("extension({ext})");
        Self::from_fn(label, move |path| {
            path.extension().is_some_and(|e| e.to_string_lossy() == ext.as_str())
        })
    }

    /// Accepts paths whose file name starts with `prefix`.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let label = format!("prefix({prefix})");
        Self::from_fn(label, move |path| {
            path.file_name().is_some_and(|n| n.to_string_lossy().starts_with(prefix.as_str()))
        })
    }

    /// Accepts paths whose file name ends with `suffix`.
    ///
    /// Unlike [`PathFilter::extension`], the suffix is matched literally
    /// against the whole file name, so `suffix(".tar.gz")` works.
    pub fn suffix(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        let label = format!("suffix({suffix})");
        Self::from_fn(label, move |path| {
            path.file_name().is_some_and(|n| n.to_string_lossy().ends_with(suffix.as_str()))
        })
    }

    /// Accepts dotfiles (file names starting with `.`).
    #[must_use]
    pub fn hidden() -> Self {
        Self::from_fn("hidden", |path| {
            path.file_name().is_some_and(|n| n.to_string_lossy().starts_with('.'))
        })
    }

    /// Tests a candidate path against this filter.
    #[must_use]
    pub fn accept(&self, path: &Path) -> bool {
        (self.predicate)(path)
    }

    /// Combines two filters, accepting only paths both accept.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let label = format!("({} and {})", self.label, other.label);
        Self::from_fn(label, move |path| self.accept(path) && other.accept(path))
    }

    /// Combines two filters, accepting paths either accepts.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        let label = format!("({} or {})", self.label, other.label);
        Self::from_fn(label, move |path| self.accept(path) || other.accept(path))
    }

    /// Inverts this filter.
    #[must_use]
    pub fn not(self) -> Self {
        let label = format!("(not {})", self.label);
        Self::from_fn(label, move |path| !self.accept(path))
    }
}

impl fmt::Debug for PathFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathFilter").field(&self.label).finish()
    }
}
