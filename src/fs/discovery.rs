//! File discovery and search operations.
//!
//! Two discovery styles are provided: [`find_files`] drives the traversal
//! core with a [`PathFilter`] and returns absolute paths, while
//! [`find_matching`] matches a glob pattern against base-relative paths,
//! which is the right shape when the pattern spans directories
//! (`docs/**/*.md`).

use anyhow::{Context, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::filter::PathFilter;
use crate::walk::{TreeVisitor, TreeWalker};

struct FileCollector;

impl TreeVisitor for FileCollector {
    type Sink = Vec<PathBuf>;

    fn on_file(
        &mut self,
        file: &Path,
        _depth: usize,
        sink: &mut Self::Sink,
    ) -> Result<(), crate::FskitError> {
        sink.push(file.to_path_buf());
        Ok(())
    }
}

/// Recursively finds files accepted by a filter in a directory tree.
///
/// Only regular files are returned; directories are traversed but never
/// reported. Searching a path that is not a directory yields an empty
/// vector.
///
/// # Examples
///
/// ```rust,no_run
/// use fskit::filter::PathFilter;
/// use fskit::fs::find_files;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let rust_sources = find_files(Path::new("src"), &PathFilter::extension("rs"))?;
/// let fixtures = find_files(Path::new("tests"), &PathFilter::prefix("fixture_"))?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if any directory in the tree cannot be listed. Callers
/// wanting to tolerate unreadable subtrees should drive
/// [`TreeWalker`] directly and veto descent in the enter callback.
pub fn find_files(dir: &Path, filter: &PathFilter) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    debug!("searching {} with {:?}", dir.display(), filter);
    let mut files = Vec::new();
    TreeWalker::new()
        .file_filter(filter.clone())
        .walk(dir, &mut FileCollector, &mut files)
        .with_context(|| format!("Failed to search directory: {}", dir.display()))?;
    debug!("found {} files under {}", files.len(), dir.display());
    Ok(files)
}

/// Finds all paths matching a glob pattern under a base directory.
///
/// The pattern is matched against paths relative to `base`, so it can span
/// directory levels (`agents/**/*.md`). Matches are returned relative to
/// `base`. Symlinks are not followed.
///
/// # Errors
///
/// Returns an error if the pattern is invalid glob syntax or the base path
/// cannot be canonicalized.
///
/// # Examples
///
/// ```rust,no_run
/// use fskit::fs::find_matching;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// for path in find_matching(Path::new("/repo"), "**/*.md")? {
///     println!("Found: {}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn find_matching(base: &Path, pattern_str: &str) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(pattern_str)
        .with_context(|| format!("Invalid glob pattern: {pattern_str}"))?;

    debug!("searching for pattern '{}' in {}", pattern_str, base.display());

    let base = base
        .canonicalize()
        .with_context(|| format!("Failed to canonicalize path: {}", base.display()))?;

    let mut matches = Vec::new();
    for entry in WalkDir::new(&base)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let path = entry.path();

        if let Ok(relative_path) = path.strip_prefix(&base) {
            let relative_str = relative_path.to_string_lossy();

            trace!("checking path: {}", relative_str);

            if pattern.matches(&relative_str) {
                matches.push(relative_path.to_path_buf());
            }
        }
    }

    debug!("found {} matches for pattern '{}'", matches.len(), pattern_str);
    Ok(matches)
}
