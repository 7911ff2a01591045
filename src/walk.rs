//! Depth-first directory traversal with filtering and cancellation.
//!
//! [`TreeWalker`] visits a root location and, depth-first, every descendant
//! permitted by its filters and depth limit, invoking the callbacks of a
//! caller-supplied [`TreeVisitor`]. Results accumulate in a sink value owned
//! by the caller, so the walker itself holds no state between invocations
//! and independent walks can run concurrently from separate threads as long
//! as they do not share a sink.
//!
//! # Visit order
//!
//! A directory's children are listed in whatever order the filesystem
//! yields them, partitioned into subdirectories and files. Surviving
//! subdirectories are walked first, then surviving files are visited, and
//! the enter/exit callbacks bracket exactly the directories whose descent
//! was not vetoed. The root itself is always visited at depth 0 and is
//! never filtered; filters apply to descendants only.
//!
//! Traversal runs over an explicit work stack rather than call recursion,
//! so pathologically deep trees cannot exhaust the call stack.
//!
//! # Cancellation
//!
//! Cancellation is cooperative: [`TreeVisitor::is_cancelled`] is polled at
//! every directory entry, around every file visit, and after every
//! directory exit. When it returns `true` the walk stops and
//! [`TreeVisitor::on_cancelled`] runs exactly once with a [`Cancellation`]
//! carrying the triggering node and its depth. The default handler
//! re-raises [`FskitError::Cancelled`]; overriding it to return `Ok(())`
//! suppresses the error and the walk returns normally with whatever the
//! sink holds so far.
//!
//! # Failure semantics
//!
//! Failing to list a directory's children aborts the whole walk with
//! [`FskitError::DirectoryList`]. There is no built-in retry or skip
//! policy; a caller wanting partial-failure tolerance implements it in the
//! callback layer, for example by probing readability in
//! [`TreeVisitor::on_directory_enter`] and vetoing descent.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fskit::walk::TreeWalker;
//! use fskit::filter::PathFilter;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), fskit::FskitError> {
//! let walker = TreeWalker::new()
//!     .file_filter(PathFilter::extension("md"))
//!     .max_depth(3);
//! let paths = walker.collect_paths(Path::new("docs"))?;
//! println!("found {} entries", paths.len());
//! # Ok(())
//! # }
//! ```

use crate::error::{Cancellation, FskitError};
use crate::filter::PathFilter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Callbacks invoked during a [`TreeWalker`] traversal.
///
/// All methods have default implementations, so a visitor only implements
/// the extension points it cares about. The `Sink` associated type is the
/// caller-owned result accumulator threaded through every callback.
pub trait TreeVisitor {
    /// Accumulated results, owned by the caller for the duration of the walk.
    type Sink;

    /// Called when a directory is entered, before any of its children.
    ///
    /// Returning `Ok(false)` vetoes the descent: the children are skipped
    /// and [`TreeVisitor::on_directory_exit`] is *not* called for this
    /// directory, so enter/exit pairs bracket only real descents.
    fn on_directory_enter(
        &mut self,
        _dir: &Path,
        _depth: usize,
        _sink: &mut Self::Sink,
    ) -> Result<bool, FskitError> {
        Ok(true)
    }

    /// Called for every file that survives filtering.
    fn on_file(&mut self, _file: &Path, _depth: usize, _sink: &mut Self::Sink) -> Result<(), FskitError> {
        Ok(())
    }

    /// Called after a directory's children have been processed (or skipped
    /// because the depth limit was reached).
    fn on_directory_exit(
        &mut self,
        _dir: &Path,
        _depth: usize,
        _sink: &mut Self::Sink,
    ) -> Result<(), FskitError> {
        Ok(())
    }

    /// Cancellation predicate, polled at every node visit.
    ///
    /// The default never cancels. The sink is readable here so a visitor
    /// can cancel based on what it has accumulated, for instance once a
    /// result limit is reached.
    fn is_cancelled(&mut self, _node: &Path, _depth: usize, _sink: &Self::Sink) -> bool {
        false
    }

    /// Invoked exactly once when a walk is cancelled.
    ///
    /// The default re-raises the cancellation as
    /// [`FskitError::Cancelled`]. Override it to return `Ok(())` to
    /// suppress the condition, in which case the walk returns normally and
    /// the sink holds the results accumulated up to the cancellation.
    fn on_cancelled(
        &mut self,
        cancellation: Cancellation,
        _sink: &mut Self::Sink,
    ) -> Result<(), FskitError> {
        Err(FskitError::Cancelled(cancellation))
    }
}

/// A visitor that records every visited path, directories at entry.
///
/// Useful as a building block for discovery helpers and as the simplest
/// way to snapshot a tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathCollector;

impl TreeVisitor for PathCollector {
    type Sink = Vec<PathBuf>;

    fn on_directory_enter(
        &mut self,
        dir: &Path,
        _depth: usize,
        sink: &mut Self::Sink,
    ) -> Result<bool, FskitError> {
        sink.push(dir.to_path_buf());
        Ok(true)
    }

    fn on_file(&mut self, file: &Path, _depth: usize, sink: &mut Self::Sink) -> Result<(), FskitError> {
        sink.push(file.to_path_buf());
        Ok(())
    }
}

/// Configurable depth-first directory traversal.
///
/// A `TreeWalker` is a reusable configuration: filters and a depth limit.
/// Each [`TreeWalker::walk`] invocation is independent and reentrant.
///
/// Filters may be uniform (applied to both categories) or split into a
/// directory-only and a file-only filter. Split filters are independent: a
/// directory filter never suppresses files and vice versa.
#[derive(Debug, Clone, Default)]
pub struct TreeWalker {
    dir_filter: Option<PathFilter>,
    file_filter: Option<PathFilter>,
    max_depth: Option<usize>,
}

impl TreeWalker {
    /// Creates a walker with no filters and unlimited depth.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one filter uniformly to subdirectories and files.
    #[must_use]
    pub fn filter(mut self, filter: PathFilter) -> Self {
        self.dir_filter = Some(filter.clone());
        self.file_filter = Some(filter);
        self
    }

    /// Filters which subdirectories are descended into. Files are not
    /// affected.
    #[must_use]
    pub fn directory_filter(mut self, filter: PathFilter) -> Self {
        self.dir_filter = Some(filter);
        self
    }

    /// Filters which files are visited. Subdirectories are not affected.
    #[must_use]
    pub fn file_filter(mut self, filter: PathFilter) -> Self {
        self.file_filter = Some(filter);
        self
    }

    /// Limits descent depth. The root is depth 0, so `max_depth(0)` visits
    /// only the root and never enumerates children.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Walks `root` depth-first, driving the visitor's callbacks.
    ///
    /// The root is always visited at depth 0, even when it matches no
    /// filter. A root that is not a readable directory, including a path
    /// that does not exist at all, is still reported once through
    /// [`TreeVisitor::on_file`].
    ///
    /// # Errors
    ///
    /// - [`FskitError::Cancelled`] when the visitor cancelled the walk and
    ///   its [`TreeVisitor::on_cancelled`] handler re-raised (the default)
    /// - [`FskitError::DirectoryList`] when listing a directory failed
    /// - any error returned by a visitor callback
    pub fn walk<V: TreeVisitor>(
        &self,
        root: &Path,
        visitor: &mut V,
        sink: &mut V::Sink,
    ) -> Result<(), FskitError> {
        debug!("walking {} (max_depth {:?})", root.display(), self.max_depth);
        match self.run(root, visitor, sink) {
            Err(FskitError::Cancelled(cancellation)) => {
                debug!(
                    "walk of {} cancelled at {} (depth {})",
                    root.display(),
                    cancellation.path.display(),
                    cancellation.depth
                );
                visitor.on_cancelled(cancellation, sink)
            }
            other => other,
        }
    }

    /// Convenience wrapper that collects every visited path.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`TreeWalker::walk`].
    pub fn collect_paths(&self, root: &Path) -> Result<Vec<PathBuf>, FskitError> {
        let mut paths = Vec::new();
        self.walk(root, &mut PathCollector, &mut paths)?;
        Ok(paths)
    }

    fn run<V: TreeVisitor>(
        &self,
        root: &Path,
        visitor: &mut V,
        sink: &mut V::Sink,
    ) -> Result<(), FskitError> {
        let mut stack: Vec<Frame> = Vec::new();
        if root.is_dir() {
            stack.push(Frame::EnterDir(root.to_path_buf(), 0));
        } else {
            // A start path that is not a readable directory, even one that
            // does not exist, is still reported once as a file.
            stack.push(Frame::VisitFile(root.to_path_buf(), 0));
        }

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::VisitFile(path, depth) => {
                    check_cancelled(visitor, &path, depth, sink)?;
                    trace!("file {} at depth {}", path.display(), depth);
                    visitor.on_file(&path, depth, sink)?;
                    check_cancelled(visitor, &path, depth, sink)?;
                }
                Frame::ExitDir(path, depth) => {
                    visitor.on_directory_exit(&path, depth, sink)?;
                    check_cancelled(visitor, &path, depth, sink)?;
                }
                Frame::EnterDir(path, depth) => {
                    check_cancelled(visitor, &path, depth, sink)?;
                    trace!("dir {} at depth {}", path.display(), depth);
                    if !visitor.on_directory_enter(&path, depth, sink)? {
                        // descent vetoed, no exit call pairs with it
                        continue;
                    }
                    let descend = self.max_depth.is_none_or(|limit| depth < limit);
                    if descend {
                        let (dirs, files) = self.list_children(&path)?;
                        stack.push(Frame::ExitDir(path, depth));
                        // Reversed pushes make the stack pop children in
                        // listing order, subdirectories before files.
                        for file in files.into_iter().rev() {
                            stack.push(Frame::VisitFile(file, depth + 1));
                        }
                        for dir in dirs.into_iter().rev() {
                            stack.push(Frame::EnterDir(dir, depth + 1));
                        }
                    } else {
                        stack.push(Frame::ExitDir(path, depth));
                    }
                }
            }
        }
        Ok(())
    }

    /// Lists a directory's children partitioned into filtered
    /// subdirectories and filtered files.
    ///
    /// Symlinks are not followed; a link pointing at a directory is
    /// reported as a file, which keeps cyclic link structures from
    /// looping the walk.
    fn list_children(&self, dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), FskitError> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        let entries = fs::read_dir(dir).map_err(|source| FskitError::DirectoryList {
            path: dir.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| FskitError::DirectoryList {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|source| FskitError::DirectoryList {
                path: path.clone(),
                source,
            })?;
            if file_type.is_dir() {
                if self.dir_filter.as_ref().is_none_or(|f| f.accept(&path)) {
                    dirs.push(path);
                }
            } else if self.file_filter.as_ref().is_none_or(|f| f.accept(&path)) {
                files.push(path);
            }
        }
        Ok((dirs, files))
    }
}

enum Frame {
    EnterDir(PathBuf, usize),
    VisitFile(PathBuf, usize),
    ExitDir(PathBuf, usize),
}

fn check_cancelled<V: TreeVisitor>(
    visitor: &mut V,
    path: &Path,
    depth: usize,
    sink: &V::Sink,
) -> Result<(), FskitError> {
    if visitor.is_cancelled(path, depth, sink) {
        return Err(FskitError::Cancelled(Cancellation {
            path: path.to_path_buf(),
            depth,
        }));
    }
    Ok(())
}
