//! Integration tests for tree traversal, discovery, and path handling
//! working together on real directory trees.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

use fskit::filter::PathFilter;
use fskit::fs::{calculate_checksum, dir_size, find_files, find_matching, TempDir};
use fskit::pathname::{self, SeparatorStyle};
use fskit::walk::{TreeVisitor, TreeWalker};
use fskit::{Cancellation, FskitError};

/// Builds a small project-like tree:
///
/// ```text
/// root/
///   README.md
///   src/
///     lib.rs
///     walk.rs
///   docs/
///     guide.md
///     internal/
///       notes.md
///   .hidden/
///     secret.md
/// ```
fn build_tree(root: &Path) -> Result<()> {
    std::fs::create_dir_all(root.join("src"))?;
    std::fs::create_dir_all(root.join("docs/internal"))?;
    std::fs::create_dir_all(root.join(".hidden"))?;
    std::fs::write(root.join("README.md"), "# readme\n")?;
    std::fs::write(root.join("src/lib.rs"), "pub mod walk;\n")?;
    std::fs::write(root.join("src/walk.rs"), "// walk\n")?;
    std::fs::write(root.join("docs/guide.md"), "guide\n")?;
    std::fs::write(root.join("docs/internal/notes.md"), "notes\n")?;
    std::fs::write(root.join(".hidden/secret.md"), "secret\n")?;
    Ok(())
}

#[test]
fn test_collect_paths_covers_whole_tree() -> Result<()> {
    let temp = tempdir()?;
    let root = temp.path().join("root");
    build_tree(&root)?;

    let paths = TreeWalker::new().collect_paths(&root)?;

    // 5 directories (root, src, docs, docs/internal, .hidden) + 6 files
    assert_eq!(paths.len(), 11);
    assert_eq!(paths[0], root);
    assert!(paths.contains(&root.join("docs/internal/notes.md")));
    assert!(paths.contains(&root.join(".hidden/secret.md")));
    Ok(())
}

#[test]
fn test_filters_and_depth_compose() -> Result<()> {
    let temp = tempdir()?;
    let root = temp.path().join("root");
    build_tree(&root)?;

    let walker = TreeWalker::new()
        .directory_filter(PathFilter::hidden().not())
        .file_filter(PathFilter::extension("md"))
        .max_depth(2);
    let paths = walker.collect_paths(&root)?;

    // hidden dirs pruned, non-markdown files skipped, depth 2 keeps
    // docs/guide.md but cuts docs/internal's contents
    assert!(paths.contains(&root.join("README.md")));
    assert!(paths.contains(&root.join("docs/guide.md")));
    assert!(paths.contains(&root.join("docs/internal")));
    assert!(!paths.iter().any(|p| p.ends_with("notes.md")));
    assert!(!paths.iter().any(|p| p.ends_with("secret.md")));
    assert!(!paths.iter().any(|p| p.ends_with("lib.rs")));
    Ok(())
}

#[test]
fn test_find_files_agrees_with_walker() -> Result<()> {
    let temp = tempdir()?;
    let root = temp.path().join("root");
    build_tree(&root)?;

    let filter = PathFilter::glob("*.md")?;
    let mut found = find_files(&root, &filter)?;
    found.sort();

    let mut expected = vec![
        root.join("README.md"),
        root.join("docs/guide.md"),
        root.join("docs/internal/notes.md"),
        root.join(".hidden/secret.md"),
    ];
    expected.sort();

    assert_eq!(found, expected);
    Ok(())
}

#[test]
fn test_find_matching_returns_relative_paths() -> Result<()> {
    let temp = tempdir()?;
    let root = temp.path().join("root");
    build_tree(&root)?;

    let mut matches = find_matching(&root, "docs/**/*.md")?;
    matches.sort();
    assert_eq!(
        matches,
        vec![PathBuf::from("docs/guide.md"), PathBuf::from("docs/internal/notes.md")]
    );

    // every reported relative path is already in normal form
    for relative in &matches {
        let text = relative.to_string_lossy();
        let normalized = pathname::normalize_with(&text, SeparatorStyle::Unix)?;
        assert_eq!(normalized.as_deref(), Some(text.as_ref()));
    }
    Ok(())
}

/// Stops the walk once the sink has accumulated a fixed number of files.
struct LimitedCollector {
    limit: usize,
    cancellation: Option<Cancellation>,
}

impl TreeVisitor for LimitedCollector {
    type Sink = Vec<PathBuf>;

    fn on_file(
        &mut self,
        file: &Path,
        _depth: usize,
        sink: &mut Self::Sink,
    ) -> Result<(), FskitError> {
        sink.push(file.to_path_buf());
        Ok(())
    }

    fn is_cancelled(&mut self, _node: &Path, _depth: usize, sink: &Self::Sink) -> bool {
        sink.len() >= self.limit
    }

    fn on_cancelled(
        &mut self,
        cancellation: Cancellation,
        _sink: &mut Self::Sink,
    ) -> Result<(), FskitError> {
        self.cancellation = Some(cancellation);
        Ok(())
    }
}

#[test]
fn test_result_limit_via_suppressed_cancellation() -> Result<()> {
    let temp = tempdir()?;
    let root = temp.path().join("root");
    build_tree(&root)?;

    let mut visitor = LimitedCollector { limit: 2, cancellation: None };
    let mut files = Vec::new();
    TreeWalker::new().walk(&root, &mut visitor, &mut files)?;

    assert_eq!(files.len(), 2);
    let cancellation = visitor.cancellation.expect("walk should have been cancelled");
    assert!(cancellation.depth >= 1);
    Ok(())
}

#[test]
fn test_unsuppressed_cancellation_is_distinguishable() -> Result<()> {
    let temp = tempdir()?;
    let root = temp.path().join("root");
    build_tree(&root)?;

    struct StopImmediately;
    impl TreeVisitor for StopImmediately {
        type Sink = ();
        fn is_cancelled(&mut self, _node: &Path, _depth: usize, _sink: &Self::Sink) -> bool {
            true
        }
    }

    let err = TreeWalker::new().walk(&root, &mut StopImmediately, &mut ()).unwrap_err();
    assert!(err.is_cancelled());
    match err {
        FskitError::Cancelled(cancellation) => {
            assert_eq!(cancellation.path, root);
            assert_eq!(cancellation.depth, 0);
        }
        other => panic!("expected cancellation, got {other}"),
    }
    Ok(())
}

#[test]
fn test_temp_dir_checksums_and_sizes() -> Result<()> {
    let staging = TempDir::new("integration")?;
    let file = staging.path().join("payload.bin");
    std::fs::write(&file, vec![7u8; 1024])?;

    assert_eq!(dir_size(staging.path())?, 1024);

    let first = calculate_checksum(&file)?;
    let second = calculate_checksum(&file)?;
    assert_eq!(first, second);

    std::fs::write(&file, vec![8u8; 1024])?;
    assert_ne!(calculate_checksum(&file)?, first);
    Ok(())
}

#[test]
fn test_concat_builds_paths_that_walk_finds() -> Result<()> {
    let temp = tempdir()?;
    let root = temp.path().join("root");
    build_tree(&root)?;

    let root_str = root.to_string_lossy();
    let joined = pathname::concat(&root_str, "docs/../src/lib.rs")?
        .expect("well-formed path should normalize");
    assert!(Path::new(&joined).is_file());
    Ok(())
}
