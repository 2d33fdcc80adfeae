//! Shared test utilities for the docnav test suite.
//!
//! Provides fixture setup, lookup helpers, and sidebar tree assertions
//! that work with the loaded store (`NavConfig`, `DocVersion`, `NavNode`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let config = crate::config::load(&tmp.path().join("navigation.toml")).unwrap();
//!
//! let canary = find_version(&config, "v0.3");
//! assert_sidebar_shape(&canary.sidebar, &[
//!     ("Getting Started", &["Installation"]),
//!     ("Metrics", &[]),
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::NavConfig;
use crate::nav::{DocVersion, NavNode};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Store lookups — panics with a clear message on miss
// =========================================================================

/// Find a version by id. Panics if not found.
pub fn find_version<'a>(config: &'a NavConfig, id: &str) -> &'a DocVersion {
    config.find_version(id).unwrap_or_else(|| {
        let ids: Vec<&str> = config.versions.iter().map(|v| v.id.as_str()).collect();
        panic!("version '{id}' not found. Available: {ids:?}")
    })
}

/// Find a top-level sidebar entry by label. Panics if not found.
pub fn find_entry<'a>(nodes: &'a [NavNode], label: &str) -> &'a NavNode {
    nodes.iter().find(|n| n.label() == label).unwrap_or_else(|| {
        let labels = sidebar_labels(nodes);
        panic!("sidebar entry '{label}' not found. Available: {labels:?}")
    })
}

// =========================================================================
// Sidebar helpers
// =========================================================================

/// Top-level sidebar labels in order.
pub fn sidebar_labels(nodes: &[NavNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.label()).collect()
}

/// Assert that a sidebar tree matches an expected shape.
///
/// Each entry is `(label, child_labels)`. Use `&[]` for leaves and for
/// autogenerated entries (their children only exist after the renderer's
/// scan).
///
/// ```rust
/// assert_sidebar_shape(config.navigation(), &[
///     ("Getting Started", &["Installation"]),
///     ("Metrics", &[]),
/// ]);
/// ```
pub fn assert_sidebar_shape(nodes: &[NavNode], expected: &[(&str, &[&str])]) {
    let actual = sidebar_labels(nodes);
    let expected_labels: Vec<&str> = expected.iter().map(|(l, _)| *l).collect();
    assert_eq!(actual, expected_labels, "sidebar top-level labels mismatch");

    for (label, children) in expected {
        let entry = find_entry(nodes, label);
        let actual_children = sidebar_labels(entry.children());
        assert_eq!(
            actual_children,
            children.to_vec(),
            "children of '{label}' mismatch"
        );
    }
}
