//! Build-time filesystem validation of autogenerate references.
//!
//! Every autogenerated sidebar entry names a directory under the site's
//! content root. The renderer scans that directory into child entries at
//! build time; this stage only confirms the reference resolves to an
//! existing directory and reports how many pages the scan would pick up.
//! A missing directory is fatal: the build must not proceed with a
//! navigation definition pointing at nothing.
//!
//! Children are never materialized here. The scan that produces them is
//! the renderer's responsibility.

use crate::config::{ConfigError, NavConfig};
use crate::nav::{self, NavNode};
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

/// File extensions counted as pages when sizing an autogenerated section.
const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Report produced by [`check`], consumed by the output module.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub versions: Vec<VersionCheck>,
}

/// Autogenerate references of one version, in sidebar order.
#[derive(Debug, Serialize)]
pub struct VersionCheck {
    pub id: String,
    pub directories: Vec<DirectoryCheck>,
}

/// One resolved autogenerate reference.
#[derive(Debug, Serialize)]
pub struct DirectoryCheck {
    /// Label of the sidebar entry holding the reference.
    pub label: String,
    /// Directory as written in the definition.
    pub directory: String,
    /// Resolved path relative to the site root, for display.
    pub path: String,
    /// Markdown pages the renderer's scan would pick up.
    pub page_count: usize,
}

impl CheckReport {
    /// Total autogenerate references across all versions.
    pub fn directory_count(&self) -> usize {
        self.versions.iter().map(|v| v.directories.len()).sum()
    }
}

/// Resolve every autogenerate reference against `site_root/content_root`.
///
/// Fails with [`ConfigError::MissingDirectory`] naming the full path on the
/// first reference that does not resolve to an existing directory.
pub fn check(config: &NavConfig, site_root: &Path) -> Result<CheckReport, ConfigError> {
    let content_root = site_root.join(&config.content_root);

    let mut versions = Vec::new();
    for version in &config.versions {
        let mut directories = Vec::new();
        for (label, directory) in autogenerate_refs(&version.sidebar) {
            let resolved = content_root.join(directory);
            if !resolved.is_dir() {
                return Err(ConfigError::MissingDirectory {
                    label: label.to_string(),
                    path: resolved,
                });
            }
            directories.push(DirectoryCheck {
                label: label.to_string(),
                directory: directory.to_string(),
                path: format!("{}/{}", config.content_root, directory),
                page_count: count_pages(&resolved),
            });
        }
        versions.push(VersionCheck {
            id: version.id.clone(),
            directories,
        });
    }

    Ok(CheckReport { versions })
}

/// All autogenerate references in a sidebar as (label, directory) pairs,
/// depth-first in definition order.
fn autogenerate_refs(nodes: &[NavNode]) -> Vec<(&str, &str)> {
    let mut refs = Vec::new();
    nav::visit(nodes, &mut |node| {
        if let NavNode::Autogenerate(n) = node {
            refs.push((n.label.as_str(), n.autogenerate.directory.as_str()));
        }
    });
    refs
}

/// Count markdown pages under a directory, recursively.
///
/// Unreadable entries are skipped rather than failing the check: the count
/// is informational, existence of the directory is the invariant.
fn count_pages(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| PAGE_EXTENSIONS.iter().any(|p| ext.eq_ignore_ascii_case(p)))
                .unwrap_or(false)
        })
        .count()
}
