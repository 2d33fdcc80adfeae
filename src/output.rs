//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric, not file-centric. The primary display for
//! every entity (version, sidebar entry, autogenerated directory) is its
//! semantic identity, a positional index plus label, with paths and hrefs
//! shown as secondary context via indented `Source:` / `Link:` lines.
//!
//! # Entity Display Contract
//!
//! Every entity follows a consistent two-level pattern:
//!
//! 1. **Header line**: positional index + label (+ optional detail like a
//!    page count)
//! 2. **Context lines**: indented `Link:`, `Source:`, `Default`, etc.
//!
//! ## Show
//!
//! ```text
//! v0.3 (canary) [default]
//! 001 Getting Started
//!     001 Installation
//!         Link: /getting-started/installation/
//! 002 Metrics
//!     Source: metrics/ (autogenerated)
//! ```
//!
//! ## Versions
//!
//! ```text
//! Versions
//! 001 v0.3 (canary)
//!     Id: v0.3
//!     Entries: 4
//!     Default
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 v0.3
//!     001 Metrics (3 pages)
//!         Source: docs/metrics/
//!
//! Checked 1 versions, 2 autogenerated directories
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::check::CheckReport;
use crate::config::NavConfig;
use crate::nav::{self, NavNode};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + label, with optional detail.
///
/// ```text
/// 001 Metrics (3 pages)
/// 001 Getting Started
/// ```
fn entity_header(index: usize, label: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), label, d),
        None => format!("{} {}", format_index(index), label),
    }
}

// ============================================================================
// Tree walker
// ============================================================================

/// A flattened node from walking a sidebar tree.
struct TreeLine<'a> {
    depth: usize,
    position: usize,
    node: &'a NavNode,
}

/// Walk a sidebar, assigning positional indices per sibling level.
fn walk_sidebar<'a>(nodes: &'a [NavNode]) -> Vec<TreeLine<'a>> {
    let mut lines = Vec::new();
    walk_sidebar_recursive(nodes, 0, &mut lines);
    lines
}

fn walk_sidebar_recursive<'a>(nodes: &'a [NavNode], depth: usize, lines: &mut Vec<TreeLine<'a>>) {
    for (i, node) in nodes.iter().enumerate() {
        lines.push(TreeLine {
            depth,
            position: i + 1,
            node,
        });
        walk_sidebar_recursive(node.children(), depth + 1, lines);
    }
}

// ============================================================================
// Show output
// ============================================================================

/// Format one version's sidebar as display lines.
fn format_sidebar(nodes: &[NavNode]) -> Vec<String> {
    let mut lines = Vec::new();
    for tree_line in walk_sidebar(nodes) {
        let base_indent = indent(tree_line.depth);
        let header = entity_header(tree_line.position, tree_line.node.label(), None);
        lines.push(format!("{}{}", base_indent, header));

        match tree_line.node {
            NavNode::Link(n) => {
                lines.push(format!("{}    Link: {}", base_indent, n.link));
            }
            NavNode::Autogenerate(n) => {
                lines.push(format!(
                    "{}    Source: {}/ (autogenerated)",
                    base_indent, n.autogenerate.directory
                ));
            }
            NavNode::Group(g) if g.items.is_empty() => {
                lines.push(format!("{}    (empty section)", base_indent));
            }
            NavNode::Group(_) => {}
        }
    }
    lines
}

/// Format the navigation tree of one version or of all versions.
///
/// `version` filters to a single version id; the caller has already
/// resolved that the id exists.
pub fn format_show_output(config: &NavConfig, version: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();

    let selected: Vec<_> = config
        .versions
        .iter()
        .filter(|v| version.is_none_or(|id| v.id == id))
        .collect();

    for (i, doc_version) in selected.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        let default_marker = if doc_version.id == config.default_version {
            " [default]"
        } else {
            ""
        };
        lines.push(format!("{}{}", doc_version.label, default_marker));
        lines.extend(format_sidebar(&doc_version.sidebar));
    }

    lines
}

/// Print the navigation tree to stdout.
pub fn print_show_output(config: &NavConfig, version: Option<&str>) {
    for line in format_show_output(config, version) {
        println!("{}", line);
    }
}

// ============================================================================
// Versions output
// ============================================================================

/// Format the version table with the default marked.
pub fn format_versions_output(config: &NavConfig) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Versions".to_string());

    let (versions, default) = config.version_table();
    for (i, version) in versions.iter().enumerate() {
        lines.push(entity_header(i + 1, &version.label, None));
        lines.push(format!("    Id: {}", version.id));
        lines.push(format!(
            "    Entries: {}",
            nav::node_count(&version.sidebar)
        ));
        if version.id == default {
            lines.push("    Default".to_string());
        }
    }

    lines
}

/// Print the version table to stdout.
pub fn print_versions_output(config: &NavConfig) {
    for line in format_versions_output(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format a check report: per version, each autogenerated directory with
/// its resolved source path and page count.
pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, version) in report.versions.iter().enumerate() {
        lines.push(entity_header(i + 1, &version.id, None));
        if version.directories.is_empty() {
            lines.push("    No autogenerated entries".to_string());
            continue;
        }
        for (j, dir) in version.directories.iter().enumerate() {
            let detail = format!("{} pages", dir.page_count);
            lines.push(format!(
                "    {}",
                entity_header(j + 1, &dir.label, Some(&detail))
            ));
            lines.push(format!("        Source: {}/", dir.path));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Checked {} versions, {} autogenerated directories",
        report.versions.len(),
        report.directory_count()
    ));

    lines
}

/// Print a check report to stdout.
pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}
