//! Navigation definition loading, merging, and validation.
//!
//! The whole site definition lives in one `navigation.toml`: site metadata,
//! the version table with its default selector, and one sidebar tree per
//! version. User files are sparse: stock defaults are the base layer and the
//! file is merged on top, so a definition only needs the keys it sets.
//! Unknown keys are rejected to catch typos early.
//!
//! ## Definition Format
//!
//! ```toml
//! title = "Continuous Eval"
//! base = "/"
//! content_root = "docs"          # autogenerate directories resolve against this
//! default_version = "v0.3"
//!
//! [social]
//! github = "https://github.com/example/project"
//!
//! [[versions]]
//! id = "v0.3"
//! label = "v0.3 (canary)"
//!
//! [[versions.sidebar]]
//! label = "Getting Started"
//! items = [{ label = "Installation", link = "/getting-started/installation/" }]
//!
//! [[versions.sidebar]]
//! label = "Metrics"
//! autogenerate = { directory = "metrics" }
//! ```
//!
//! ## Validation
//!
//! Loading fails, naming the offending field, when:
//! - the default version identifier is not in the version table
//! - a version identifier is empty or duplicated
//! - a link has an empty href
//! - an autogenerated entry has an empty directory
//!
//! Whether autogenerate directories actually exist on disk is checked
//! separately (see [`crate::check`]): it needs the site root, and the
//! definition alone is loadable without one.

use crate::nav::{self, DocVersion, NavNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("link {label:?} has an empty href")]
    EmptyLink { label: String },
    #[error("autogenerated entry {label:?} has an empty directory")]
    EmptyDirectory { label: String },
    #[error("version entry with empty id")]
    EmptyVersionId,
    #[error("duplicate version id {id:?}")]
    DuplicateVersion { id: String },
    #[error("default version {id:?} is not in the version table (available: {available})")]
    UnknownDefaultVersion { id: String, available: String },
    #[error("autogenerated entry {label:?} references a missing directory: {path}")]
    MissingDirectory { label: String, path: PathBuf },
}

/// The loaded navigation definition.
///
/// Constructed once at startup via [`load`], validated, and never mutated.
/// Safe to share across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Site title shown by the renderer.
    pub title: String,
    /// Base path the site is served under.
    pub base: String,
    /// Directory (relative to the site root) that autogenerate directory
    /// references resolve against.
    pub content_root: String,
    /// Identifier of the version selected when none is requested. Must match
    /// exactly one entry in `versions`.
    pub default_version: String,
    /// Social links (name to URL), passed through to the renderer.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub social: BTreeMap<String, String>,
    /// Published versions in display order, each owning its sidebar.
    pub versions: Vec<DocVersion>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            base: "/".to_string(),
            content_root: "docs".to_string(),
            default_version: "v1.0".to_string(),
            social: BTreeMap::new(),
            versions: vec![DocVersion {
                id: "v1.0".to_string(),
                label: "v1.0 (latest)".to_string(),
                sidebar: vec![],
            }],
        }
    }
}

impl NavConfig {
    /// Validate the model invariants.
    ///
    /// Called by [`load`]; exposed for configs built in code.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.versions.len());
        for version in &self.versions {
            if version.id.is_empty() {
                return Err(ConfigError::EmptyVersionId);
            }
            if seen.contains(&version.id.as_str()) {
                return Err(ConfigError::DuplicateVersion {
                    id: version.id.clone(),
                });
            }
            seen.push(&version.id);
        }

        if !seen.contains(&self.default_version.as_str()) {
            return Err(ConfigError::UnknownDefaultVersion {
                id: self.default_version.clone(),
                available: seen.join(", "),
            });
        }

        for version in &self.versions {
            validate_nodes(&version.sidebar)?;
        }
        Ok(())
    }

    /// The default version's sidebar.
    ///
    /// Empty only for configs that were never validated.
    pub fn navigation(&self) -> &[NavNode] {
        self.find_version(&self.default_version)
            .map(|v| v.sidebar.as_slice())
            .unwrap_or_default()
    }

    /// The sidebar owned by a specific version.
    pub fn navigation_for(&self, id: &str) -> Option<&[NavNode]> {
        self.find_version(id).map(|v| v.sidebar.as_slice())
    }

    /// The ordered version table and the default version identifier.
    pub fn version_table(&self) -> (&[DocVersion], &str) {
        (&self.versions, &self.default_version)
    }

    pub fn find_version(&self, id: &str) -> Option<&DocVersion> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// Serialize back to the definition format.
    ///
    /// Reloading the output yields an identical structure.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Walk one sidebar and check per-node invariants.
fn validate_nodes(nodes: &[NavNode]) -> Result<(), ConfigError> {
    let mut error = None;
    nav::visit(nodes, &mut |node| {
        if error.is_some() {
            return;
        }
        match node {
            NavNode::Link(n) if n.link.is_empty() => {
                error = Some(ConfigError::EmptyLink {
                    label: n.label.clone(),
                });
            }
            NavNode::Autogenerate(n) if n.autogenerate.directory.is_empty() => {
                error = Some(ConfigError::EmptyDirectory {
                    label: n.label.clone(),
                });
            }
            _ => {}
        }
    });
    match error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

// =============================================================================
// Definition loading and merging
// =============================================================================

/// Returns the stock default definition as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging the user definition on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(NavConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely. In particular
///   a user `versions` array replaces the stock one, never extends it.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<NavConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NavConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load a navigation definition file.
///
/// The file is required: a documentation site without a definition is an
/// error, not a default. Run `docnav gen-config` to bootstrap one. User
/// values are merged on top of stock defaults, unknown keys are rejected,
/// and the result is validated.
pub fn load(path: &Path) -> Result<NavConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Returns a fully-commented stock `navigation.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docnav Navigation Definition
# ============================
# One file describes everything the renderer needs for navigation:
# site metadata, the version table, and one sidebar tree per version.
#
# Settings with defaults may be omitted. Unknown keys are an error.

# Site title shown by the renderer.
title = "Documentation"

# Base path the site is served under.
base = "/"

# Directory (relative to the site root) that autogenerate directory
# references resolve against.
content_root = "docs"

# The version selected when none is requested.
# Must match the id of exactly one [[versions]] entry.
default_version = "v1.0"

# ---------------------------------------------------------------------------
# Social links (optional) - name = URL, passed through to the renderer.
# ---------------------------------------------------------------------------
# [social]
# github = "https://github.com/example/project"

# ---------------------------------------------------------------------------
# Versions - display order matters. Each version owns its own sidebar.
# ---------------------------------------------------------------------------
[[versions]]
id = "v1.0"
label = "v1.0 (latest)"

# A sidebar is an ordered list of entries. The fields of an entry decide
# its shape:
#
#   { label = "...", link = "/page/" }                    leaf link
#   { label = "...", autogenerate = { directory = "d" } } children scanned
#                                                         from content_root/d
#   { label = "...", items = [ ... ] }                    group, nests freely
#
# [[versions.sidebar]]
# label = "Getting Started"
# items = [{ label = "Installation", link = "/getting-started/installation/" }]
#
# [[versions.sidebar]]
# label = "Reference"
# autogenerate = { directory = "reference" }
"##
}
