//! # docnav
//!
//! Navigation configuration store for versioned documentation sites. One
//! `navigation.toml` is the data source: it declares the sidebar tree for
//! each published version, the version switcher table with its default
//! selector, and the site metadata the renderer needs alongside them.
//!
//! # Architecture: Load, Validate, Hand Off
//!
//! docnav owns the declarative definition and nothing downstream of it:
//!
//! ```text
//! navigation.toml  →  NavConfig   (load: merge over stock defaults, validate)
//! NavConfig        →  check       (resolve autogenerate dirs against the fs)
//! NavConfig        →  JSON/TOML   (immutable handoff to the external renderer)
//! ```
//!
//! The loaded [`config::NavConfig`] is constructed once, validated, and never
//! mutated. Rendering pages, processing markdown, and expanding autogenerated
//! entries into children are the external static-site framework's job; docnav
//! holds and validates the references it will consume.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Sidebar tree (`NavNode` sum type) and version table types |
//! | [`config`] | `navigation.toml` loading, merging, validation, round-trip |
//! | [`check`] | Build-time resolution of autogenerate directory references |
//! | [`output`] | CLI output formatting — tree-based display of the store |
//!
//! # Design Decisions
//!
//! ## A Sum Type, Not a Dynamic Tree
//!
//! Sidebar entries are a tagged variant ([`nav::NavNode`]): a group with
//! children, a leaf link, or an autogenerated directory reference. Each
//! variant is its own struct with explicit, validated fields and unknown
//! keys rejected. The alternative, a single node struct where half the
//! fields are optional, pushes shape errors past loading and into the
//! renderer.
//!
//! ## One Sidebar Per Version
//!
//! Sidebars evolve across published versions: sections appear, pages move.
//! A single global tree cannot describe a real multi-version site, so each
//! [`nav::DocVersion`] owns its own sidebar and the default selector picks
//! which one `navigation()` returns.
//!
//! ## Validation in Two Stages
//!
//! Model invariants (default version exists, unique ids, non-empty hrefs
//! and directories) are checked at load time with no filesystem access, so
//! the definition is loadable anywhere. Filesystem truth, whether the
//! autogenerate directories exist, is a separate [`check`] pass that needs
//! the site root. Both are fatal: the renderer must never receive an
//! inconsistent definition.
//!
//! ## Stock Defaults Under the User File
//!
//! Site metadata has sensible defaults; the user definition is merged on
//! top of a stock base layer, so a file only states what it changes.
//! Arrays replace rather than extend: a user version table is never mixed
//! with the stock one.

pub mod check;
pub mod config;
pub mod nav;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
