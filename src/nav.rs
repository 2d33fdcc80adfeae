//! Navigation tree and version table types.
//!
//! These types are the loaded, in-memory form of a `navigation.toml`
//! definition. They are immutable after loading and are serialized unchanged
//! for the renderer handoff (TOML round-trip, JSON export), so the field
//! names here are the definition format.
//!
//! ## Variant selection
//!
//! A sidebar entry is a table whose fields decide its shape:
//!
//! - `label` + `link` is a leaf link
//! - `label` + `autogenerate = { directory = "..." }` is a directory reference
//! - `label` + optional `items` is a group (an absent or empty `items` list
//!   is a valid empty section)
//!
//! Each variant rejects unknown fields, so a table carrying fields from two
//! shapes fails to parse instead of silently picking one.

use serde::{Deserialize, Serialize};

/// One entry in a documentation sidebar.
///
/// Sibling order is significant: the renderer displays entries in exactly
/// the order they appear in the definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Leaf entry pointing at a page.
    Link(LinkNode),
    /// Entry whose children are derived from a content directory at build
    /// time, by the renderer.
    Autogenerate(AutogenerateNode),
    /// Labeled section containing further entries. Must be tried last: it is
    /// the only variant whose second field is optional.
    Group(GroupNode),
}

/// A leaf link: label plus page href.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkNode {
    pub label: String,
    pub link: String,
}

/// A directory reference expanded by the renderer's filesystem scan.
///
/// The store holds and validates the reference only; it never materializes
/// the children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutogenerateNode {
    pub label: String,
    pub autogenerate: Autogenerate,
}

/// Source specification of an autogenerated entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Autogenerate {
    /// Directory path relative to the site's content root.
    pub directory: String,
}

/// A labeled group of entries. Groups nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupNode {
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavNode>,
}

impl NavNode {
    /// Display label, present on every variant.
    pub fn label(&self) -> &str {
        match self {
            NavNode::Link(n) => &n.label,
            NavNode::Autogenerate(n) => &n.label,
            NavNode::Group(n) => &n.label,
        }
    }

    /// Child entries. Empty for links and autogenerated entries.
    pub fn children(&self) -> &[NavNode] {
        match self {
            NavNode::Group(n) => &n.items,
            _ => &[],
        }
    }
}

/// One published documentation version: identifier, display label, and the
/// sidebar tree that version owns.
///
/// Every version carries its own independent sidebar. Sidebars evolve across
/// published versions, so there is no single global tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocVersion {
    /// Version identifier, e.g. `"v0.3"`. Unique within the version table.
    pub id: String,
    /// Display label for the version switcher, e.g. `"v0.3 (canary)"`.
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<NavNode>,
}

/// Visit every node in the tree depth-first, in definition order.
pub fn visit<'a, F>(nodes: &'a [NavNode], f: &mut F)
where
    F: FnMut(&'a NavNode),
{
    for node in nodes {
        f(node);
        visit(node.children(), f);
    }
}

/// Count all nodes in the tree, groups included.
pub fn node_count(nodes: &[NavNode]) -> usize {
    let mut count = 0;
    visit(nodes, &mut |_| count += 1);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_nodes(toml_str: &str) -> Vec<NavNode> {
        #[derive(Deserialize)]
        struct Doc {
            sidebar: Vec<NavNode>,
        }
        let doc: Doc = toml::from_str(toml_str).unwrap();
        doc.sidebar
    }

    #[test]
    fn link_node_parsed() {
        let nodes = parse_nodes(
            r#"
sidebar = [{ label = "Installation", link = "/getting-started/installation/" }]
"#,
        );
        assert_eq!(
            nodes,
            vec![NavNode::Link(LinkNode {
                label: "Installation".into(),
                link: "/getting-started/installation/".into(),
            })]
        );
    }

    #[test]
    fn autogenerate_node_parsed() {
        let nodes = parse_nodes(
            r#"
sidebar = [{ label = "Metrics", autogenerate = { directory = "metrics" } }]
"#,
        );
        match &nodes[0] {
            NavNode::Autogenerate(n) => {
                assert_eq!(n.label, "Metrics");
                assert_eq!(n.autogenerate.directory, "metrics");
            }
            other => panic!("expected autogenerate node, got {other:?}"),
        }
    }

    #[test]
    fn group_node_with_items_parsed() {
        let nodes = parse_nodes(
            r#"
[[sidebar]]
label = "Getting Started"
items = [{ label = "Installation", link = "/install/" }]
"#,
        );
        match &nodes[0] {
            NavNode::Group(g) => {
                assert_eq!(g.label, "Getting Started");
                assert_eq!(g.items.len(), 1);
                assert_eq!(g.items[0].label(), "Installation");
            }
            other => panic!("expected group node, got {other:?}"),
        }
    }

    #[test]
    fn bare_label_is_empty_group() {
        let nodes = parse_nodes(r#"sidebar = [{ label = "Coming Soon" }]"#);
        match &nodes[0] {
            NavNode::Group(g) => assert!(g.items.is_empty()),
            other => panic!("expected empty group, got {other:?}"),
        }
    }

    #[test]
    fn nested_groups_parse() {
        let nodes = parse_nodes(
            r#"
[[sidebar]]
label = "Guides"
items = [
    { label = "Basics", items = [{ label = "Setup", link = "/setup/" }] },
]
"#,
        );
        let guides = &nodes[0];
        let basics = &guides.children()[0];
        assert_eq!(basics.label(), "Basics");
        assert_eq!(basics.children()[0].label(), "Setup");
    }

    #[test]
    fn sibling_order_preserved() {
        let nodes = parse_nodes(
            r#"
sidebar = [
    { label = "Third", link = "/c/" },
    { label = "First", link = "/a/" },
    { label = "Second", link = "/b/" },
]
"#,
        );
        let labels: Vec<&str> = nodes.iter().map(|n| n.label()).collect();
        assert_eq!(labels, vec!["Third", "First", "Second"]);
    }

    #[test]
    fn mixed_shape_rejected() {
        // A table carrying both link and items matches no variant.
        #[derive(Deserialize)]
        struct Doc {
            #[allow(dead_code)]
            sidebar: Vec<NavNode>,
        }
        let result: Result<Doc, _> = toml::from_str(
            r#"
sidebar = [{ label = "Bad", link = "/x/", items = [] }]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        #[derive(Deserialize)]
        struct Doc {
            #[allow(dead_code)]
            sidebar: Vec<NavNode>,
        }
        let result: Result<Doc, _> = toml::from_str(
            r#"
sidebar = [{ label = "Metrics", autogenerate = { directory = "m", recurse = true } }]
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn visit_covers_nested_nodes_in_order() {
        let nodes = parse_nodes(
            r#"
[[sidebar]]
label = "A"
items = [
    { label = "B", link = "/b/" },
    { label = "C", items = [{ label = "D", link = "/d/" }] },
]

[[sidebar]]
label = "E"
autogenerate = { directory = "e" }
"#,
        );
        let mut seen = Vec::new();
        visit(&nodes, &mut |n| seen.push(n.label().to_string()));
        assert_eq!(seen, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(node_count(&nodes), 5);
    }

    #[test]
    fn doc_version_parses_with_sidebar() {
        let version: DocVersion = toml::from_str(
            r#"
id = "v0.3"
label = "v0.3 (canary)"
sidebar = [{ label = "Metrics", autogenerate = { directory = "metrics" } }]
"#,
        )
        .unwrap();
        assert_eq!(version.id, "v0.3");
        assert_eq!(version.sidebar.len(), 1);
    }

    #[test]
    fn doc_version_sidebar_defaults_empty() {
        let version: DocVersion = toml::from_str(
            r#"
id = "v0.1"
label = "v0.1"
"#,
        )
        .unwrap();
        assert!(version.sidebar.is_empty());
    }
}
