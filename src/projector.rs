//! Tree projection: native parse nodes to the serializable tree model.
//!
//! The projector is the pure transform between tree-sitter's node handles
//! and the UI-renderable tree the boundary serves. It is total over any
//! well-formed tree: projection never fails, never deduplicates, and never
//! reorders children.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::address::node_key;
use crate::icons::icon_for;

/// A serializable snapshot of one syntax-tree node and its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedNode {
    /// Decimal string of the node's byte-span sum. Not globally unique;
    /// see `crate::address`.
    pub key: String,
    /// Grammar kind name, used as the display label.
    pub label: String,
    pub data: NodeData,
    /// Cosmetic display tag; empty for unmapped kinds.
    pub icon: String,
    pub children: Vec<ProjectedNode>,
}

/// The per-node attribute snapshot carried alongside the tree structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(rename = "type")]
    pub kind: String,
    pub is_named: bool,
    pub start_index: usize,
    pub end_index: usize,
    /// S-expression rendering of the node.
    pub sexp: String,
    pub type_id: u16,
    pub text: String,
}

/// Project a native node (and all descendants) into a [`ProjectedNode`].
///
/// Children are projected recursively in left-to-right sibling order. A
/// node only counts as having children when its `child(0)` linkage is
/// present; the collected child list is discarded when the linkage says
/// the node is a leaf, rather than trusting the collection length.
pub fn project(node: Node<'_>, source: &str) -> ProjectedNode {
    let mut cursor = node.walk();
    let children: Vec<ProjectedNode> = node
        .children(&mut cursor)
        .map(|child| project(child, source))
        .collect();

    let has_children = node.child(0).is_some();

    ProjectedNode {
        key: node_key(&node),
        label: node.kind().to_string(),
        data: NodeData {
            kind: node.kind().to_string(),
            is_named: node.is_named(),
            start_index: node.start_byte(),
            end_index: node.end_byte(),
            sexp: node.to_sexp(),
            type_id: node.kind_id(),
            text: source[node.byte_range()].to_string(),
        },
        icon: icon_for(node.kind()).to_string(),
        children: if has_children { children } else { Vec::new() },
    }
}
