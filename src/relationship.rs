//! Navigation paths between two nodes of the same tree.
//!
//! Given a source node and a target node, the resolver computes the
//! `.firstChild` / `.nextSibling` walk that reaches the target from the
//! frame shared with the source. The walk is discovered bottom-up from the
//! target and replayed top-down, operating on the native tree, never on a
//! projected one.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// One navigation move in a relationship path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavStep {
    FirstChild,
    NextSibling,
}

impl NavStep {
    /// The dotted-notation token for this step.
    pub fn token(&self) -> &'static str {
        match self {
            NavStep::FirstChild => ".firstChild",
            NavStep::NextSibling => ".nextSibling",
        }
    }
}

/// An ordered sequence of navigation steps, read left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipPath {
    steps: Vec<NavStep>,
}

impl RelationshipPath {
    pub fn new(steps: Vec<NavStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[NavStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Concatenated dotted notation, e.g. `.firstChild.nextSibling`.
    pub fn notation(&self) -> String {
        self.steps.iter().map(NavStep::token).collect()
    }
}

/// Outcome of resolving the path between two nodes.
///
/// The walk assumes the target hangs below the source's parent frame.
/// When that holds, it terminates at the shared frame and the pair is
/// `Related`. When the target's ancestor chain runs out first, the pair is
/// `Unreachable`; the partial walk is carried as-is rather than patched up
/// into something it is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    Related(RelationshipPath),
    Unreachable(RelationshipPath),
}

impl Relation {
    pub fn path(&self) -> &RelationshipPath {
        match self {
            Relation::Related(path) | Relation::Unreachable(path) => path,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Relation::Related(_))
    }
}

/// Compute the navigation path from `source` to `target`.
///
/// Walks upward from the target through `parent()` links. At each level the
/// current node's sibling index under its parent becomes one `FirstChild`
/// step plus that many `NextSibling` steps; levels are emitted root-most
/// first. The walk stops once the current ancestor's parent equals
/// `source.parent()` - which also covers the same-node case and, a quirk
/// of the stop condition, yields an empty path when source and target are
/// already siblings.
pub fn relationship_between<'tree>(source: Node<'tree>, target: Node<'tree>) -> Relation {
    let stop = source.parent();

    // Sibling-hop count per level, discovered target-up.
    let mut level_hops: Vec<usize> = Vec::new();
    let mut current = target;
    let mut parent = target.parent();

    loop {
        if parent == stop {
            return Relation::Related(assemble(&level_hops));
        }
        let Some(frame) = parent else {
            return Relation::Unreachable(assemble(&level_hops));
        };

        level_hops.push(sibling_index(frame, current));
        current = frame;
        parent = frame.parent();
    }
}

/// Count `next_sibling` hops from `parent`'s first child to `child`.
fn sibling_index(parent: Node<'_>, child: Node<'_>) -> usize {
    let mut hops = 0;
    let mut probe = parent.child(0);
    while let Some(node) = probe {
        if node == child {
            break;
        }
        hops += 1;
        probe = node.next_sibling();
    }
    hops
}

/// Flatten per-level hop counts (target-up order) into a replayable path.
fn assemble(level_hops: &[usize]) -> RelationshipPath {
    let mut steps = Vec::new();
    for &hops in level_hops.iter().rev() {
        steps.push(NavStep::FirstChild);
        steps.extend(std::iter::repeat(NavStep::NextSibling).take(hops));
    }
    RelationshipPath::new(steps)
}
