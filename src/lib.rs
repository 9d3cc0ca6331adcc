//! CST Inspector: concrete syntax tree inspection for JavaScript
//!
//! A tree-sitter-backed backend for syntax-tree playgrounds: callers submit
//! source code (and optionally a pattern query) and get back a serializable
//! projection of the concrete syntax tree, or a navigation path between two
//! nodes of that tree.
//!
//! # Architecture
//!
//! Two pure transforms make up the core. The projector
//! ([`projector::project`]) maps a native tree-sitter node and its
//! descendants into the UI-renderable [`ProjectedNode`] model; the
//! relationship resolver ([`relationship::relationship_between`]) computes
//! a `.firstChild`/`.nextSibling` walk between two nodes of the same tree.
//! Both consume trees produced by the parser boundary in [`ts`], and both
//! are total, stateless, and free of I/O. [`service::TreeInspector`] wires
//! the three boundary operations together over one owned parser.
//!
//! # Example
//!
//! ```no_run
//! use cst_inspector::TreeInspector;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut inspector = TreeInspector::new()?;
//!
//! let tree = inspector.parse("function f(a){ return a; }")?;
//! println!("root: {} ({} children)", tree.label, tree.children.len());
//!
//! let matches = inspector.query("f(1); g(2);", "(call_expression) @call")?;
//! println!("{} captures", matches.len());
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod icons;
pub mod pool;
pub mod projector;
pub mod relationship;
pub mod service;
pub mod ts;

// Re-exports
pub use projector::{project, NodeData, ProjectedNode};
pub use relationship::{relationship_between, NavStep, Relation, RelationshipPath};
pub use service::{InspectError, Relationship, TreeInspector};
pub use ts::{JsParser, ParsedSource, QueryEngine, TreeSitterError};
