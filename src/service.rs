//! The three boundary operations: parse-and-project, query-and-project,
//! and relationship lookup.
//!
//! Every operation re-parses the submitted source fresh; nothing is cached
//! between calls and nothing persists. The parser is owned by the
//! inspector and handed in at construction, so hosts decide its lifecycle
//! instead of reaching for a process-wide singleton.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::resolve_offset;
use crate::projector::{project, ProjectedNode};
use crate::relationship::{relationship_between, NavStep, Relation};
use crate::ts::{JsParser, QueryEngine, TreeSitterError};

/// Errors produced at the inspection boundary.
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("failed to parse source code")]
    Parse(#[source] TreeSitterError),

    #[error("query rejected: {0}")]
    Query(#[source] TreeSitterError),

    #[error("byte offset {offset} does not resolve to any node")]
    BadAddress { offset: usize },
}

/// Wire form of a resolved relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Dotted notation, e.g. `.firstChild.nextSibling`.
    pub relationship: String,
    pub steps: Vec<NavStep>,
    /// False when the target's ancestor chain never met the source's
    /// parent frame; `relationship` then holds the partial walk.
    pub reachable: bool,
}

impl From<Relation> for Relationship {
    fn from(relation: Relation) -> Self {
        let reachable = relation.is_reachable();
        let path = relation.path();
        Relationship {
            relationship: path.notation(),
            steps: path.steps().to_vec(),
            reachable,
        }
    }
}

/// The inspection boundary: one configured parser, three operations.
pub struct TreeInspector {
    parser: JsParser,
}

impl TreeInspector {
    /// Create an inspector with its own JavaScript parser.
    pub fn new() -> Result<Self, TreeSitterError> {
        Ok(Self {
            parser: JsParser::new()?,
        })
    }

    /// Create an inspector around an existing parser instance.
    pub fn with_parser(parser: JsParser) -> Self {
        Self { parser }
    }

    /// Parse source text and project the whole tree.
    pub fn parse(&mut self, source: &str) -> Result<ProjectedNode, InspectError> {
        let parsed = self
            .parser
            .parse_with_source(source)
            .map_err(InspectError::Parse)?;

        Ok(project(parsed.root_node(), source))
    }

    /// Run a pattern query and project each captured node.
    ///
    /// Returns one projection per capture occurrence, in capture order;
    /// overlapping or duplicate captures are kept.
    pub fn query(
        &mut self,
        source: &str,
        pattern: &str,
    ) -> Result<Vec<ProjectedNode>, InspectError> {
        let parsed = self
            .parser
            .parse_with_source(source)
            .map_err(InspectError::Parse)?;
        let engine = QueryEngine::new(pattern).map_err(InspectError::Query)?;

        let matches = engine
            .captures(&parsed)
            .into_iter()
            .map(|capture| project(capture.node, source))
            .collect();

        Ok(matches)
    }

    /// Re-locate two nodes by byte offset and resolve the path between them.
    pub fn relationship(
        &mut self,
        source: &str,
        source_offset: usize,
        target_offset: usize,
    ) -> Result<Relationship, InspectError> {
        let parsed = self
            .parser
            .parse_with_source(source)
            .map_err(InspectError::Parse)?;
        let root = parsed.root_node();

        let source_node = resolve_offset(root, source_offset).ok_or(InspectError::BadAddress {
            offset: source_offset,
        })?;
        let target_node = resolve_offset(root, target_offset).ok_or(InspectError::BadAddress {
            offset: target_offset,
        })?;

        Ok(relationship_between(source_node, target_node).into())
    }
}
