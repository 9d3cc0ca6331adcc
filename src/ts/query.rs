use crate::ts::errors::TreeSitterError;
use crate::ts::parser::{language, ParsedSource};
use tree_sitter::{Query, QueryCursor, StreamingIterator};

/// A single captured node from a query, tagged with its capture name.
#[derive(Debug, Clone, Copy)]
pub struct QueryCapture<'tree> {
    pub node: tree_sitter::Node<'tree>,
    pub capture_index: u32,
}

/// Engine for executing tree-sitter queries against parsed JavaScript source.
pub struct QueryEngine {
    query: Query,
    capture_names: Vec<String>,
}

impl QueryEngine {
    /// Create a new query engine from a tree-sitter query string.
    ///
    /// # Query Syntax
    ///
    /// Tree-sitter queries use S-expression syntax:
    /// ```text
    /// (function_declaration
    ///   name: (identifier) @func_name
    ///   body: (statement_block) @body)
    /// ```
    ///
    /// Captures are prefixed with `@` and can be referenced by name.
    pub fn new(query_str: &str) -> Result<Self, TreeSitterError> {
        let query = Query::new(&language(), query_str).map_err(|e| {
            TreeSitterError::InvalidQuery {
                message: e.to_string(),
            }
        })?;

        let capture_names = query.capture_names().iter().map(|s| s.to_string()).collect();

        Ok(Self {
            query,
            capture_names,
        })
    }

    /// Execute the query and return every captured node in capture order.
    ///
    /// This is the flat capture stream, not grouped matches: one entry per
    /// capture occurrence, duplicates and overlaps preserved.
    pub fn captures<'p>(&self, parsed: &'p ParsedSource<'_>) -> Vec<QueryCapture<'p>> {
        let mut cursor = QueryCursor::new();
        let mut captures =
            cursor.captures(&self.query, parsed.root_node(), parsed.source.as_bytes());

        let mut results = Vec::new();

        // tree-sitter 0.25+ uses StreamingIterator
        while let Some((m, capture_ix)) = captures.next() {
            let capture = m.captures[*capture_ix];
            results.push(QueryCapture {
                node: capture.node,
                capture_index: capture.index,
            });
        }

        results
    }

    /// Get the capture name for a capture index.
    pub fn capture_name(&self, index: u32) -> &str {
        &self.capture_names[index as usize]
    }

    /// Get capture names defined in the query.
    pub fn capture_names(&self) -> &[String] {
        &self.capture_names
    }
}
