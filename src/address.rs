//! Offset-derived node addressing.
//!
//! A projected node is identified by the decimal string of its byte-span
//! sum, and callers hand that number back as a byte offset to re-locate a
//! node in a freshly parsed tree. Both halves of the scheme live here.

use tree_sitter::Node;

/// Key for a node: decimal string of `start_byte + end_byte`.
///
/// The sum is not injective: spans `(0, 10)` and `(4, 6)` both key to
/// `"10"`, and nested nodes covering identical spans always collide. The
/// encoding is kept byte-for-byte for compatibility with existing clients.
pub fn node_key(node: &Node) -> String {
    span_key(node.start_byte(), node.end_byte())
}

/// Key for a raw byte span.
pub fn span_key(start_byte: usize, end_byte: usize) -> String {
    (start_byte + end_byte).to_string()
}

/// Resolve a byte offset to the smallest node whose range covers it.
///
/// Offsets past the end of the tree resolve to nothing; tree-sitter would
/// otherwise hand back the root for any out-of-range lookup.
pub fn resolve_offset<'tree>(root: Node<'tree>, offset: usize) -> Option<Node<'tree>> {
    if offset > root.end_byte() {
        return None;
    }
    root.descendant_for_byte_range(offset, offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ts::JsParser;

    #[test]
    fn key_is_deterministic_for_a_span() {
        assert_eq!(span_key(3, 6), "9");
        assert_eq!(span_key(3, 6), span_key(3, 6));
    }

    #[test]
    fn distinct_spans_can_collide() {
        // The documented weakness of the sum encoding.
        assert_eq!(span_key(0, 10), "10");
        assert_eq!(span_key(4, 6), "10");
    }

    #[test]
    fn offset_resolves_to_smallest_covering_node() {
        let mut parser = JsParser::new().unwrap();
        let source = "if (x) { y(); } else { z(); }";
        let parsed = parser.parse_with_source(source).unwrap();

        // Byte 4 sits inside the identifier `x`.
        let node = resolve_offset(parsed.root_node(), 4).unwrap();
        assert_eq!(node.kind(), "identifier");
        assert_eq!(parsed.node_text(node), "x");
    }

    #[test]
    fn offset_past_end_resolves_to_nothing() {
        let mut parser = JsParser::new().unwrap();
        let parsed = parser.parse_with_source("x;").unwrap();

        assert!(resolve_offset(parsed.root_node(), 9999).is_none());
    }
}
