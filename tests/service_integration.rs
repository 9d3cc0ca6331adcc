//! Integration tests for the inspection boundary
//!
//! Drives the three operations end-to-end through the library API and
//! checks the wire-level JSON shapes the UI depends on.

use cst_inspector::pool::with_inspector;
use cst_inspector::{InspectError, NavStep, TreeInspector};

#[test]
fn parse_projects_function_declaration_program() {
    let mut inspector = TreeInspector::new().unwrap();
    let tree = inspector.parse("function f(a){ return a; }").unwrap();

    assert_eq!(tree.label, "program");
    assert_eq!(tree.children.len(), 1);

    let function = &tree.children[0];
    assert_eq!(function.label, "function_declaration");
    assert_eq!(function.data.kind, "function_declaration");
    assert!(function.data.is_named);
    assert_eq!(function.data.text, "function f(a){ return a; }");
}

#[test]
fn parse_output_uses_wire_field_names() {
    let mut inspector = TreeInspector::new().unwrap();
    let tree = inspector.parse("let x = 1;").unwrap();
    let json = serde_json::to_value(&tree).unwrap();

    let data = &json["data"];
    assert!(data["type"].is_string());
    assert!(data["isNamed"].is_boolean());
    assert!(data["startIndex"].is_number());
    assert!(data["endIndex"].is_number());
    assert!(data["typeId"].is_number());
    assert!(data["text"].is_string());
}

#[test]
fn query_preserves_capture_list_order_and_length() {
    let mut inspector = TreeInspector::new().unwrap();
    let matches = inspector
        .query("one(); two(); three();", "(identifier) @id")
        .unwrap();

    let texts: Vec<&str> = matches.iter().map(|m| m.data.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn query_keeps_overlapping_and_duplicate_captures() {
    let mut inspector = TreeInspector::new().unwrap();

    // Two patterns capturing the same identifier: both occurrences survive.
    let matches = inspector
        .query("x;", "(identifier) @a (identifier) @b")
        .unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0], matches[1]);

    // A capture nested inside another capture: both are projected.
    let matches = inspector
        .query("f(1);", "(call_expression function: (identifier) @fn) @call")
        .unwrap();
    assert_eq!(matches.len(), 2);
}

#[test]
fn relationship_round_trip_through_offsets() {
    let mut inspector = TreeInspector::new().unwrap();
    let source = "if (x) { y(); } else { z(); }";

    // Offset 0 re-locates the `if` token (frame: the if_statement);
    // offset 4 re-locates the condition's inner identifier `x`.
    let relationship = inspector.relationship(source, 0, 4).unwrap();

    assert!(relationship.reachable);
    assert_eq!(relationship.relationship, ".firstChild.nextSibling");
    assert_eq!(
        relationship.steps,
        vec![NavStep::FirstChild, NavStep::NextSibling]
    );
}

#[test]
fn relationship_to_disjoint_subtree_is_flagged_unreachable() {
    let mut inspector = TreeInspector::new().unwrap();

    // Source re-locates `b`, target re-locates `a`; `a` does not hang below
    // `b`'s parent frame, so the walk exhausts at the root.
    let relationship = inspector.relationship("a; b;", 3, 0).unwrap();

    assert!(!relationship.reachable);
    assert_eq!(
        relationship.steps,
        vec![NavStep::FirstChild, NavStep::FirstChild]
    );
}

#[test]
fn relationship_wire_shape() {
    let mut inspector = TreeInspector::new().unwrap();
    let relationship = inspector.relationship("f();", 0, 0).unwrap();
    let json = serde_json::to_value(&relationship).unwrap();

    assert_eq!(json["relationship"], "");
    assert_eq!(json["reachable"], true);
    assert!(json["steps"].as_array().unwrap().is_empty());
}

#[test]
fn bad_addresses_reject_the_request() {
    let mut inspector = TreeInspector::new().unwrap();

    let result = inspector.relationship("x;", 9999, 0);
    assert!(matches!(
        result,
        Err(InspectError::BadAddress { offset: 9999 })
    ));

    let result = inspector.relationship("x;", 0, 9999);
    assert!(matches!(
        result,
        Err(InspectError::BadAddress { offset: 9999 })
    ));
}

#[test]
fn requests_are_independent_and_reparse_fresh() {
    let mut inspector = TreeInspector::new().unwrap();

    let first = inspector.parse("let a = 1;").unwrap();
    let matches = inspector.query("let a = 1;", "(identifier) @id").unwrap();
    let again = inspector.parse("let a = 1;").unwrap();

    assert_eq!(first, again);
    assert_eq!(matches.len(), 1);
}

#[test]
fn pooled_inspector_serves_all_three_operations() {
    let tree = with_inspector(|i| i.parse("x;").unwrap()).unwrap();
    assert_eq!(tree.label, "program");

    let matches = with_inspector(|i| i.query("x;", "(identifier) @id").unwrap()).unwrap();
    assert_eq!(matches.len(), 1);

    let relationship = with_inspector(|i| i.relationship("x;", 0, 0).unwrap()).unwrap();
    assert!(relationship.reachable);
}
