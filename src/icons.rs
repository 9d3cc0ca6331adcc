//! Cosmetic display tags per grammar kind.
//!
//! Pure presentation metadata for the tree widget; the tag strings are the
//! icon classes the existing UI expects and carry no tree semantics.

/// Look up the display tag for a grammar kind name.
///
/// Unmapped kinds get the empty string.
pub fn icon_for(kind: &str) -> &'static str {
    match kind {
        "lexical_declaration" => "pi pi-fw pi-file",
        "identifier" => "pi pi-fw pi-tag",
        "expression_statement" => "pi pi-fw pi-code",
        "call_expression" => "pi pi-fw pi-phone",
        "member_expression" => "pi pi-fw pi-users",
        "property_identifier" => "pi pi-fw pi-list",
        "array" => "pi pi-fw pi-sort",
        "statement_block" => "pi pi-fw pi-folder",
        "if_statement" => "pi pi-fw pi-question",
        "else_clause" => "pi pi-fw pi-arrow-right",
        "return_statement" => "pi pi-fw pi-reply",
        "parenthesized_expression" => "pi pi-fw pi-circle",
        "jsx_element" => "pi pi-fw pi-react",
        "jsx_opening_element" => "pi pi-fw pi-arrow-down",
        "jsx_closing_element" => "pi pi-fw pi-arrow-up",
        "jsx_self_closing_element" => "pi pi-fw pi-arrow-up",
        "jsx_attribute" => "pi pi-fw pi-link",
        "jsx_expression" => "pi pi-fw pi-search-plus",
        "spread_element" => "pi pi-fw pi-star",
        "comment" => "pi pi-fw pi-comment",
        "string" => "pi pi-fw pi-file-export",
        "string_fragment" => "pi pi-fw pi-file-import",
        "number" => "pi pi-fw pi-sort-numeric-up",
        "object" => "pi pi-fw pi-folder-open",
        "pair" => "pi pi-fw pi-linkedin",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_have_tags() {
        assert_eq!(icon_for("identifier"), "pi pi-fw pi-tag");
        assert_eq!(icon_for("if_statement"), "pi pi-fw pi-question");
    }

    #[test]
    fn unknown_kinds_default_to_empty() {
        assert_eq!(icon_for("no_such_kind"), "");
        assert_eq!(icon_for(""), "");
    }
}
