//! Documentation-comment resolution.
//!
//! Two conventions cover the supported languages: a string literal opening
//! the definition body (Python) and a comment node immediately preceding
//! the definition (Javadoc, Doxygen, JSDoc). Exactly one adjacent node is
//! inspected in either direction; a miss yields the empty string.

use tree_sitter::Node;

use super::profile::{DocStyle, LanguageProfile};
use super::tree::node_text;

/// Resolve the documentation comment attached to a definition, empty when
/// the profile's convention does not match.
pub fn resolve_doc(node: Node, profile: &LanguageProfile, source: &str) -> String {
    match profile.doc_style {
        DocStyle::LeadingLiteral => leading_literal(node, source),
        DocStyle::PrecedingComment => preceding_comment(node, profile, source),
    }
}

/// The first statement of the definition's body, when it is an expression
/// statement whose sole content is a string literal.
fn leading_literal(node: Node, source: &str) -> String {
    let Some(body) = node.child_by_field_name("body") else {
        return String::new();
    };
    let Some(first) = body.named_child(0) else {
        return String::new();
    };
    if first.kind() != "expression_statement" || first.named_child_count() != 1 {
        return String::new();
    }
    match first.named_child(0) {
        Some(literal) if literal.kind() == "string" => node_text(literal, source).to_string(),
        _ => String::new(),
    }
}

/// The definition's previous named sibling, when it is a comment.
fn preceding_comment(node: Node, profile: &LanguageProfile, source: &str) -> String {
    match node.prev_named_sibling() {
        Some(prev) if profile.is_comment(prev.kind()) => node_text(prev, source).to_string(),
        _ => String::new(),
    }
}
