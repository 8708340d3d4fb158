//! Name and signature resolution.
//!
//! Definitions do not agree on where their name lives: Python and Java hang
//! an identifier off a `name` field, while C-family grammars bury it under
//! arbitrarily nested declarator wrappers (`*compute(int x)` names
//! `compute`). This module normalizes all of that into plain strings,
//! degrading to empty values instead of failing when a node does not match
//! the expected shape.

use tree_sitter::Node;

use super::profile::LanguageProfile;
use super::tree::node_text;
use crate::types::Parameter;

/// Node kinds that terminate declarator unwrapping.
const LEAF_KINDS: &[&str] = &[
    "identifier",
    "field_identifier",
    "type_identifier",
    "property_identifier",
    "qualified_identifier",
    "operator_name",
    "destructor_name",
];

/// Resolve a definition's name.
///
/// Tries the profile's name-field candidates in order, unwrapping declarator
/// wrappers down to the leaf identifier. A definition with no resolvable
/// name field falls back to its full text.
pub fn resolve_name(node: Node, profile: &LanguageProfile, source: &str) -> String {
    for field in profile.name_fields {
        if let Some(found) = node.child_by_field_name(field) {
            return node_text(unwrap_declarator(found), source).to_string();
        }
    }
    tracing::debug!(
        kind = node.kind(),
        language = %profile.language,
        "definition has no name field, falling back to full text"
    );
    node_text(node, source).to_string()
}

/// Peel pointer/array/function/init/parenthesized declarator wrappers until
/// a leaf identifier remains. Returns the innermost node reached when no
/// identifier can be found.
pub fn unwrap_declarator(node: Node) -> Node {
    let mut current = node;
    loop {
        if LEAF_KINDS.contains(&current.kind()) {
            return current;
        }
        if let Some(inner) = current.child_by_field_name("declarator") {
            current = inner;
            continue;
        }
        if let Some(inner) = current.child_by_field_name("name") {
            current = inner;
            continue;
        }
        // Wrappers like `parenthesized_declarator` carry no field name.
        match current.named_child(0) {
            Some(inner) => current = inner,
            None => return current,
        }
    }
}

/// Locate a named field on a definition, following the declarator chain
/// when the field hangs off a C-family declarator instead of the
/// definition node itself.
fn locate_field<'t>(node: Node<'t>, field: &str) -> Option<Node<'t>> {
    if let Some(found) = node.child_by_field_name(field) {
        return Some(found);
    }
    let mut current = node.child_by_field_name("declarator");
    while let Some(declarator) = current {
        if let Some(found) = declarator.child_by_field_name(field) {
            return Some(found);
        }
        current = declarator.child_by_field_name("declarator");
    }
    None
}

/// Extract (name, type) pairs from a callable's parameter list.
///
/// One pair per parameter sub-node; a parameter whose name cannot be
/// resolved is omitted, a missing type becomes the empty string.
pub fn resolve_params(node: Node, profile: &LanguageProfile, source: &str) -> Vec<Parameter> {
    let Some(list) = locate_field(node, profile.params_field) else {
        return Vec::new();
    };

    let mut params = Vec::new();
    let mut cursor = list.walk();
    for child in list.named_children(&mut cursor) {
        if profile.is_comment(child.kind()) {
            continue;
        }
        let Some(name) = param_name(child, source) else {
            tracing::debug!(
                kind = child.kind(),
                language = %profile.language,
                "parameter without a resolvable name, omitting"
            );
            continue;
        };
        let param_type = child
            .child_by_field_name("type")
            .map(|t| node_text(t, source).to_string())
            .unwrap_or_default();
        params.push(Parameter { name, param_type });
    }
    params
}

fn param_name(node: Node, source: &str) -> Option<String> {
    if LEAF_KINDS.contains(&node.kind()) {
        return Some(node_text(node, source).to_string());
    }
    for field in ["name", "declarator", "left"] {
        if let Some(found) = node.child_by_field_name(field) {
            let leaf = unwrap_declarator(found);
            if LEAF_KINDS.contains(&leaf.kind()) {
                return Some(node_text(leaf, source).to_string());
            }
            return None;
        }
    }
    // Python's typed_parameter keeps its identifier as a plain child.
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|c| c.kind() == "identifier")
        .map(|c| node_text(c, source).to_string())
}

/// Best-effort return type; empty when the profile configures none or the
/// definition omits it.
pub fn resolve_return_type(node: Node, profile: &LanguageProfile, source: &str) -> String {
    profile
        .return_type_field
        .and_then(|field| node.child_by_field_name(field))
        .map(|t| node_text(t, source).to_string())
        .unwrap_or_default()
}
