//! Structural extraction engine.
//!
//! One pre-order traversal over the syntax tree, driven entirely by the
//! language profile: no per-language branches, no per-call state beyond the
//! accumulators. Every node is visited exactly once, so extraction is
//! O(number of nodes).
//!
//! Ownership rule: a callable found while collecting a type's members
//! belongs to that type alone and never reappears in the file-level
//! callable list. The outer traversal still walks through claimed members
//! to discover types nested inside them.

use std::collections::HashSet;

use tree_sitter::{Node, Tree};

use super::docs::resolve_doc;
use super::names::{resolve_name, resolve_params, resolve_return_type, unwrap_declarator};
use super::profile::{LanguageProfile, VariableShape};
use super::tree::{node_text, span_of};
use crate::types::{
    CallableRecord, FieldRecord, ImportRecord, ParseResult, TypeRecord, VariableRecord,
};

/// Walk the tree and assemble the structural summary.
pub fn extract(tree: &Tree, profile: &LanguageProfile, source: &str) -> ParseResult {
    let mut result = ParseResult::new(profile.language);
    let mut claimed: HashSet<usize> = HashSet::new();
    // Explicit stack instead of recursion: source trees nest arbitrarily
    // deep. The flag marks nodes inside an already-recorded callable.
    let mut stack: Vec<(Node, bool)> = vec![(tree.root_node(), false)];

    while let Some((node, in_callable)) = stack.pop() {
        let kind = node.kind();

        if profile.is_import(kind) {
            result.imports.push(ImportRecord {
                text: node_text(node, source).to_string(),
                kind: kind.to_string(),
            });
        } else if profile.is_type(kind) && node.child_by_field_name("body").is_some() {
            result
                .types
                .push(extract_type(node, profile, source, &mut claimed));
        } else if profile.is_callable(kind) {
            if !in_callable && !claimed.contains(&node.id()) {
                result.callables.push(build_callable(node, profile, source));
            }
            // Descend only to discover nested types; inner callables stay
            // part of this definition's source text.
            push_children(&mut stack, node, true);
            continue;
        } else if profile.is_variable(kind) {
            extract_variables(node, profile, source, &mut result.variables);
        }

        push_children(&mut stack, node, in_callable);
    }

    result
}

fn push_children<'t>(stack: &mut Vec<(Node<'t>, bool)>, node: Node<'t>, in_callable: bool) {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    for child in children.into_iter().rev() {
        stack.push((child, in_callable));
    }
}

fn push_members<'t>(stack: &mut Vec<Node<'t>>, node: Node<'t>) {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    for child in children.into_iter().rev() {
        stack.push(child);
    }
}

/// Build a type record from a definition node, collecting the methods and
/// fields its subtree owns.
///
/// The member walk stops at nested type boundaries (the nearest enclosing
/// type wins) and does not descend into claimed methods. Claimed method
/// node ids are recorded so the outer traversal skips them at file level.
fn extract_type(
    node: Node,
    profile: &LanguageProfile,
    source: &str,
    claimed: &mut HashSet<usize>,
) -> TypeRecord {
    let mut record = TypeRecord {
        name: resolve_name(node, profile, source),
        doc: resolve_doc(node, profile, source),
        span: span_of(node),
        methods: Vec::new(),
        fields: Vec::new(),
    };

    let mut stack: Vec<Node> = Vec::new();
    push_members(&mut stack, node);
    while let Some(member) = stack.pop() {
        let kind = member.kind();
        if profile.is_type(kind) && member.child_by_field_name("body").is_some() {
            continue;
        }
        if profile.is_callable(kind) {
            claimed.insert(member.id());
            record.methods.push(build_callable(member, profile, source));
            continue;
        }
        if profile.is_field(kind) {
            extract_fields(member, source, &mut record.fields);
            continue;
        }
        push_members(&mut stack, member);
    }

    record
}

fn build_callable(node: Node, profile: &LanguageProfile, source: &str) -> CallableRecord {
    CallableRecord {
        name: resolve_name(node, profile, source),
        source: node_text(node, source).to_string(),
        span: span_of(node),
        doc: resolve_doc(node, profile, source),
        parameters: resolve_params(node, profile, source),
        return_type: resolve_return_type(node, profile, source),
    }
}

/// Field descriptors from a field-declaration node. The declarator fields
/// drive extraction, so one declaration can yield several descriptors.
fn extract_fields(node: Node, source: &str, fields: &mut Vec<FieldRecord>) {
    let field_type = node
        .child_by_field_name("type")
        .map(|t| node_text(t, source).to_string())
        .unwrap_or_default();

    // JavaScript class fields name themselves through a `property` field.
    if let Some(property) = node.child_by_field_name("property") {
        fields.push(FieldRecord {
            name: node_text(property, source).to_string(),
            field_type,
        });
        return;
    }

    let mut cursor = node.walk();
    for declarator in node.children_by_field_name("declarator", &mut cursor) {
        let name = node_text(unwrap_declarator(declarator), source);
        if name.is_empty() {
            continue;
        }
        fields.push(FieldRecord {
            name: name.to_string(),
            field_type: field_type.clone(),
        });
    }
}

/// Variable bindings from a statement node, dispatched on the profile's
/// binding shape.
fn extract_variables(
    node: Node,
    profile: &LanguageProfile,
    source: &str,
    variables: &mut Vec<VariableRecord>,
) {
    match profile.variable_shape {
        VariableShape::Assignment => {
            let (Some(left), Some(right)) = (
                node.child_by_field_name("left"),
                node.child_by_field_name("right"),
            ) else {
                tracing::debug!(
                    kind = node.kind(),
                    language = %profile.language,
                    "assignment without both operands, skipping"
                );
                return;
            };
            variables.push(VariableRecord {
                name: node_text(left, source).to_string(),
                var_type: node
                    .child_by_field_name("type")
                    .map(|t| node_text(t, source).to_string()),
                value: Some(node_text(right, source).to_string()),
            });
        }
        VariableShape::TypedDeclaration => {
            let var_type = node
                .child_by_field_name("type")
                .map(|t| node_text(t, source).to_string());
            let mut cursor = node.walk();
            for declarator in node.children_by_field_name("declarator", &mut cursor) {
                // `int f(void);` is a prototype, not a binding.
                if declares_function(declarator) {
                    continue;
                }
                let name = node_text(unwrap_declarator(declarator), source);
                if name.is_empty() {
                    continue;
                }
                variables.push(VariableRecord {
                    name: name.to_string(),
                    var_type: var_type.clone(),
                    value: declarator
                        .child_by_field_name("value")
                        .map(|v| node_text(v, source).to_string()),
                });
            }
        }
        VariableShape::DeclaratorList => {
            let mut cursor = node.walk();
            for declarator in node.named_children(&mut cursor) {
                if declarator.kind() != "variable_declarator" {
                    continue;
                }
                let Some(name) = declarator.child_by_field_name("name") else {
                    continue;
                };
                variables.push(VariableRecord {
                    name: node_text(name, source).to_string(),
                    var_type: None,
                    value: declarator
                        .child_by_field_name("value")
                        .map(|v| node_text(v, source).to_string()),
                });
            }
        }
    }
}

/// Whether a declarator chain ends in a function declarator.
fn declares_function(declarator: Node) -> bool {
    let mut current = Some(declarator);
    while let Some(node) = current {
        if node.kind() == "function_declarator" {
            return true;
        }
        current = node.child_by_field_name("declarator");
    }
    false
}
