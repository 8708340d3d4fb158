//! Collaborator-facing views of a [`ParseResult`].
//!
//! Two external services consume extraction output: an indexing/search
//! service that stores one flat row per record, and a documentation
//! generator that reads each callable's source and doc comment. This module
//! formats both views; storage and transport stay with the caller.

use serde::{Deserialize, Serialize};

use crate::types::ParseResult;

/// One row of the flattened index view: stable id, construct-kind label,
/// searchable text, and the originating file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub id: String,
    pub kind: String,
    pub text: String,
    pub file_path: String,
}

/// One callable prepared for prose generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocUnit {
    /// `name` for file-level callables, `Type.name` for methods.
    pub qualified_name: String,
    pub source: String,
    pub doc: String,
    pub file_path: String,
}

/// Flatten every record into index rows, in source order per sequence.
///
/// Ids follow the `kind:path:name` shape and are stable across repeated
/// extractions of the same file.
pub fn flatten(file_path: &str, result: &ParseResult) -> Vec<FlatRecord> {
    let mut rows = Vec::with_capacity(result.record_count());

    for (index, import) in result.imports.iter().enumerate() {
        rows.push(FlatRecord {
            id: format!("import:{}:{}", file_path, index),
            kind: import.kind.clone(),
            text: import.text.clone(),
            file_path: file_path.to_string(),
        });
    }

    for type_record in &result.types {
        rows.push(FlatRecord {
            id: format!("type:{}:{}", file_path, type_record.name),
            kind: "class_definition".to_string(),
            text: join_non_empty(&[&type_record.name, &type_record.doc]),
            file_path: file_path.to_string(),
        });
        for method in &type_record.methods {
            rows.push(FlatRecord {
                id: format!("method:{}:{}.{}", file_path, type_record.name, method.name),
                kind: "method_definition".to_string(),
                text: method.source.clone(),
                file_path: file_path.to_string(),
            });
        }
    }

    for callable in &result.callables {
        rows.push(FlatRecord {
            id: format!("function:{}:{}", file_path, callable.name),
            kind: "function_definition".to_string(),
            text: callable.source.clone(),
            file_path: file_path.to_string(),
        });
    }

    for variable in &result.variables {
        let mut text_parts: Vec<&str> = Vec::new();
        if let Some(var_type) = &variable.var_type {
            text_parts.push(var_type);
        }
        text_parts.push(&variable.name);
        if let Some(value) = &variable.value {
            text_parts.push("=");
            text_parts.push(value);
        }
        rows.push(FlatRecord {
            id: format!("variable:{}:{}", file_path, variable.name),
            kind: "variable_definition".to_string(),
            text: text_parts.join(" "),
            file_path: file_path.to_string(),
        });
    }

    rows
}

/// Every callable in the result, methods included, paired with its doc
/// comment for the documentation generator.
pub fn doc_units(file_path: &str, result: &ParseResult) -> Vec<DocUnit> {
    let mut units = Vec::new();

    for type_record in &result.types {
        for method in &type_record.methods {
            units.push(DocUnit {
                qualified_name: format!("{}.{}", type_record.name, method.name),
                source: method.source.clone(),
                doc: method.doc.clone(),
                file_path: file_path.to_string(),
            });
        }
    }

    for callable in &result.callables {
        units.push(DocUnit {
            qualified_name: callable.name.clone(),
            source: callable.source.clone(),
            doc: callable.doc.clone(),
            file_path: file_path.to_string(),
        });
    }

    units
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Extractor, Language};

    fn sample() -> ParseResult {
        let source = "import os\n\nclass Widget:\n    \"\"\"A widget.\"\"\"\n    def render(self):\n        pass\n\ndef helper(x):\n    return x\n\ncount = 3\n";
        Extractor::new().parse(source, Language::Python).unwrap()
    }

    #[test]
    fn test_flatten_ids_and_kinds() {
        let rows = flatten("src/app.py", &sample());

        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert!(ids.contains(&"import:src/app.py:0"));
        assert!(ids.contains(&"type:src/app.py:Widget"));
        assert!(ids.contains(&"method:src/app.py:Widget.render"));
        assert!(ids.contains(&"function:src/app.py:helper"));
        assert!(ids.contains(&"variable:src/app.py:count"));

        let type_row = rows.iter().find(|r| r.id.starts_with("type:")).unwrap();
        assert_eq!(type_row.kind, "class_definition");
        assert!(type_row.text.contains("Widget"));
        assert!(type_row.text.contains("A widget."));

        for row in &rows {
            assert_eq!(row.file_path, "src/app.py");
        }
    }

    #[test]
    fn test_flatten_is_stable() {
        let result = sample();
        assert_eq!(flatten("a.py", &result), flatten("a.py", &result));
    }

    #[test]
    fn test_doc_units_qualify_methods() {
        let units = doc_units("src/app.py", &sample());

        let names: Vec<&str> = units.iter().map(|u| u.qualified_name.as_str()).collect();
        assert_eq!(names, vec!["Widget.render", "helper"]);
        assert!(units[1].source.contains("def helper(x)"));
    }

    #[test]
    fn test_variable_row_text() {
        let source = "int a = 1;\n";
        let result = Extractor::new().parse(source, Language::C).unwrap();
        let rows = flatten("main.c", &result);

        let var_row = rows.iter().find(|r| r.id.starts_with("variable:")).unwrap();
        assert_eq!(var_row.text, "int a = 1");
        assert_eq!(var_row.kind, "variable_definition");
    }
}
