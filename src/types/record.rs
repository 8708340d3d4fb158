//! Structural records produced by the extraction engine.
//!
//! Every record is plain owned data: the engine builds a [`ParseResult`] per
//! call and hands it to the caller, which may serialize it, index it, or feed
//! it to a documentation generator. Unresolved fields hold an empty string
//! instead of failing the extraction.

use serde::{Deserialize, Serialize};

use crate::analyzer::Language;

/// Source location of a record, in the coordinates of the parsed text.
///
/// Rows are 0-based; byte offsets index into the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start_line: usize,
    pub end_line: usize,
    pub start_byte: usize,
    pub end_byte: usize,
}

/// One parameter of a callable. `param_type` is empty when the language or
/// the declaration carries no type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub param_type: String,
}

/// A function, method, or constructor definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallableRecord {
    pub name: String,
    /// Full source text of the definition, body included.
    pub source: String,
    pub span: Span,
    /// Attached documentation comment, empty when none was found.
    pub doc: String,
    pub parameters: Vec<Parameter>,
    /// Best-effort return type, empty for languages without one.
    pub return_type: String,
}

/// A named field of a class or struct body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    pub field_type: String,
}

/// A class, interface, or struct definition together with the members it
/// owns. A callable listed in `methods` never reappears in the file-level
/// callable list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    pub doc: String,
    pub span: Span,
    pub methods: Vec<CallableRecord>,
    pub fields: Vec<FieldRecord>,
}

/// An import/include statement, kept as raw text plus the construct-kind
/// label the grammar assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub text: String,
    pub kind: String,
}

/// A variable binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: String,
    pub var_type: Option<String>,
    pub value: Option<String>,
}

/// Aggregate result of one extraction call. All sequences are in source
/// (document) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub language: Language,
    pub imports: Vec<ImportRecord>,
    pub types: Vec<TypeRecord>,
    /// File-level callables only; methods live on their owning type.
    pub callables: Vec<CallableRecord>,
    pub variables: Vec<VariableRecord>,
}

impl ParseResult {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            imports: Vec::new(),
            types: Vec::new(),
            callables: Vec::new(),
            variables: Vec::new(),
        }
    }

    /// Total number of records across all four sequences, methods and
    /// fields included.
    pub fn record_count(&self) -> usize {
        self.imports.len()
            + self.callables.len()
            + self.variables.len()
            + self
                .types
                .iter()
                .map(|t| 1 + t.methods.len() + t.fields.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
            && self.types.is_empty()
            && self.callables.is_empty()
            && self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span {
            start_line: 0,
            end_line: 0,
            start_byte: 0,
            end_byte: 1,
        }
    }

    #[test]
    fn test_record_count() {
        let mut result = ParseResult::new(Language::Python);
        assert!(result.is_empty());
        assert_eq!(result.record_count(), 0);

        result.imports.push(ImportRecord {
            text: "import os".to_string(),
            kind: "import_statement".to_string(),
        });
        result.types.push(TypeRecord {
            name: "Widget".to_string(),
            doc: String::new(),
            span: span(),
            methods: vec![CallableRecord {
                name: "render".to_string(),
                source: "def render(self): pass".to_string(),
                span: span(),
                doc: String::new(),
                parameters: Vec::new(),
                return_type: String::new(),
            }],
            fields: Vec::new(),
        });

        assert!(!result.is_empty());
        assert_eq!(result.record_count(), 3);
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = VariableRecord {
            name: "a".to_string(),
            var_type: None,
            value: Some("5".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: VariableRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
