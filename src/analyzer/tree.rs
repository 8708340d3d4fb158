//! Syntax tree provider.
//!
//! Thin boundary over tree-sitter: grammar selection, tree construction,
//! and the node helpers the rest of the analyzer consumes (text, span).
//! Nothing outside this module touches parser construction.

use tree_sitter::{Node, Tree};

use crate::analyzer::Language;
use crate::types::{LoomError, Result, Span};

/// Build a syntax tree for `source`.
///
/// Tree-sitter is error-tolerant and will happily produce a tree full of
/// error nodes for malformed input, so a root carrying a syntax error is
/// treated as a failed build: the call yields [`LoomError::Parse`] and no
/// partial result.
pub fn build_tree(source: &str, language: Language) -> Result<Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language.grammar())
        .map_err(|e| LoomError::Parse {
            language,
            message: format!("failed to load grammar: {}", e),
        })?;

    let tree = parser.parse(source, None).ok_or_else(|| LoomError::Parse {
        language,
        message: "parser produced no tree".to_string(),
    })?;

    if tree.root_node().has_error() {
        return Err(LoomError::Parse {
            language,
            message: "source contains a syntax error".to_string(),
        });
    }

    Ok(tree)
}

/// Extract the text a node covers.
/// Returns empty string if extraction fails (with debug logging).
#[inline]
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_else(|e| {
        tracing::debug!(
            "UTF-8 extraction failed at {}:{}-{}:{}: {}",
            node.start_position().row,
            node.start_position().column,
            node.end_position().row,
            node.end_position().column,
            e
        );
        ""
    })
}

/// Source span of a node, 0-based rows plus byte offsets.
#[inline]
pub fn span_of(node: Node) -> Span {
    Span {
        start_line: node.start_position().row,
        end_line: node.end_position().row,
        start_byte: node.start_byte(),
        end_byte: node.end_byte(),
    }
}
