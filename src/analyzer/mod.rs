//! Code Analyzer Module
//!
//! Tree-sitter based structural extraction for multiple programming
//! languages. One traversal algorithm serves every language; the
//! per-language knowledge lives in [`profile::LanguageProfile`] data.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use codeloom::analyzer::{Extractor, Language};
//!
//! let extractor = Extractor::new();
//! let result = extractor.parse(source, Language::Python)?;
//! for callable in &result.callables {
//!     println!("{} at line {}", callable.name, callable.span.start_line);
//! }
//! ```

pub mod docs;
pub mod engine;
pub mod language;
pub mod names;
pub mod profile;
pub mod tree;

pub use language::Language;
pub use profile::{DocStyle, LanguageProfile, ProfileRegistry, VariableShape};

use crate::types::{ParseResult, Result};

/// Public extraction facade.
///
/// Holds the profile registry and nothing else: each `parse` call is a pure
/// function of its inputs, so one `Extractor` may serve any number of
/// concurrent calls through `&self`.
#[derive(Debug, Clone)]
pub struct Extractor {
    registry: ProfileRegistry,
}

impl Extractor {
    /// An extractor with the five built-in profiles.
    pub fn new() -> Self {
        Self {
            registry: ProfileRegistry::builtin(),
        }
    }

    /// An extractor over a custom registry, for callers that add profiles
    /// at startup.
    pub fn with_registry(registry: ProfileRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Parse source text and extract its structural summary.
    ///
    /// Fails atomically: an unregistered language or a tree build failure
    /// yields an error and no partial result.
    pub fn parse(&self, source: &str, language: Language) -> Result<ParseResult> {
        let profile = self.registry.get(language)?;
        let tree = tree::build_tree(source, language)?;
        Ok(engine::extract(&tree, profile, source))
    }

    /// Parse with a string language id (`"python"`, `"java"`, `"cpp"`,
    /// `"c"`, `"javascript"` or a registered alias).
    pub fn parse_with_id(&self, source: &str, language_id: &str) -> Result<ParseResult> {
        let profile = self.registry.lookup(language_id)?;
        let language = profile.language;
        let tree = tree::build_tree(source, language)?;
        Ok(engine::extract(&tree, profile, source))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LoomError;

    #[test]
    fn test_python_function_with_docstring() {
        let extractor = Extractor::new();
        let result = extractor
            .parse("def foo():\n    \"\"\"doc\"\"\"\n    return 1\n", Language::Python)
            .unwrap();

        assert_eq!(result.callables.len(), 1);
        assert_eq!(result.callables[0].name, "foo");
        assert_eq!(result.callables[0].doc, "\"\"\"doc\"\"\"");
        assert_eq!(result.callables[0].span.start_line, 0);
    }

    #[test]
    fn test_java_method_belongs_to_class() {
        let extractor = Extractor::new();
        let source = "class A {\n    /** doc */\n    public void bar() {}\n}\n";
        let result = extractor.parse(source, Language::Java).unwrap();

        assert_eq!(result.types.len(), 1);
        assert_eq!(result.types[0].methods.len(), 1);
        assert_eq!(result.types[0].methods[0].name, "bar");
        assert_eq!(result.types[0].methods[0].doc, "/** doc */");
        assert!(result.callables.is_empty());
    }

    #[test]
    fn test_cpp_declarator_name() {
        let extractor = Extractor::new();
        let result = extractor
            .parse("int *compute(int x) { return &x; }\n", Language::Cpp)
            .unwrap();

        assert_eq!(result.callables.len(), 1);
        assert_eq!(result.callables[0].name, "compute");
    }

    #[test]
    fn test_c_syntax_error_is_atomic() {
        let extractor = Extractor::new();
        let err = extractor.parse("int main( {", Language::C).unwrap_err();

        assert!(matches!(
            err,
            LoomError::Parse {
                language: Language::C,
                ..
            }
        ));
    }

    #[test]
    fn test_js_variable() {
        let extractor = Extractor::new();
        let result = extractor
            .parse("const a = 5;\n", Language::JavaScript)
            .unwrap();

        assert_eq!(result.variables.len(), 1);
        assert_eq!(result.variables[0].name, "a");
        assert_eq!(result.variables[0].value.as_deref(), Some("5"));
    }

    #[test]
    fn test_unknown_language_id() {
        let extractor = Extractor::new();
        let err = extractor.parse_with_id("x = 1", "ruby").unwrap_err();

        assert!(matches!(err, LoomError::UnsupportedLanguage(id) if id == "ruby"));
    }

    #[test]
    fn test_parse_with_alias() {
        let extractor = Extractor::new();
        let result = extractor.parse_with_id("let x = 1;", "js").unwrap();
        assert_eq!(result.language, Language::JavaScript);
        assert_eq!(result.variables.len(), 1);
    }
}
