//! Per-language extraction profiles.
//!
//! A [`LanguageProfile`] is the only place language-specific knowledge
//! lives: which construct-kind tags mark imports, types, callables, and
//! variables, which grammar fields carry names and parameter lists, and how
//! documentation comments attach to definitions. The traversal in
//! [`super::engine`] consults this data and nothing else, so adding a
//! language means adding a profile, not a code path.

use crate::analyzer::Language;
use crate::types::{LoomError, Result};

/// How a language attaches documentation to a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocStyle {
    /// The definition body begins with an expression statement whose sole
    /// content is a string literal (Python docstrings).
    LeadingLiteral,
    /// The node immediately preceding the definition is a comment
    /// (Javadoc, Doxygen, JSDoc conventions).
    PrecedingComment,
}

/// The grammar shape a language uses for variable bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableShape {
    /// `name = value` expression: name from the left operand, value from
    /// the right.
    Assignment,
    /// A declaration node carrying a type and one or more declarators.
    TypedDeclaration,
    /// A statement node owning several `variable_declarator` children, each
    /// with its own name and optional value.
    DeclaratorList,
}

/// Extraction rules for one language. All data is `'static`; profiles are
/// built once at startup and only ever read afterwards.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub language: Language,
    /// Construct-kind tags of import/include statements.
    pub import_kinds: &'static [&'static str],
    /// Construct-kind tags of class/interface/struct definitions.
    pub type_kinds: &'static [&'static str],
    /// Construct-kind tags of function/method definitions.
    pub callable_kinds: &'static [&'static str],
    /// Construct-kind tags of variable-binding statements.
    pub variable_kinds: &'static [&'static str],
    pub variable_shape: VariableShape,
    pub doc_style: DocStyle,
    /// Node kinds that satisfy the preceding-comment convention.
    pub comment_kinds: &'static [&'static str],
    /// Field names tried in order when resolving a definition's name.
    /// C-family profiles list `declarator` before `name` so function
    /// definitions and struct/class specifiers both resolve.
    pub name_fields: &'static [&'static str],
    /// Field name of a callable's parameter list.
    pub params_field: &'static str,
    /// Field name of a callable's return type, when the grammar has one.
    pub return_type_field: Option<&'static str>,
    /// Construct-kind tags of field declarations inside type bodies.
    pub field_kinds: &'static [&'static str],
}

impl LanguageProfile {
    pub fn is_import(&self, kind: &str) -> bool {
        self.import_kinds.contains(&kind)
    }

    pub fn is_type(&self, kind: &str) -> bool {
        self.type_kinds.contains(&kind)
    }

    pub fn is_callable(&self, kind: &str) -> bool {
        self.callable_kinds.contains(&kind)
    }

    pub fn is_variable(&self, kind: &str) -> bool {
        self.variable_kinds.contains(&kind)
    }

    pub fn is_comment(&self, kind: &str) -> bool {
        self.comment_kinds.contains(&kind)
    }

    pub fn is_field(&self, kind: &str) -> bool {
        self.field_kinds.contains(&kind)
    }
}

fn python_profile() -> LanguageProfile {
    LanguageProfile {
        language: Language::Python,
        import_kinds: &[
            "import_statement",
            "import_from_statement",
            "future_import_statement",
        ],
        type_kinds: &["class_definition"],
        callable_kinds: &["function_definition"],
        variable_kinds: &["assignment"],
        variable_shape: VariableShape::Assignment,
        doc_style: DocStyle::LeadingLiteral,
        comment_kinds: &["comment"],
        name_fields: &["name"],
        params_field: "parameters",
        return_type_field: Some("return_type"),
        field_kinds: &[],
    }
}

fn java_profile() -> LanguageProfile {
    LanguageProfile {
        language: Language::Java,
        import_kinds: &["import_declaration"],
        type_kinds: &["class_declaration", "interface_declaration"],
        callable_kinds: &["method_declaration", "constructor_declaration"],
        variable_kinds: &["local_variable_declaration"],
        variable_shape: VariableShape::TypedDeclaration,
        doc_style: DocStyle::PrecedingComment,
        comment_kinds: &["block_comment", "line_comment"],
        name_fields: &["name"],
        params_field: "parameters",
        return_type_field: Some("type"),
        field_kinds: &["field_declaration"],
    }
}

fn cpp_profile() -> LanguageProfile {
    LanguageProfile {
        language: Language::Cpp,
        import_kinds: &["preproc_include"],
        type_kinds: &["class_specifier", "struct_specifier"],
        callable_kinds: &["function_definition"],
        variable_kinds: &["declaration"],
        variable_shape: VariableShape::TypedDeclaration,
        doc_style: DocStyle::PrecedingComment,
        comment_kinds: &["comment"],
        name_fields: &["declarator", "name"],
        params_field: "parameters",
        return_type_field: Some("type"),
        field_kinds: &["field_declaration"],
    }
}

fn c_profile() -> LanguageProfile {
    LanguageProfile {
        language: Language::C,
        import_kinds: &["preproc_include"],
        type_kinds: &["struct_specifier"],
        callable_kinds: &["function_definition"],
        variable_kinds: &["declaration"],
        variable_shape: VariableShape::TypedDeclaration,
        doc_style: DocStyle::PrecedingComment,
        comment_kinds: &["comment"],
        name_fields: &["declarator", "name"],
        params_field: "parameters",
        return_type_field: Some("type"),
        field_kinds: &["field_declaration"],
    }
}

fn javascript_profile() -> LanguageProfile {
    LanguageProfile {
        language: Language::JavaScript,
        import_kinds: &["import_statement"],
        type_kinds: &["class_declaration"],
        callable_kinds: &[
            "function_declaration",
            "generator_function_declaration",
            "method_definition",
        ],
        variable_kinds: &["variable_declaration", "lexical_declaration"],
        variable_shape: VariableShape::DeclaratorList,
        doc_style: DocStyle::PrecedingComment,
        comment_kinds: &["comment"],
        name_fields: &["name"],
        params_field: "parameters",
        return_type_field: None,
        field_kinds: &["field_definition"],
    }
}

/// Read-only table of extraction profiles.
///
/// Built once at process start; `register` may add profiles before the
/// registry is shared, after which all access goes through `&self` and is
/// safe for unsynchronized concurrent reads.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<LanguageProfile>,
}

impl ProfileRegistry {
    /// The five built-in profiles: python, java, cpp, c, javascript.
    pub fn builtin() -> Self {
        Self {
            profiles: vec![
                python_profile(),
                java_profile(),
                cpp_profile(),
                c_profile(),
                javascript_profile(),
            ],
        }
    }

    /// Add or replace a profile. Intended for startup configuration only.
    pub fn register(&mut self, profile: LanguageProfile) {
        self.profiles.retain(|p| p.language != profile.language);
        self.profiles.push(profile);
    }

    /// Look up a profile by language id string.
    pub fn lookup(&self, language_id: &str) -> Result<&LanguageProfile> {
        let language: Language = language_id
            .parse()
            .map_err(|_| LoomError::UnsupportedLanguage(language_id.to_string()))?;
        self.get(language)
    }

    /// Look up a profile by language.
    pub fn get(&self, language: Language) -> Result<&LanguageProfile> {
        self.profiles
            .iter()
            .find(|p| p.language == language)
            .ok_or_else(|| LoomError::UnsupportedLanguage(language.as_str().to_string()))
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.profiles.iter().map(|p| p.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_all_languages() {
        let registry = ProfileRegistry::builtin();
        for lang in Language::ALL {
            let profile = registry.get(lang).unwrap();
            assert_eq!(profile.language, lang);
        }
        assert_eq!(registry.languages().count(), 5);
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = ProfileRegistry::builtin();
        assert_eq!(
            registry.lookup("python").unwrap().language,
            Language::Python
        );
        assert_eq!(registry.lookup("js").unwrap().language, Language::JavaScript);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let registry = ProfileRegistry::builtin();
        let err = registry.lookup("fortran").unwrap_err();
        assert!(matches!(err, LoomError::UnsupportedLanguage(id) if id == "fortran"));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ProfileRegistry::builtin();
        let mut profile = python_profile();
        profile.comment_kinds = &["comment", "line_comment"];
        registry.register(profile);

        assert_eq!(registry.languages().count(), 5);
        let stored = registry.get(Language::Python).unwrap();
        assert!(stored.is_comment("line_comment"));
    }

    #[test]
    fn test_kind_predicates() {
        let registry = ProfileRegistry::builtin();
        let java = registry.get(Language::Java).unwrap();
        assert!(java.is_type("interface_declaration"));
        assert!(java.is_callable("constructor_declaration"));
        assert!(java.is_comment("block_comment"));
        assert!(!java.is_import("preproc_include"));
    }
}
