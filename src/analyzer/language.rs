//! Language identifiers and detection.
//!
//! Single source of truth for mapping language ids, file extensions, and
//! paths onto the five supported languages, and for handing out the
//! tree-sitter grammar each one parses with.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages with a built-in extraction profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    Cpp,
    C,
    JavaScript,
}

impl Language {
    /// All supported languages, in registry order.
    pub const ALL: [Language; 5] = [
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::C,
        Language::JavaScript,
    ];

    /// Canonical language id, as used for registry lookups and CLI input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::JavaScript => "javascript",
        }
    }

    /// File extensions that map to this language.
    fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["py", "pyi", "pyw"],
            Language::Java => &["java"],
            Language::Cpp => &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "h++"],
            Language::C => &["c", "h"],
            Language::JavaScript => &["js", "mjs", "cjs"],
        }
    }

    /// Alternative names accepted when parsing from a string.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Language::Python => &["python", "py"],
            Language::Java => &["java"],
            Language::Cpp => &["cpp", "c++", "cxx"],
            Language::C => &["c"],
            Language::JavaScript => &["javascript", "js"],
        }
    }

    /// Detect the language from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext_lower = ext.to_lowercase();
        Self::ALL
            .iter()
            .find(|lang| lang.extensions().contains(&ext_lower.as_str()))
            .copied()
    }

    /// Detect the language from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// The tree-sitter grammar that parses this language.
    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Language::Python => tree_sitter_python::LANGUAGE.into(),
            Language::Java => tree_sitter_java::LANGUAGE.into(),
            Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            Language::C => tree_sitter_c::LANGUAGE.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_lower = s.to_lowercase();
        Self::ALL
            .iter()
            .find(|lang| lang.aliases().contains(&s_lower.as_str()))
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("PY"), Some(Language::Python));
        assert_eq!(Language::from_extension("java"), Some(Language::Java));
        assert_eq!(Language::from_extension("hpp"), Some(Language::Cpp));
        assert_eq!(Language::from_extension("h"), Some(Language::C));
        assert_eq!(Language::from_extension("mjs"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("rs"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path("app/main.py"), Some(Language::Python));
        assert_eq!(Language::from_path("Widget.java"), Some(Language::Java));
        assert_eq!(Language::from_path("src/util.cc"), Some(Language::Cpp));
        assert_eq!(Language::from_path("no_extension"), None);
        assert_eq!(Language::from_path("image.png"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("python".parse::<Language>(), Ok(Language::Python));
        assert_eq!("PY".parse::<Language>(), Ok(Language::Python));
        assert_eq!("c++".parse::<Language>(), Ok(Language::Cpp));
        assert_eq!("js".parse::<Language>(), Ok(Language::JavaScript));
        assert_eq!("cobol".parse::<Language>(), Err(()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::Cpp.to_string(), "cpp");
        assert_eq!(Language::JavaScript.to_string(), "javascript");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Language::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
        let parsed: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Language::JavaScript);
    }

    #[test]
    fn test_grammar_loads() {
        for lang in Language::ALL {
            let mut parser = tree_sitter::Parser::new();
            assert!(parser.set_language(&lang.grammar()).is_ok(), "{}", lang);
        }
    }
}
