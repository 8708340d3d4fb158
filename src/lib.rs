//! Codeloom - Structural Source-Code Extraction Engine
//!
//! Parses source text for five languages (Python, Java, C++, C, JavaScript)
//! and produces a normalized structural summary: imports, type definitions
//! with their methods and fields, file-level callables, variable bindings,
//! and attached documentation comments.
//!
//! ## Core Design
//!
//! - **Profile-Driven**: one traversal algorithm for every language; the
//!   per-language knowledge lives in read-only [`LanguageProfile`] data
//! - **Stateless**: each extraction call is a pure function of its inputs,
//!   safe to run concurrently without coordination
//! - **Atomic Failures**: an unknown language or an unbuildable tree fails
//!   the whole call; a node that merely deviates from its expected shape
//!   degrades a single field to empty instead
//!
//! ## Quick Start
//!
//! ```ignore
//! use codeloom::{Extractor, Language};
//!
//! let extractor = Extractor::new();
//! let result = extractor.parse(source, Language::Python)?;
//! for callable in &result.callables {
//!     println!("{}: {}", callable.name, callable.doc);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: profiles, tree building, the extraction engine
//! - [`export`]: flattened index rows and per-callable doc units for
//!   downstream services
//! - [`types`]: result records and the error taxonomy

pub mod analyzer;
pub mod export;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use analyzer::{DocStyle, Extractor, Language, LanguageProfile, ProfileRegistry, VariableShape};

pub use types::{
    CallableRecord, FieldRecord, ImportRecord, LoomError, Parameter, ParseResult, Result, Span,
    TypeRecord, VariableRecord,
};

pub use export::{DocUnit, FlatRecord, doc_units, flatten};
