pub mod error;
pub mod record;

pub use error::{LoomError, Result};
pub use record::{
    CallableRecord, FieldRecord, ImportRecord, Parameter, ParseResult, Span, TypeRecord,
    VariableRecord,
};
