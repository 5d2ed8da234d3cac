//! Error types for tool lookup and option parsing
//!
//! Synthesis itself is total and never produces one of these; they only
//! arise where user input enters the library by name.

use thiserror::Error;

/// Result type for shellsmith operations
pub type Result<T> = std::result::Result<T, SmithError>;

/// Errors raised when resolving tools or parsing option assignments
#[derive(Debug, Error, PartialEq)]
pub enum SmithError {
    /// Tool not found in the registry
    #[error("unknown tool '{name}' (available: {available})")]
    UnknownTool { name: String, available: String },

    /// Field not declared by the tool
    #[error("tool '{tool}' has no field '{field}'")]
    UnknownField { tool: String, field: String },

    /// Value does not fit the field type
    #[error("invalid value '{value}' for field '{field}': expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// Assignment is not of the form `key=value`
    #[error("malformed assignment '{input}': expected key=value")]
    MalformedAssignment { input: String },
}
