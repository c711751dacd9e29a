//! Error types for TableDB
//!
//! This module defines all error types surfaced by the table store and the
//! command shell.

use crate::catalog::ColumnType;
use thiserror::Error;

/// The main error type for TableDB
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ========== Catalog Errors ==========
    #[error("Catalog error: table '{0}' not found")]
    TableNotFound(String),

    #[error("Catalog error: table '{0}' already exists")]
    TableAlreadyExists(String),

    #[error("Catalog error: column '{0}' not found in table '{1}'")]
    ColumnNotFound(String, String),

    #[error("Catalog error: column '{0}' already exists in table '{1}'")]
    ColumnAlreadyExists(String, String),

    // ========== Row Errors ==========
    #[error("Row error: table '{table}' expects {expected} value(s), got {found}")]
    ArityMismatch {
        table: String,
        expected: usize,
        found: usize,
    },

    #[error("Type error: value '{value}' for column '{column}' is not {expected}")]
    TypeMismatch {
        column: String,
        value: String,
        expected: ColumnType,
    },

    #[error("Type error: unknown column type '{0}'")]
    UnknownColumnType(String),

    // ========== Command Errors ==========
    #[error("Parse error: {0}")]
    ParseError(String),

    // ========== Internal Errors ==========
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for TableDB operations
pub type Result<T> = std::result::Result<T, Error>;
