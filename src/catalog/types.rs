//! Column types for TableDB
//!
//! Every field is stored as text. The declared type only gates what an
//! insert may store.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Base-10 integer with an optional leading sign
    Integer,
    /// Arbitrary text, including the empty string
    Text,
}

impl ColumnType {
    /// Check whether `value` may be stored in a column of this type
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            ColumnType::Integer => is_integer_literal(value),
            ColumnType::Text => true,
        }
    }
}

/// `[+-]?[0-9]+`, nothing else. No width limit: values are kept as text.
fn is_integer_literal(value: &str) -> bool {
    let digits = value
        .strip_prefix('+')
        .or_else(|| value.strip_prefix('-'))
        .unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "INTEGER"),
            ColumnType::Text => write!(f, "TEXT"),
        }
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(ColumnType::Integer),
            "text" | "string" => Ok(ColumnType::Text),
            _ => Err(Error::UnknownColumnType(s.to_string())),
        }
    }
}
