//! Schema definitions for TableDB
//!
//! This module defines table schemas and column metadata. A schema is fixed
//! once its table is created.

use super::types::ColumnType;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Column definition in a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Declared type
    pub column_type: ColumnType,
    /// Column position (0-indexed)
    pub position: usize,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, column_type: ColumnType, position: usize) -> Self {
        Self {
            name: name.into(),
            column_type,
            position,
        }
    }
}

/// Table schema - ordered, typed columns
///
/// Values map to columns purely by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Create a new empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from `(name, type)` pairs, in order
    pub fn from_specs<I, S>(table: &str, specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ColumnType)>,
        S: Into<String>,
    {
        let mut schema = Self::new();
        for (name, column_type) in specs {
            schema.add_column(table, name, column_type)?;
        }
        Ok(schema)
    }

    /// Append a column; names must be unique within the table
    fn add_column(
        &mut self,
        table: &str,
        name: impl Into<String>,
        column_type: ColumnType,
    ) -> Result<()> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(Error::ColumnAlreadyExists(name, table.to_string()));
        }
        let position = self.columns.len();
        self.columns.push(Column::new(name, column_type, position));
        Ok(())
    }

    /// Get column by name
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column index by name (first match)
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.get_column(name).map(|c| c.position)
    }

    /// Get all columns
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.get_column(name).is_some()
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Validate a candidate row: arity first, then each typed column in order.
    pub fn check_row(&self, table: &str, values: &[String]) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(Error::ArityMismatch {
                table: table.to_string(),
                expected: self.columns.len(),
                found: values.len(),
            });
        }

        for (column, value) in self.columns.iter().zip(values) {
            if !column.column_type.accepts(value) {
                return Err(Error::TypeMismatch {
                    column: column.name.clone(),
                    value: value.clone(),
                    expected: column.column_type,
                });
            }
        }

        Ok(())
    }
}
