//! Table storage for TableDB
//!
//! This module combines a schema with its rows and implements the row-level
//! halves of insert, select, update and remove.

use super::row::Row;
use crate::catalog::Schema;
use crate::error::{Error, Result};

/// A named table: schema plus rows in insertion order
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    /// Create a new, empty table
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            rows: Vec::new(),
        }
    }

    /// Get table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get table schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of stored rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows, in stored order
    pub fn scan(&self) -> &[Row] {
        &self.rows
    }

    /// Validate and append a row. Nothing is stored on failure.
    pub fn insert(&mut self, values: Vec<String>) -> Result<()> {
        self.schema.check_row(&self.name, &values)?;
        self.rows.push(Row::new(values));
        Ok(())
    }

    /// Project every row onto the named columns.
    ///
    /// An empty list returns full rows. Names that match no column are
    /// skipped, so such rows come back shorter.
    pub fn project<S: AsRef<str>>(&self, columns: &[S]) -> Vec<Row> {
        if columns.is_empty() {
            return self.rows.clone();
        }

        let indices: Vec<usize> = columns
            .iter()
            .filter_map(|name| self.schema.get_column_index(name.as_ref()))
            .collect();

        self.rows.iter().map(|row| row.project(&indices)).collect()
    }

    /// Overwrite `column` in every row with `value`. Returns rows touched.
    ///
    /// The value is not checked against the column type.
    pub fn update_column(&mut self, column: &str, value: &str) -> Result<usize> {
        let index = self.column_index(column)?;
        for row in &mut self.rows {
            row.set(index, value);
        }
        Ok(self.rows.len())
    }

    /// Drop every row whose `column` equals `value` exactly. Returns rows removed.
    pub fn delete_matching(&mut self, column: &str, value: &str) -> Result<usize> {
        let index = self.column_index(column)?;
        let before = self.rows.len();
        self.rows.retain(|row| row.get(index) != Some(value));
        Ok(before - self.rows.len())
    }

    /// Human-readable schema summary (for `.schema`)
    pub fn describe(&self) -> String {
        let mut info = format!("Table: {}\n", self.name);
        info.push_str("Columns:\n");
        for col in self.schema.columns() {
            info.push_str(&format!("  {} {}\n", col.name, col.column_type));
        }
        info.push_str(&format!("Rows: {}\n", self.rows.len()));
        info
    }

    fn column_index(&self, column: &str) -> Result<usize> {
        self.schema
            .get_column_index(column)
            .ok_or_else(|| Error::ColumnNotFound(column.to_string(), self.name.clone()))
    }
}
