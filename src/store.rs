//! Table store for TableDB
//!
//! `TableStore` owns every table and resolves names for all operations.
//! Lookup is a linear scan and the first table with a given name wins.

use tracing::{debug, trace, warn};

use crate::catalog::{ColumnType, Schema};
use crate::config::{DuplicateTablePolicy, StoreConfig};
use crate::error::{Error, Result};
use crate::storage::{Row, Table};

/// In-memory collection of named tables
#[derive(Debug, Default)]
pub struct TableStore {
    config: StoreConfig,
    tables: Vec<Table>,
}

impl TableStore {
    /// Create an empty store with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            tables: Vec::new(),
        }
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Create a new table from ordered `(column, type)` pairs.
    ///
    /// Under `DuplicateTablePolicy::Allow` a repeated name is accepted and
    /// shadowed by the earlier table.
    pub fn create_table<I, S>(&mut self, name: &str, columns: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, ColumnType)>,
        S: Into<String>,
    {
        let schema = Schema::from_specs(name, columns)?;

        if self.table_exists(name) {
            match self.config.duplicate_tables {
                DuplicateTablePolicy::Reject => {
                    warn!(table = name, "rejecting duplicate table");
                    return Err(Error::TableAlreadyExists(name.to_string()));
                }
                DuplicateTablePolicy::Allow => {
                    warn!(table = name, "table name already in use; new table is shadowed");
                }
            }
        }

        debug!(table = name, columns = schema.column_count(), "created table");
        self.tables.push(Table::new(name, schema));
        Ok(())
    }

    /// Append one row. Values are matched to columns by position.
    pub fn insert<I, V>(&mut self, table_name: &str, values: I) -> Result<()>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let table = self.get_table_mut(table_name)?;

        if let Err(e) = table.insert(values) {
            warn!(table = table_name, error = %e, "insert rejected");
            return Err(e);
        }

        debug!(table = table_name, rows = table.row_count(), "inserted row");
        Ok(())
    }

    /// Read rows, projected onto `columns` (all columns when empty).
    ///
    /// An unknown table yields an empty result rather than an error; use
    /// [`TableStore::try_select`] to tell the two apart.
    pub fn select<S: AsRef<str>>(&self, table_name: &str, columns: &[S]) -> Vec<Row> {
        self.try_select(table_name, columns).unwrap_or_default()
    }

    /// Like [`TableStore::select`], but reports a missing table
    pub fn try_select<S: AsRef<str>>(&self, table_name: &str, columns: &[S]) -> Result<Vec<Row>> {
        let table = self.get_table(table_name)?;
        Ok(table.project(columns))
    }

    /// Set `column` to `value` in every row. Returns the number of rows touched.
    pub fn update(&mut self, table_name: &str, column: &str, value: &str) -> Result<usize> {
        let table = self.get_table_mut(table_name)?;
        let updated = table.update_column(column, value).inspect_err(|e| {
            warn!(table = table_name, error = %e, "update rejected");
        })?;

        debug!(table = table_name, column, updated, "updated rows");
        Ok(updated)
    }

    /// Delete every row whose `column` equals `value`. Returns the number removed.
    pub fn remove(&mut self, table_name: &str, column: &str, value: &str) -> Result<usize> {
        let table = self.get_table_mut(table_name)?;
        let removed = table.delete_matching(column, value).inspect_err(|e| {
            warn!(table = table_name, error = %e, "remove rejected");
        })?;

        debug!(table = table_name, column, removed, "removed rows");
        Ok(removed)
    }

    /// Get a table by name
    pub fn get_table(&self, name: &str) -> Result<&Table> {
        trace!(table = name, "lookup");
        self.tables
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    fn get_table_mut(&mut self, name: &str) -> Result<&mut Table> {
        trace!(table = name, "lookup");
        match self.tables.iter_mut().find(|t| t.name() == name) {
            Some(table) => Ok(table),
            None => {
                warn!(table = name, "table not found");
                Err(Error::TableNotFound(name.to_string()))
            }
        }
    }

    /// Check if a table exists
    pub fn table_exists(&self, name: &str) -> bool {
        self.tables.iter().any(|t| t.name() == name)
    }

    /// All tables in creation order, shadowed duplicates included
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// List table names in creation order (duplicates included)
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(Table::name).collect()
    }

    /// Number of rows in a table
    pub fn row_count(&self, name: &str) -> Result<usize> {
        Ok(self.get_table(name)?.row_count())
    }

    /// Get table schema info as a formatted string (for `.schema`)
    pub fn table_info(&self, name: &str) -> Result<String> {
        Ok(self.get_table(name)?.describe())
    }
}
