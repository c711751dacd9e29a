//! Shell commands
//!
//! Each command maps onto one `TableStore` operation or a catalog listing.
//! `execute` returns structured output; rendering is left to the caller.

pub mod parser;

pub use parser::{parse, tokenize};

use serde::Serialize;
use tracing::debug;

use crate::catalog::{ColumnType, Schema};
use crate::error::{Error, Result};
use crate::storage::Row;
use crate::store::TableStore;

/// Help text for the shell
pub const HELP: &str = r#"
Commands:
  create <table> <col>:<type> ...   Create a table (types: integer, text)
  insert <table> <value> ...        Insert one row, values in column order
  select <table> [<col> ...]        Show rows, optionally projected
  update <table> <col> <value>      Set a column in every row
  remove <table> <col> <value>      Delete rows whose column equals value

  .tables                           List all tables
  .schema [<table>]                 Show table schema
  .dump <table>                     Print a table as JSON
  .help                             Show this help message
  .quit                             Exit

Values with spaces, or empty values, go in double quotes: "Mary Ann", "".
"#;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateTable {
        table: String,
        columns: Vec<(String, ColumnType)>,
    },
    Insert {
        table: String,
        values: Vec<String>,
    },
    Select {
        table: String,
        columns: Vec<String>,
    },
    Update {
        table: String,
        column: String,
        value: String,
    },
    Remove {
        table: String,
        column: String,
        value: String,
    },
    Tables,
    Schema(Option<String>),
    Dump(String),
    Help,
    Quit,
}

/// Result of running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Free-form status line or listing
    Message(String),
    /// Rows with their column headers
    Rows { columns: Vec<String>, rows: Vec<Row> },
    /// Pretty-printed JSON document
    Json(String),
    /// The shell should exit
    Quit,
}

#[derive(Serialize)]
struct TableDump<'a> {
    table: &'a str,
    schema: &'a Schema,
    rows: &'a [Row],
}

/// Run a command against the store
pub fn execute(store: &mut TableStore, command: Command) -> Result<CommandOutput> {
    debug!(?command, "executing");

    match command {
        Command::CreateTable { table, columns } => {
            store.create_table(&table, columns)?;
            Ok(CommandOutput::Message(format!("Table '{}' created", table)))
        }
        Command::Insert { table, values } => {
            store.insert(&table, values)?;
            Ok(CommandOutput::Message("1 row(s) inserted".to_string()))
        }
        Command::Select { table, columns } => {
            let rows = store.try_select(&table, &columns)?;
            let schema = store.get_table(&table)?.schema();
            let headers: Vec<String> = if columns.is_empty() {
                schema.column_names().into_iter().map(String::from).collect()
            } else {
                columns
                    .into_iter()
                    .filter(|c| schema.has_column(c))
                    .collect()
            };
            Ok(CommandOutput::Rows {
                columns: headers,
                rows,
            })
        }
        Command::Update {
            table,
            column,
            value,
        } => {
            let updated = store.update(&table, &column, &value)?;
            Ok(CommandOutput::Message(format!("{} row(s) updated", updated)))
        }
        Command::Remove {
            table,
            column,
            value,
        } => {
            let removed = store.remove(&table, &column, &value)?;
            Ok(CommandOutput::Message(format!("{} row(s) deleted", removed)))
        }
        Command::Tables => {
            let names = store.table_names();
            if names.is_empty() {
                Ok(CommandOutput::Message("No tables found.".to_string()))
            } else {
                let mut listing = String::from("Tables:");
                for name in names {
                    listing.push_str("\n  ");
                    listing.push_str(name);
                }
                Ok(CommandOutput::Message(listing))
            }
        }
        Command::Schema(Some(table)) => Ok(CommandOutput::Message(store.table_info(&table)?)),
        Command::Schema(None) => {
            let mut info = String::new();
            for table in store.tables() {
                info.push_str(&table.describe());
            }
            if info.is_empty() {
                return Ok(CommandOutput::Message("No tables found.".to_string()));
            }
            Ok(CommandOutput::Message(info.trim_end().to_string()))
        }
        Command::Dump(table) => {
            let table = store.get_table(&table)?;
            let dump = TableDump {
                table: table.name(),
                schema: table.schema(),
                rows: table.scan(),
            };
            let json =
                serde_json::to_string_pretty(&dump).map_err(|e| Error::Internal(e.to_string()))?;
            Ok(CommandOutput::Json(json))
        }
        Command::Help => Ok(CommandOutput::Message(HELP.trim().to_string())),
        Command::Quit => Ok(CommandOutput::Quit),
    }
}

/// Parse and run one line
pub fn run_line(store: &mut TableStore, line: &str) -> Result<CommandOutput> {
    execute(store, parse(line)?)
}
