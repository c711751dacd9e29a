//! Storage module
//!
//! This module contains the in-memory row and table representations.

pub mod row;
pub mod table;

pub use row::Row;
pub use table::Table;
