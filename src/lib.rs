//! TableDB - A minimal in-memory relational table store written in Rust
//!
//! This library provides:
//! - Typed table schemas (integer and text columns)
//! - Schema-checked inserts, column projection, bulk update and delete
//! - A small command shell over the store

pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use catalog::ColumnType;
pub use config::{DuplicateTablePolicy, StoreConfig};
pub use error::{Error, Result};
pub use storage::Row;
pub use store::TableStore;
