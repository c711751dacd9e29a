//! Row type for TableDB
//!
//! A row is an ordered sequence of text fields aligned with its table's
//! schema by position.

use serde::{Deserialize, Serialize};

/// A stored or projected row
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: Vec<String>,
}

impl Row {
    /// Create a new row from values
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Get a value by index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Set a value by index; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Get all values
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Get number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if row is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the row and return the values
    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    /// Project specific positions, in the given order
    pub fn project(&self, indices: &[usize]) -> Row {
        indices
            .iter()
            .filter_map(|&i| self.values.get(i).cloned())
            .collect()
    }
}

impl From<Vec<String>> for Row {
    fn from(values: Vec<String>) -> Self {
        Row::new(values)
    }
}

impl From<Vec<&str>> for Row {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().map(str::to_string).collect()
    }
}

impl FromIterator<String> for Row {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Row::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Row {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
