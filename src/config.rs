//! Store configuration

/// What `create_table` does when the name is already taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateTablePolicy {
    /// Append the new table anyway; lookups keep resolving to the first one
    #[default]
    Allow,
    /// Fail with `TableAlreadyExists`
    Reject,
}

/// Table store configuration
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Handling of repeated table names
    pub duplicate_tables: DuplicateTablePolicy,
}

impl StoreConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate table policy
    pub fn duplicate_tables(mut self, policy: DuplicateTablePolicy) -> Self {
        self.duplicate_tables = policy;
        self
    }

    /// Shorthand for `duplicate_tables(DuplicateTablePolicy::Reject)`
    pub fn strict(self) -> Self {
        self.duplicate_tables(DuplicateTablePolicy::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        assert_eq!(
            StoreConfig::new().duplicate_tables,
            DuplicateTablePolicy::Allow
        );
        assert_eq!(
            StoreConfig::new().strict().duplicate_tables,
            DuplicateTablePolicy::Reject
        );
    }
}
