//! Catalog-level settings: name and collation.

impl super::Catalog {
    /// Get the catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the identifier collation (e.g. `BINARY`, `NOCASE`).
    pub fn set_collation(&mut self, collation: Option<String>) {
        self.collation = collation;
    }

    /// Get the identifier collation.
    pub fn collation(&self) -> Option<&str> {
        self.collation.as_deref()
    }
}
