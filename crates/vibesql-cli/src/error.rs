use std::fmt;

/// Errors turning a fixture document into a catalog
#[derive(Debug)]
pub enum FixtureError {
    Parse(String),
    UnknownType(String),
    UnknownTableKind(String),
    UnknownAction(String),
    Catalog(String),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Parse(msg) => write!(f, "Fixture parse error: {}", msg),
            FixtureError::UnknownType(name) => write!(f, "Unknown column type '{}'", name),
            FixtureError::UnknownTableKind(name) => write!(f, "Unknown table kind '{}'", name),
            FixtureError::UnknownAction(name) => write!(f, "Unknown referential action '{}'", name),
            FixtureError::Catalog(msg) => write!(f, "Catalog error: {}", msg),
        }
    }
}

impl std::error::Error for FixtureError {}

impl From<vibesql_catalog::CatalogError> for FixtureError {
    fn from(err: vibesql_catalog::CatalogError) -> Self {
        FixtureError::Catalog(err.to_string())
    }
}

impl From<toml::de::Error> for FixtureError {
    fn from(err: toml::de::Error) -> Self {
        FixtureError::Parse(err.to_string())
    }
}
