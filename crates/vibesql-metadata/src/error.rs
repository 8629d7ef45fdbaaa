//! Error types for metadata views

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by metadata operations
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A required identifier argument was not supplied
    #[error("Invalid value \"null\" for parameter \"{name}\"")]
    MissingArgument { name: &'static str },

    /// A foreign key carries a referential action outside the reportable set.
    /// This is a catalog invariant violation, not a user error.
    #[error("Internal error: unknown referential action {action}")]
    UnknownAction { action: String },

    /// The pattern ends with a bare escape character
    #[error("Invalid LIKE pattern '{pattern}': dangling escape character")]
    InvalidPattern { pattern: String },

    #[error("Database session is closed")]
    SessionClosed,

    /// Failure of a pass-through statement
    #[error("Query failed: {0}")]
    Query(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, MetadataError>;
