//! Query session collaborator
//!
//! A handful of views are answered by running a fixed statement against the
//! information schema instead of walking the catalog. The engine reaches the
//! SQL layer through [`QuerySession`], shared behind a mutex so those
//! statements never interleave with other work on the same session.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use vibesql_types::SqlValue;

use crate::result::ResultTable;

/// One entry of the built-in help: `(section, topic)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpTopic {
    pub section: String,
    pub topic: String,
}

impl HelpTopic {
    pub fn new(section: impl Into<String>, topic: impl Into<String>) -> Self {
        HelpTopic { section: section.into(), topic: topic.into() }
    }
}

/// The SQL execution side of a session
pub trait QuerySession {
    type Error: std::error::Error + Send + Sync + 'static;

    fn is_closed(&self) -> bool;

    fn is_lazy_query_execution(&self) -> bool;

    fn set_lazy_query_execution(&mut self, lazy: bool);

    /// Prepare `sql`, bind `params` positionally (`?1`, `?2`, ...) and
    /// materialize the result.
    fn execute_query(&mut self, sql: &str, params: &[SqlValue]) -> Result<ResultTable, Self::Error>;

    /// The help table, in help order
    fn help_topics(&self) -> Vec<HelpTopic>;
}

/// A session shared between the engine and its other users
pub type SharedSession<S> = Arc<Mutex<S>>;

#[derive(Debug, Error)]
#[error("no query engine attached to this session")]
pub struct NoQueryEngine;

/// A session with no SQL engine behind it.
///
/// Catalog-backed views work normally; statement-backed views fail with
/// [`NoQueryEngine`].
#[derive(Debug, Clone, Default)]
pub struct DetachedSession {
    closed: bool,
    lazy: bool,
    help: Vec<HelpTopic>,
}

impl DetachedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_help(mut self, help: Vec<HelpTopic>) -> Self {
        self.help = help;
        self
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn into_shared(self) -> SharedSession<Self> {
        Arc::new(Mutex::new(self))
    }
}

impl QuerySession for DetachedSession {
    type Error = NoQueryEngine;

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn is_lazy_query_execution(&self) -> bool {
        self.lazy
    }

    fn set_lazy_query_execution(&mut self, lazy: bool) {
        self.lazy = lazy;
    }

    fn execute_query(&mut self, _sql: &str, _params: &[SqlValue]) -> Result<ResultTable, Self::Error> {
        Err(NoQueryEngine)
    }

    fn help_topics(&self) -> Vec<HelpTopic> {
        self.help.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_session() {
        let mut session = DetachedSession::new().with_help(vec![HelpTopic::new("Functions (Numeric)", "ABS")]);
        assert!(!session.is_closed());
        assert!(session.execute_query("SELECT 1", &[]).is_err());
        assert_eq!(session.help_topics().len(), 1);
        session.close();
        assert!(session.is_closed());
    }
}
