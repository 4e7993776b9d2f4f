use async_trait::async_trait;

use crate::domain::{ResultStatus, TabularResult};

/// What a query run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    Table(TabularResult),
    Message { status: ResultStatus, text: String },
    /// Nothing specific to show for this query.
    Empty,
}

/// Runs a query. Never fails: problems are reported as an
/// `ExecutionOutcome::Message` with an error status.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, query: &str) -> ExecutionOutcome;
}
