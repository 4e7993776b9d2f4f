use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::app::ports::{ExecutionOutcome, QueryExecutor};
use crate::catalog;
use crate::domain::{DomainError, ResultStatus, TabularResult};

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Which built-in table a query reads, decided by a case-insensitive
/// `from <table>` substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTable {
    Employees,
    Products,
    Orders,
    LargeData,
}

impl CatalogTable {
    pub fn match_query(query: &str) -> Option<Self> {
        let lowered = query.to_lowercase();
        [
            ("from employees", Self::Employees),
            ("from products", Self::Products),
            ("from orders", Self::Orders),
            ("from large_data_table", Self::LargeData),
        ]
        .into_iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, table)| table)
    }
}

/// Answers queries from the built-in catalog after a fixed delay.
pub struct SimulatedExecutor {
    latency: Duration,
    large_rows: usize,
}

impl SimulatedExecutor {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            large_rows: catalog::LARGE_TABLE_ROWS,
        }
    }

    pub fn with_large_rows(mut self, rows: usize) -> Self {
        self.large_rows = rows;
        self
    }

    fn build(table: Option<CatalogTable>, large_rows: usize) -> Result<TabularResult, DomainError> {
        match table {
            Some(CatalogTable::Employees) => catalog::employees(),
            Some(CatalogTable::Products) => catalog::products(),
            Some(CatalogTable::Orders) => catalog::orders(),
            Some(CatalogTable::LargeData) => catalog::large_dataset(large_rows),
            None => catalog::placeholder(),
        }
    }
}

impl Default for SimulatedExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl QueryExecutor for SimulatedExecutor {
    async fn execute(&self, query: &str) -> ExecutionOutcome {
        let table = CatalogTable::match_query(query);
        debug!(?table, latency_ms = self.latency.as_millis(), "simulating query");
        tokio::time::sleep(self.latency).await;

        let large_rows = self.large_rows;
        let built = tokio::task::spawn_blocking(move || Self::build(table, large_rows)).await;
        match built {
            Ok(Ok(result)) => ExecutionOutcome::Table(result),
            Ok(Err(e)) => {
                warn!(error = %e, "catalog table is malformed");
                ExecutionOutcome::Message {
                    status: ResultStatus::Error,
                    text: e.to_string(),
                }
            }
            Err(e) => ExecutionOutcome::Message {
                status: ResultStatus::Error,
                text: format!("Query task failed: {e}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table(outcome: ExecutionOutcome) -> TabularResult {
        match outcome {
            ExecutionOutcome::Table(table) => table,
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[rstest]
    #[case("SELECT * FROM Employees;", Some(CatalogTable::Employees))]
    #[case("select name from products where price > 1", Some(CatalogTable::Products))]
    #[case("SELECT OrderID FROM ORDERS LIMIT 5", Some(CatalogTable::Orders))]
    #[case("SELECT * FROM Large_Data_Table;", Some(CatalogTable::LargeData))]
    #[case("SELECT 1;", None)]
    #[case("SELECT * FROM customers", None)]
    fn matches_catalog_table(#[case] query: &str, #[case] expected: Option<CatalogTable>) {
        assert_eq!(CatalogTable::match_query(query), expected);
    }

    #[tokio::test(start_paused = true)]
    async fn employees_query_returns_five_rows_after_latency() {
        let executor = SimulatedExecutor::new(Duration::from_millis(800));
        let started = tokio::time::Instant::now();

        let result = table(executor.execute("SELECT * FROM Employees;").await);

        assert!(started.elapsed() >= Duration::from_millis(800));
        assert_eq!(
            result.headers(),
            &["EmployeeID", "FirstName", "LastName", "Department", "Salary"]
        );
        assert_eq!(result.row_count(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_query_returns_placeholder() {
        let executor = SimulatedExecutor::new(Duration::ZERO);

        let result = table(executor.execute("UPDATE t SET x = 1").await);

        assert_eq!(result.headers(), &["Status", "Message"]);
        assert_eq!(
            result.row(0).unwrap(),
            &["Success", "Query executed. Displaying generic dummy data."]
        );
    }

    #[tokio::test]
    async fn large_table_row_count_is_configurable() {
        let executor = SimulatedExecutor::new(Duration::ZERO).with_large_rows(250);

        let result = table(executor.execute("SELECT * FROM Large_Data_Table;").await);

        assert_eq!(result.row_count(), 250);
        assert_eq!(result.row(249).unwrap()[0], "ITEM-00250");
    }
}
