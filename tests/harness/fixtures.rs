use sqlpad::app::ports::ExecutionOutcome;
use sqlpad::infra::catalog;

pub fn employees() -> ExecutionOutcome {
    ExecutionOutcome::Table(catalog::employees().unwrap())
}

pub fn large(rows: usize) -> ExecutionOutcome {
    ExecutionOutcome::Table(catalog::large_dataset(rows).unwrap())
}
