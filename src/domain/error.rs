use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        found: usize,
        expected: usize,
    },
}
