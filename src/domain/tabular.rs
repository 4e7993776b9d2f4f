use crate::error::DomainError;

/// Column headers plus rows of string cells, as produced by an executor.
///
/// Invariant: every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabularResult {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TabularResult {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, DomainError> {
        let expected = headers.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(DomainError::RowWidthMismatch {
                row,
                found: cells.len(),
                expected,
            });
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count_display(&self) -> String {
        if self.rows.len() == 1 {
            "1 row".to_string()
        } else {
            format!("{} rows", self.rows.len())
        }
    }
}
