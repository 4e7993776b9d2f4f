use crate::result_processor::ProcessedRows;

pub const DEFAULT_PAGE_SIZE: usize = 100;

/// One contiguous slice of processed rows. `rows` holds source-row handles
/// in processed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub rows: Vec<usize>,
    pub has_more: bool,
}

/// Serves processed rows in fixed-size pages.
///
/// A fetcher is bound to one search/sort configuration; when either changes
/// the caller builds a new fetcher and restarts from page 0.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    rows: ProcessedRows,
    page_size: usize,
}

impl PageFetcher {
    pub fn new(rows: ProcessedRows, page_size: usize) -> Self {
        Self {
            rows,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &ProcessedRows {
        &self.rows
    }

    pub fn total_pages(&self) -> usize {
        self.total().div_ceil(self.page_size).max(1)
    }

    pub fn fetch_page(&self, number: usize) -> Page {
        let handles = self.rows.handles();
        let total = handles.len();

        if total <= self.page_size {
            return Page {
                number,
                rows: if number == 0 { handles.to_vec() } else { Vec::new() },
                has_more: false,
            };
        }

        let start = number.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        Page {
            number,
            rows: handles[start..end].to_vec(),
            has_more: end < total,
        }
    }

    /// Suspends once before answering so callers can treat paging like any
    /// other awaited fetch.
    pub async fn fetch_page_async(&self, number: usize) -> Page {
        tokio::task::yield_now().await;
        self.fetch_page(number)
    }
}
