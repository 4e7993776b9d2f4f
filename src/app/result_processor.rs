//! Search filtering and sorting over a tabular result.
//!
//! Pure and synchronous: the output depends only on the inputs, and the
//! source rows are never copied. `ProcessedRows` keeps the shared source and
//! the ordered indices of the rows that survived.

use std::sync::Arc;

use unicode_casefold::UnicodeCaseFold;

use crate::domain::{SortDirection, SortDirective, TabularResult};

fn fold(s: &str) -> String {
    s.chars().case_fold().collect()
}

/// Case-folded search terms with OR semantics. Empty terms are dropped, so a
/// blank search box means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms {
    terms: Vec<String>,
}

impl SearchTerms {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            terms: terms
                .into_iter()
                .filter(|t| !t.as_ref().is_empty())
                .map(|t| fold(t.as_ref()))
                .collect(),
        }
    }

    pub fn single(term: &str) -> Self {
        Self::new([term])
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, row: &[String]) -> bool {
        if self.terms.is_empty() {
            return true;
        }
        let folded: Vec<String> = row.iter().map(|cell| fold(cell)).collect();
        self.terms
            .iter()
            .any(|term| folded.iter().any(|cell| cell.contains(term.as_str())))
    }
}

/// Cheap to clone: both the source and the index list are shared.
#[derive(Debug, Clone)]
pub struct ProcessedRows {
    source: Arc<TabularResult>,
    order: Arc<[usize]>,
}

impl ProcessedRows {
    /// All rows in executor order.
    pub fn unprocessed(source: Arc<TabularResult>) -> Self {
        let order = (0..source.row_count()).collect();
        Self { source, order }
    }

    pub fn source(&self) -> &Arc<TabularResult> {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Source-row indices in processed order.
    pub fn handles(&self) -> &[usize] {
        &self.order
    }

    pub fn row(&self, position: usize) -> Option<&[String]> {
        self.order
            .get(position)
            .and_then(|&handle| self.source.row(handle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.order.iter().filter_map(|&h| self.source.row(h))
    }
}

pub fn process(
    source: &Arc<TabularResult>,
    terms: &SearchTerms,
    sort: &SortDirective,
) -> ProcessedRows {
    let mut order: Vec<usize> = source
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| terms.matches(row))
        .map(|(i, _)| i)
        .collect();

    if let Some(col) = sort
        .column
        .as_deref()
        .and_then(|name| source.column_index(name))
    {
        sort_stable(&mut order, source, col, sort.direction);
    }

    ProcessedRows {
        source: Arc::clone(source),
        order: order.into(),
    }
}

fn sort_stable(
    order: &mut Vec<usize>,
    source: &TabularResult,
    col: usize,
    direction: SortDirection,
) {
    let mut keyed: Vec<(String, usize)> = order
        .iter()
        .map(|&handle| {
            let key = source
                .row(handle)
                .and_then(|row| row.get(col))
                .map(|cell| fold(cell))
                .unwrap_or_default();
            (key, handle)
        })
        .collect();

    // slice::sort_by is stable, so equal keys keep their filtered order.
    keyed.sort_by(|a, b| match direction {
        SortDirection::Ascending => a.0.cmp(&b.0),
        SortDirection::Descending => b.0.cmp(&a.0),
    });

    *order = keyed.into_iter().map(|(_, handle)| handle).collect();
}
