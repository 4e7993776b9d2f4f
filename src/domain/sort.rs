#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Which column to sort by. `column: None` keeps executor order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortDirective {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn by(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: Some(column.into()),
            direction,
        }
    }

    /// Header-click semantics: the same column flips direction, a different
    /// column starts ascending.
    pub fn toggled(&self, column: &str) -> Self {
        match &self.column {
            Some(current) if current == column => Self {
                column: Some(current.clone()),
                direction: self.direction.toggled(),
            },
            _ => Self::by(column, SortDirection::Ascending),
        }
    }

    pub fn is_sorted_by(&self, column: &str) -> bool {
        self.column.as_deref() == Some(column)
    }
}
