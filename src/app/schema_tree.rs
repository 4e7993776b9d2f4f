use std::collections::BTreeSet;

use crate::domain::SchemaTable;

/// One visible line of the schema viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaRow<'a> {
    Table {
        index: usize,
        name: &'a str,
        expanded: bool,
    },
    Column {
        table: usize,
        name: &'a str,
        data_type: &'a str,
    },
}

impl SchemaRow<'_> {
    /// The identifier inserted into the editor when this row is chosen.
    pub fn insert_text(&self) -> &str {
        match self {
            Self::Table { name, .. } | Self::Column { name, .. } => name,
        }
    }

    pub fn table_index(&self) -> usize {
        match self {
            Self::Table { index, .. } => *index,
            Self::Column { table, .. } => *table,
        }
    }
}

/// Tables in order, each followed by its columns when expanded.
pub fn flatten<'a>(tables: &'a [SchemaTable], expanded: &BTreeSet<usize>) -> Vec<SchemaRow<'a>> {
    let mut rows = Vec::new();
    for (index, table) in tables.iter().enumerate() {
        let is_expanded = expanded.contains(&index);
        rows.push(SchemaRow::Table {
            index,
            name: table.name,
            expanded: is_expanded,
        });
        if is_expanded {
            rows.extend(table.columns.iter().map(|c| SchemaRow::Column {
                table: index,
                name: c.name,
                data_type: c.data_type,
            }));
        }
    }
    rows
}
