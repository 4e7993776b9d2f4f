#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaColumn {
    pub name: &'static str,
    pub data_type: &'static str,
}

/// A table in the built-in catalog, as listed by the schema viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaTable {
    pub name: &'static str,
    pub columns: Vec<SchemaColumn>,
}

impl SchemaTable {
    pub fn new(name: &'static str, columns: &[(&'static str, &'static str)]) -> Self {
        Self {
            name,
            columns: columns
                .iter()
                .map(|&(name, data_type)| SchemaColumn { name, data_type })
                .collect(),
        }
    }
}
