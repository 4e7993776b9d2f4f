//! Built-in sample tables served by the simulated executor.

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::{DomainError, SchemaTable, TabularResult};

pub const LARGE_TABLE_ROWS: usize = 50_000;

/// Anchor for generated timestamps, 2024-01-01 00:00:00 UTC.
const TIMESTAMP_ANCHOR_SECS: i64 = 1_704_067_200;
/// Generated timestamps fall within this many seconds before the anchor.
const TIMESTAMP_SPREAD_SECS: u64 = 10_000_000;

fn table(headers: &[&str], rows: &[&[&str]]) -> Result<TabularResult, DomainError> {
    TabularResult::new(
        headers.iter().map(|h| (*h).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect(),
    )
}

pub fn employees() -> Result<TabularResult, DomainError> {
    table(
        &["EmployeeID", "FirstName", "LastName", "Department", "Salary"],
        &[
            &["E001", "Alice", "Smith", "HR", "70000"],
            &["E002", "Bob", "Johnson", "IT", "85000"],
            &["E003", "Charlie", "Brown", "Finance", "72000"],
            &["E004", "Diana", "Miller", "IT", "90000"],
            &["E005", "Eve", "Davis", "HR", "68000"],
        ],
    )
}

pub fn products() -> Result<TabularResult, DomainError> {
    table(
        &["ProductID", "ProductName", "Category", "Price", "Stock"],
        &[
            &["P001", "Laptop Pro", "Electronics", "1200", "50"],
            &["P002", "Mechanical Keyboard", "Peripherals", "80", "150"],
            &["P003", "Gaming Mouse", "Peripherals", "65", "200"],
            &["P004", "4K Monitor", "Electronics", "450", "30"],
            &["P005", "External SSD 1TB", "Storage", "95", "100"],
        ],
    )
}

pub fn orders() -> Result<TabularResult, DomainError> {
    table(
        &["OrderID", "CustomerName", "OrderDate", "TotalAmount"],
        &[
            &["ORD001", "John Doe", "2023-01-15", "250.75"],
            &["ORD002", "Jane Smith", "2023-01-16", "120.00"],
            &["ORD003", "Peter Jones", "2023-01-17", "500.50"],
            &["ORD004", "Alice Brown", "2023-01-18", "75.20"],
            &["ORD005", "Robert White", "2023-01-19", "300.00"],
        ],
    )
}

pub fn placeholder() -> Result<TabularResult, DomainError> {
    table(
        &["Status", "Message"],
        &[&["Success", "Query executed. Displaying generic dummy data."]],
    )
}

/// SplitMix64 step; gives stable pseudo-random values per row index.
fn mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn generated_row(index: usize) -> Vec<String> {
    let n = index + 1;
    let seed = mix(index as u64);
    let cents = seed % 100_000;
    let offset = (seed >> 20) % TIMESTAMP_SPREAD_SECS;
    let timestamp = DateTime::<Utc>::UNIX_EPOCH
        + TimeDelta::seconds(TIMESTAMP_ANCHOR_SECS - offset as i64);
    vec![
        format!("ITEM-{n:05}"),
        format!("Product {n}"),
        format!("{}.{:02}", cents / 100, cents % 100),
        format!("Description for item {n} - a very long text to test rendering efficiency."),
        timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]
}

/// `rows` generated rows with columns ID, Name, Value, Description and
/// Timestamp. The same index always yields the same row.
pub fn large_dataset(rows: usize) -> Result<TabularResult, DomainError> {
    TabularResult::new(
        ["ID", "Name", "Value", "Description", "Timestamp"]
            .iter()
            .map(|h| (*h).to_string())
            .collect(),
        (0..rows).map(generated_row).collect(),
    )
}

/// Schema shown in the Schema pane.
pub fn sample_schema() -> Vec<SchemaTable> {
    vec![
        SchemaTable::new(
            "Employees",
            &[
                ("EmployeeID", "VARCHAR"),
                ("FirstName", "VARCHAR"),
                ("LastName", "VARCHAR"),
                ("Department", "VARCHAR"),
                ("Salary", "NUMERIC"),
            ],
        ),
        SchemaTable::new(
            "Products",
            &[
                ("ProductID", "VARCHAR"),
                ("ProductName", "VARCHAR"),
                ("Category", "VARCHAR"),
                ("Price", "NUMERIC"),
                ("Stock", "INTEGER"),
            ],
        ),
        SchemaTable::new(
            "Orders",
            &[
                ("OrderID", "VARCHAR"),
                ("CustomerName", "VARCHAR"),
                ("OrderDate", "DATE"),
                ("TotalAmount", "NUMERIC"),
            ],
        ),
        SchemaTable::new(
            "Large_Data_Table",
            &[
                ("ID", "VARCHAR"),
                ("Name", "VARCHAR"),
                ("Value", "NUMERIC"),
                ("Description", "TEXT"),
                ("Timestamp", "DATETIME"),
            ],
        ),
    ]
}
