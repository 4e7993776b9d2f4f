pub mod error;
pub mod history;
pub mod predefined;
pub mod query_result;
pub mod saved_query;
pub mod schema;
pub mod sort;
pub mod tabular;

pub use error::DomainError;
pub use history::HistoryEntry;
pub use predefined::{PREDEFINED_QUERIES, PredefinedQuery};
pub use query_result::{ResultBody, ResultEnvelope, ResultStatus};
pub use saved_query::{SavedQuery, SavedQueryId};
pub use schema::{SchemaColumn, SchemaTable};
pub use sort::{SortDirection, SortDirective};
pub use tabular::TabularResult;
