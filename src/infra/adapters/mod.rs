pub mod json_session_store;
pub mod simulated_executor;

pub use json_session_store::JsonSessionStore;
pub use simulated_executor::{CatalogTable, SimulatedExecutor};
