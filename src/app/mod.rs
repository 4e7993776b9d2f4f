//! Application core: session state, result pipeline, reducer and effects.
//!
//! Everything here is terminal-agnostic. The `ui` crate renders `AppState`
//! and turns key events into `Action`s; the `infra` crate implements `ports`.

pub use sqlpad_domain as domain;

pub mod action;
pub mod effect;
pub mod effect_runner;
pub mod export;
pub mod feedback;
pub mod focused_pane;
pub mod input_mode;
pub mod keybindings;
pub mod observer;
pub mod pagination;
pub mod ports;
pub mod query_history;
pub mod reducer;
pub mod reducers;
pub mod render_schedule;
pub mod result_processor;
pub mod saved_queries;
pub mod schema_tree;
pub mod session;
pub mod state;
pub mod table_view;
pub mod ui_state;
pub mod viewport;
