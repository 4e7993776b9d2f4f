//! Port implementations: the simulated executor, JSON persistence, the
//! system clipboard, CSV files and configuration loading.

pub(crate) use sqlpad_app as app;
pub(crate) use sqlpad_domain as domain;

pub mod adapters;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod export;
