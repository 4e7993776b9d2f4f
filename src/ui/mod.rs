//! Terminal front end: ratatui components that draw `AppState`, the
//! crossterm event loop and the key handler that maps input to `Action`s.

pub(crate) use sqlpad_app as app;
pub(crate) use sqlpad_domain as domain;

pub mod adapters;
pub mod components;
pub mod event;
pub mod theme;
pub mod tui;
