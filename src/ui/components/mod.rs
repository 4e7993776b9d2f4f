pub mod atoms;
pub mod editor;
pub mod footer;
pub mod help_overlay;
pub mod history;
pub mod layout;
pub mod list_pane;
pub mod molecules;
pub mod overlay;
pub mod predefined;
pub mod result;
pub mod save_modal;
pub mod saved;
pub mod schema_viewer;
pub mod scroll_indicator;
pub mod status_message;
pub mod text_utils;
