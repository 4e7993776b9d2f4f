pub use sqlpad_app as app;
pub use sqlpad_domain as domain;
pub use sqlpad_infra as infra;
pub use sqlpad_ui as ui;

pub mod error;
pub mod logging;
