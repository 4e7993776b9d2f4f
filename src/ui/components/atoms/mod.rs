mod key_chip;
mod panel_border;
mod spinner;

pub use key_chip::{key_chip, key_text};
pub use panel_border::{panel_block, panel_block_highlight};
pub use spinner::spinner_char;
