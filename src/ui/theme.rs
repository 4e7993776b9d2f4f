use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Borders
    pub const FOCUS_BORDER: Color = Color::Cyan;
    pub const UNFOCUS_BORDER: Color = Color::DarkGray;
    pub const HIGHLIGHT_BORDER: Color = Color::Green;

    // Text
    pub const TEXT_ACCENT: Color = Color::Yellow;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;

    // Key chips in the help overlay
    pub const KEY_CHIP_BG: Color = Color::Rgb(0x45, 0x47, 0x5a);
    pub const KEY_CHIP_FG: Color = Color::White;

    // Modal/Overlay backgrounds
    pub const MODAL_BG: Color = Palette::DUCKBONES;
    pub const MODAL_BORDER: Color = Color::Cyan;
    pub const SCRIM: Color = Color::Rgb(0x0b, 0x0d, 0x14);

    // Editor
    pub const EDITOR_CURRENT_LINE_BG: Color = Color::Rgb(0x23, 0x26, 0x34);

    // Table header/selection
    pub const TABLE_HEADER_BG: Color = Color::Rgb(0x2a, 0x2a, 0x2e);
    pub const COLUMN_HIGHLIGHT_BG: Color = Color::Rgb(0x3a, 0x3d, 0x52);
    pub const LIST_SELECTED_FG: Color = Color::Yellow;

    // Result status
    pub const STATUS_SUCCESS: Color = Color::Green;
    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_WARNING: Color = Color::Yellow;
    pub const STATUS_LOADING: Color = Color::Cyan;
}
