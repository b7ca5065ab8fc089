use ratatui::style::Color;

/// Gruvbox-material flavored palette for the demo UI.
pub struct Palette;

impl Palette {
    pub const BG: Color = Color::Rgb(29, 32, 33);
    pub const PANEL: Color = Color::Rgb(50, 48, 47);
    pub const PANEL_ALT: Color = Color::Rgb(40, 40, 40);
    pub const FG: Color = Color::Rgb(212, 190, 152);
    pub const DIM: Color = Color::Rgb(146, 131, 116);
    pub const ACCENT: Color = Color::Rgb(216, 166, 87);
    pub const BOUNCE: Color = Color::Rgb(169, 182, 101);
    pub const STATUS_BG: Color = Color::Rgb(60, 56, 54);
}
