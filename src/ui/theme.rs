//! Designer chrome: the TUI's own colors and metrics. The previewed theme
//! colors come from the palette, not from here.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Main canvas.
    pub const BG: Color = Color::Rgb(0x18, 0x1c, 0x22);
    /// Controls, status, picker.
    pub const ELEVATED: Color = Color::Rgb(0x16, 0x1a, 0x1f);
    /// Borders / separators.
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// Primary accent (focused field, selection bar).
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    /// Body text.
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    /// Secondary text.
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    /// Hints.
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
    /// Disabled-theme marker.
    pub const ERROR: Color = Color::Rgb(0xf0, 0x6c, 0x6c);
}

pub const HEADER_HEIGHT: u16 = 3;
pub const CONTROLS_HEIGHT: u16 = 5;
pub const SWATCHES_HEIGHT: u16 = 4;
pub const STATUS_HEIGHT: u16 = 1;
pub const SIDEBAR_WIDTH: u16 = 30;
/// Minimum preview body height.
pub const MIN_PREVIEW_LINES: u16 = 8;

/// Palette hex to a terminal color; the chrome background is the defensive
/// floor for hand-edited documents.
pub fn palette_color(hex: &str) -> Color {
    match tintsmith::Rgb::parse(hex) {
        Some(rgb) => Color::Rgb(rgb.r, rgb.g, rgb.b),
        None => colors::BG,
    }
}
