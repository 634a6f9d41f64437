use ratatui::style::Color;

/// Spending went up.
pub const TREND_ALERT: Color = Color::Rgb(0xef, 0x44, 0x44);
/// Spending went down.
pub const TREND_POSITIVE: Color = Color::Rgb(0x10, 0xb9, 0x81);
pub const SURFACE_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const SURFACE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SURFACE_MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PROGRESS_FILL: Color = Color::Rgb(0x22, 0xc5, 0x5e);

/// `#RRGGBB` form of an RGB color; `None` for palette colors.
pub fn hex(color: Color) -> Option<String> {
    match color {
        Color::Rgb(r, g, b) => Some(format!("#{r:02X}{g:02X}{b:02X}")),
        _ => None,
    }
}
