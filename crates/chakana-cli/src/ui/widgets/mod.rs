pub(crate) use self::{board_display::*, status_display::*};

mod board_display;
mod status_display;

pub(crate) mod color {
    use ratatui::style::Color;

    // Board tones from the reference game: dark blue felt, pale dots,
    // faint free edges.
    pub const BOARD_BG: Color = Color::Rgb(8, 18, 33);
    pub const DOT: Color = Color::Rgb(229, 231, 235);
    pub const FREE_EDGE: Color = Color::Rgb(60, 72, 88);
    pub const CURSOR: Color = Color::Rgb(255, 213, 79);
}

/// Parses a `#rrggbb` display color.
pub(crate) fn parse_hex_color(hex: &str) -> Option<ratatui::style::Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some(ratatui::style::Color::Rgb(
        channel(0..2)?,
        channel(2..4)?,
        channel(4..6)?,
    ))
}
