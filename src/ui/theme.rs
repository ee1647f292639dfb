use ratatui::style::Color;

pub const TITLE: Color = Color::Rgb(0xf7, 0x93, 0x1a);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SELECTED: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const FOCUS_ROW: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
