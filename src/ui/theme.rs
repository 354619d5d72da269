use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const HEADER_BG: Color = Color::Rgb(25, 25, 38);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const DOCK_BG: Color = Color::Rgb(30, 30, 44);
pub const DOCK_ACTIVE_BG: Color = Color::Rgb(55, 55, 80);
pub const CARD_BORDER: Color = Color::Rgb(60, 60, 80);
pub const BADGE_BG: Color = Color::Rgb(38, 38, 52);
pub const TITLE_FG: Color = Color::White;
pub const TEXT_FG: Color = Color::Rgb(220, 220, 230);
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const LINK_FG: Color = Color::Cyan;
pub const STAR_FG: Color = Color::Yellow;
pub const KEY_FG: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::Rgb(55, 55, 75);
