use crate::profile;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct ProfileHeader;

impl Widget for ProfileHeader {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        buf.set_style(area, bg);

        let lines = [
            Line::from(vec![
                Span::styled("\u{25c9} ", bg.fg(theme::ACCENT)),
                Span::styled(profile::NAME, bg.fg(theme::TITLE_FG).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(profile::HEADLINE, bg.fg(theme::TEXT_FG))),
            Line::from(Span::styled(
                format!("\u{2316} {}", profile::LOCATION),
                bg.fg(theme::DIM_TEXT),
            )),
            Line::from(Span::styled(profile::AVATAR_URL, bg.fg(theme::SEPARATOR))),
        ];

        // Leave one row of padding above when there is room for it.
        let top = if area.height as usize > lines.len() { 1 } else { 0 };
        for (i, line) in lines.iter().enumerate() {
            let y = area.y + top + i as u16;
            if y >= area.bottom() {
                break;
            }
            let x = super::centered_x(area, line.width());
            buf.set_line(x, y, line, area.right().saturating_sub(x));
        }
    }
}
