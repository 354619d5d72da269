use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub struct StatusBar<'a> {
    pub tooltip: &'a str,
    pub link: Option<&'a str>,
    pub project_count: usize,
    pub loading: bool,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        buf.set_style(area, bg);

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.tooltip),
                bg.fg(theme::ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("\u{2502}", bg.fg(theme::SEPARATOR)),
        ];

        if let Some(link) = self.link {
            spans.push(Span::styled(format!(" {link} "), bg.fg(theme::LINK_FG)));
        } else if self.loading {
            spans.push(Span::styled(" fetching\u{2026} ", bg.fg(theme::DIM_TEXT)));
        } else {
            spans.push(Span::styled(
                format!(" {} projects ", self.project_count),
                bg.fg(theme::DIM_TEXT),
            ));
        }

        let left = Line::from(spans);
        buf.set_line(area.x, area.y, &left, area.width);

        let right = "? help  q quit ";
        let right_w = UnicodeWidthStr::width(right);
        let area_w = area.width as usize;
        if area_w > right_w + left.width() {
            let right_x = area.x + (area_w - right_w) as u16;
            buf.set_line(
                right_x,
                area.y,
                &Line::from(Span::styled(right, bg.fg(theme::DIM_TEXT))),
                right_w as u16,
            );
        }
    }
}
