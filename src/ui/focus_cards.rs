use crate::profile::FocusArea;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub struct FocusCards<'a> {
    pub areas: &'a [FocusArea],
}

impl<'a> Widget for FocusCards<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if self.areas.is_empty() || area.height < 3 {
            return;
        }

        let constraints = vec![Constraint::Ratio(1, self.areas.len() as u32); self.areas.len()];
        let columns = Layout::horizontal(constraints).spacing(1).split(area);

        for (focus, cell) in self.areas.iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::CARD_BORDER));
            let inner = block.inner(*cell);
            block.render(*cell, buf);

            let lines = [
                Line::from(Span::styled(focus.icon, Style::default().fg(theme::ACCENT))),
                Line::from(Span::styled(
                    super::truncate_with_ellipsis(focus.title, inner.width as usize),
                    Style::default()
                        .fg(theme::TITLE_FG)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    super::truncate_with_ellipsis(focus.blurb, inner.width as usize),
                    Style::default().fg(theme::DIM_TEXT),
                )),
            ];
            for (i, line) in lines.iter().enumerate() {
                if i >= inner.height as usize {
                    break;
                }
                let x = super::centered_x(inner, line.width());
                buf.set_line(x, inner.y + i as u16, line, inner.right().saturating_sub(x));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::FOCUS_AREAS;
    use crate::ui::buffer_text;

    #[test]
    fn renders_each_card_title() {
        let area = Rect::new(0, 0, 90, 5);
        let mut buf = Buf::empty(area);
        FocusCards { areas: FOCUS_AREAS }.render(area, &mut buf);
        let text = buffer_text(&buf).join("\n");
        assert!(text.contains("Reverse Engineering"));
        assert!(text.contains("Networking"));
        assert!(text.contains("Artificial Intelligence"));
        assert!(text.contains("Protocol & traffic analysis"));
    }

    #[test]
    fn too_short_area_draws_nothing() {
        let area = Rect::new(0, 0, 90, 2);
        let mut buf = Buf::empty(area);
        FocusCards { areas: FOCUS_AREAS }.render(area, &mut buf);
        assert!(buffer_text(&buf).iter().all(|row| row.trim().is_empty()));
    }
}
