use crate::github::project::ProjectCard;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub const LOADING_TEXT: &str = "Loading projects from GitHub...";

fn badge_style() -> Style {
    Style::default().fg(theme::TEXT_FG).bg(theme::BADGE_BG)
}

pub fn badges<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<Span<'static>> {
    labels
        .into_iter()
        .map(|label| Span::styled(format!("[{label}]"), badge_style()))
        .collect()
}

pub struct ProjectsPanel<'a> {
    pub projects: &'a [ProjectCard],
    pub loading: bool,
    pub scroll: usize,
}

impl<'a> ProjectsPanel<'a> {
    /// Every row of one card: title, wrapped badges, wrapped description.
    fn card_lines(card: &ProjectCard, width: usize) -> Vec<Line<'static>> {
        let mut title = Line::from(Span::styled(
            card.title.clone(),
            Style::default()
                .fg(theme::TITLE_FG)
                .add_modifier(Modifier::BOLD),
        ));
        if !card.url.is_empty() {
            title.spans.push(Span::styled(
                format!("  \u{2197} {}", card.url),
                Style::default().fg(theme::LINK_FG),
            ));
        }

        let mut items = badges(card.tech.iter().map(String::as_str));
        if card.stars > 0 {
            items.push(Span::styled(
                format!("[\u{2605} {}]", card.stars),
                badge_style().fg(theme::STAR_FG),
            ));
        }

        let mut lines = vec![title];
        lines.extend(super::wrap_spans(items, width));

        let description = card.description.as_deref().unwrap_or("");
        lines.extend(super::wrap_words(description, width).into_iter().map(|row| {
            Line::from(Span::styled(row, Style::default().fg(theme::DIM_TEXT)))
        }));
        lines
    }
}

impl<'a> Widget for ProjectsPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if area.height == 0 || area.width < 4 {
            return;
        }

        if self.loading {
            let x = super::centered_x(area, LOADING_TEXT.len());
            let y = area.y + area.height.min(3) / 2;
            buf.set_line(
                x,
                y,
                &Line::from(Span::styled(LOADING_TEXT, Style::default().fg(theme::DIM_TEXT))),
                area.right().saturating_sub(x),
            );
            return;
        }

        let inner_w = area.width.saturating_sub(2);
        let mut y = area.y;
        for card in self.projects.iter().skip(self.scroll) {
            for line in Self::card_lines(card, inner_w as usize) {
                if y >= area.bottom() {
                    return;
                }
                buf.set_line(area.x + 1, y, &line, inner_w);
                y += 1;
            }
            // gap between cards
            y += 1;
        }
    }
}
