use crate::state::Tab;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockItem {
    Projects,
    Skills,
    GitHub,
    Email,
}

impl DockItem {
    pub const ALL: &[DockItem] = &[
        DockItem::Projects,
        DockItem::Skills,
        DockItem::GitHub,
        DockItem::Email,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DockItem::Projects => "Projects",
            DockItem::Skills => "Skills",
            DockItem::GitHub => "GitHub",
            DockItem::Email => "Email",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DockItem::Projects => "\u{2302}",
            DockItem::Skills => "\u{2726}",
            DockItem::GitHub => "\u{2387}",
            DockItem::Email => "\u{2709}",
        }
    }

    /// The tab this item switches to, if it is a tab item rather than a link.
    pub fn tab(self) -> Option<Tab> {
        match self {
            DockItem::Projects => Some(Tab::Projects),
            DockItem::Skills => Some(Tab::Skills),
            DockItem::GitHub | DockItem::Email => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            DockItem::Projects => 0,
            DockItem::Skills => 1,
            DockItem::GitHub => 2,
            DockItem::Email => 3,
        }
    }

    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}

pub struct Dock {
    pub active_tab: Tab,
    pub focused: DockItem,
}

impl Widget for Dock {
    fn render(self, area: Rect, buf: &mut Buf) {
        if area.height == 0 {
            return;
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, item) in DockItem::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", Style::default().bg(theme::DOCK_BG)));
            }
            let is_active = item.tab() == Some(self.active_tab);
            let mut style = Style::default().fg(theme::TEXT_FG).bg(theme::DOCK_BG);
            if is_active {
                style = style.bg(theme::DOCK_ACTIVE_BG).add_modifier(Modifier::BOLD);
            }
            if *item == self.focused {
                style = style.fg(theme::ACCENT).add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(format!(" {} {} ", item.icon(), item.label()), style));
        }

        let line = Line::from(spans);
        let width: usize = line
            .spans
            .iter()
            .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
            .sum();
        let x = super::centered_x(area, width);
        let y = area.y + area.height.saturating_sub(1) / 2;
        buf.set_line(x, y, &line, area.width.saturating_sub(x - area.x));
    }
}
