use crate::profile::SkillCategory;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct SkillsPanel<'a> {
    pub categories: &'a [SkillCategory],
}

impl<'a> Widget for SkillsPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let mut y = area.y;
        for (name, skills) in self.categories {
            if y >= area.bottom() {
                break;
            }
            buf.set_line(
                area.x + 1,
                y,
                &Line::from(Span::styled(
                    *name,
                    Style::default()
                        .fg(theme::TITLE_FG)
                        .add_modifier(Modifier::BOLD),
                )),
                area.width.saturating_sub(1),
            );
            y += 1;

            let width = area.width.saturating_sub(2);
            let items = super::projects_panel::badges(skills.iter().copied());
            for line in super::wrap_spans(items, width as usize) {
                if y >= area.bottom() {
                    return;
                }
                buf.set_line(area.x + 1, y, &line, width);
                y += 1;
            }
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::SKILLS;
    use crate::ui::buffer_text;

    #[test]
    fn lists_categories_in_order() {
        let area = Rect::new(0, 0, 70, 12);
        let mut buf = Buf::empty(area);
        SkillsPanel { categories: SKILLS }.render(area, &mut buf);
        let rows = buffer_text(&buf);

        assert!(rows[0].contains("Reverse Engineering"));
        assert!(rows[1].contains("[IDA Pro]"));
        assert!(rows[3].contains("Networking"));
        assert!(rows[4].contains("[AS56971]"));
        assert!(rows[6].contains("AI/ML"));
        assert!(rows[9].contains("Languages"));
    }

    #[test]
    fn narrow_panel_wraps_badges() {
        let area = Rect::new(0, 0, 20, 30);
        let mut buf = Buf::empty(area);
        SkillsPanel { categories: SKILLS }.render(area, &mut buf);
        let text = buffer_text(&buf).join("\n");

        for (_, skills) in SKILLS {
            for skill in *skills {
                assert!(text.contains(&format!("[{skill}]")), "missing {skill}");
            }
        }
    }
}
