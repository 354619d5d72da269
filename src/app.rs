use crate::config::Config;
use crate::event::AppEvent;
use crate::profile;
use crate::state::{Tab, ViewState};
use crate::ui::{
    dock::{Dock, DockItem},
    focus_cards::FocusCards,
    header::ProfileHeader,
    help_panel::HelpPanel,
    input::{self, Action},
    projects_panel::ProjectsPanel,
    skills_panel::SkillsPanel,
    status_bar::StatusBar,
    theme,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use tracing::debug;

pub struct App {
    pub state: ViewState,
    pub profile_url: String,
    pub dock_focus: DockItem,
    pub link: Option<String>,
    pub project_scroll: usize,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            state: ViewState::default(),
            profile_url: config.profile_url(),
            dock_focus: DockItem::Projects,
            link: None,
            project_scroll: 0,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key);
                self.handle_action(action);
            }
            AppEvent::Resize => {}
            AppEvent::Reveal => self.state.reveal(),
            AppEvent::ProjectsLoaded(cards) => {
                debug!(count = cards.len(), "projects loaded");
                self.project_scroll = 0;
                self.state.set_projects(cards);
            }
            AppEvent::FetchFinished => self.state.finish_loading(),
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Open(item) => {
                self.dock_focus = item;
                self.activate(item);
            }
            Action::FocusLeft => self.dock_focus = self.dock_focus.prev(),
            Action::FocusRight => self.dock_focus = self.dock_focus.next(),
            Action::Activate => self.activate(self.dock_focus),
            Action::ScrollDown if self.state.active_tab == Tab::Projects => {
                if self.project_scroll + 1 < self.state.projects.len() {
                    self.project_scroll += 1;
                }
            }
            Action::ScrollUp if self.state.active_tab == Tab::Projects => {
                self.project_scroll = self.project_scroll.saturating_sub(1);
            }
            Action::ScrollDown | Action::ScrollUp => {}
            Action::Help => self.show_help = !self.show_help,
            Action::ClosePopup => {
                self.show_help = false;
                self.link = None;
            }
            Action::None => {}
        }
    }

    /// Dock click: tab items switch tabs, link items publish their target.
    pub fn activate(&mut self, item: DockItem) {
        match item.tab() {
            Some(tab) => {
                self.state.select_tab(tab);
                self.link = None;
            }
            None => {
                let url = match item {
                    DockItem::Email => profile::mailto(),
                    _ => self.profile_url.clone(),
                };
                debug!(item = item.label(), %url, "link activated");
                self.link = Some(url);
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(5),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        frame.render_widget(ProfileHeader, chunks[0]);
        frame.render_widget(
            FocusCards {
                areas: profile::FOCUS_AREAS,
            },
            chunks[1],
        );

        let tab = self.state.active_tab;
        let block = Block::default()
            .title(format!(" {} ", tab.label()))
            .title_style(Style::default().fg(theme::ACCENT))
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme::SEPARATOR));
        let content = block.inner(chunks[2]);
        frame.render_widget(block, chunks[2]);

        match tab {
            Tab::Projects => frame.render_widget(
                ProjectsPanel {
                    projects: &self.state.projects,
                    loading: self.state.loading,
                    scroll: self.project_scroll,
                },
                content,
            ),
            Tab::Skills => frame.render_widget(
                SkillsPanel {
                    categories: profile::SKILLS,
                },
                content,
            ),
        }

        frame.render_widget(
            Dock {
                active_tab: tab,
                focused: self.dock_focus,
            },
            chunks[3],
        );

        frame.render_widget(
            StatusBar {
                tooltip: self.dock_focus.label(),
                link: self.link.as_deref(),
                project_count: self.state.projects.len(),
                loading: self.state.loading,
            },
            chunks[4],
        );

        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }

        if !self.state.revealed {
            frame
                .buffer_mut()
                .set_style(size, Style::default().add_modifier(Modifier::DIM));
        }
    }
}
