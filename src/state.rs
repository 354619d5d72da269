use crate::github::project::ProjectCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Projects,
    Skills,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Projects => "Projects",
            Tab::Skills => "Skills",
        }
    }
}

/// Transient state for one run of the shell. Nothing here outlives the process.
#[derive(Debug, Default)]
pub struct ViewState {
    pub revealed: bool,
    pub active_tab: Tab,
    pub loading: bool,
    pub projects: Vec<ProjectCard>,
}

impl ViewState {
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn set_projects(&mut self, projects: Vec<ProjectCard>) {
        self.projects = projects;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}
