use crate::github::project::ProjectCard;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Reveal,
    ProjectsLoaded(Vec<ProjectCard>),
    FetchFinished,
}
