use crate::ui::dock::DockItem;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Open(DockItem),
    FocusLeft,
    FocusRight,
    Activate,
    ScrollUp,
    ScrollDown,
    Help,
    ClosePopup,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('1') | KeyCode::Char('p') => Action::Open(DockItem::Projects),
        KeyCode::Char('2') | KeyCode::Char('s') => Action::Open(DockItem::Skills),
        KeyCode::Char('g') => Action::Open(DockItem::GitHub),
        KeyCode::Char('e') => Action::Open(DockItem::Email),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Action::FocusLeft,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Action::FocusRight,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::ClosePopup,
        _ => Action::None,
    }
}
