//! Key bindings

use crossterm::event::{KeyCode, KeyModifiers};

/// Key mapping for the browse view (no modifiers)
pub fn key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Left),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::Right),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchPanel),
        KeyCode::Char('/') => Some(Action::Search),
        KeyCode::Char('f') => Some(Action::ToggleFilter),
        KeyCode::Char('m') => Some(Action::LoadMore),
        KeyCode::Char('M') => Some(Action::ShowAll),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char(':') => Some(Action::Command),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Key mapping with modifiers (for Ctrl combinations)
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('u') => Some(Action::ClearSearch),
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        }
    } else {
        key_to_action(key)
    }
}

/// Actions that can be taken in the browse view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Left,
    Right,
    Top,
    Bottom,
    SwitchPanel,

    // Selection
    Select,
    Back,

    // Search and filters
    Search,
    ClearSearch,
    ToggleFilter,

    // Pagination
    LoadMore,
    ShowAll,

    // Appearance
    ToggleTheme,

    // Modes
    Command,
    Help,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j_maps_to_down() {
        assert_eq!(key_to_action(KeyCode::Char('j')), Some(Action::Down));
        assert_eq!(key_to_action(KeyCode::Down), Some(Action::Down));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(key_to_action(KeyCode::Char('x')), None);
    }

    #[test]
    fn m_loads_more_and_shift_m_shows_all() {
        assert_eq!(key_to_action(KeyCode::Char('m')), Some(Action::LoadMore));
        assert_eq!(key_to_action(KeyCode::Char('M')), Some(Action::ShowAll));
    }

    #[test]
    fn f_toggles_filter() {
        assert_eq!(key_to_action(KeyCode::Char('f')), Some(Action::ToggleFilter));
    }

    #[test]
    fn ctrl_u_clears_search() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('u'), KeyModifiers::CONTROL),
            Some(Action::ClearSearch)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn shift_letters_use_plain_mapping() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(Action::Bottom)
        );
    }
}
