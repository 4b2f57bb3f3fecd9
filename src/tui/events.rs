use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::state::{TuiState, TABS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Reload,
}

/// Apply a key press to the state. `weeks` is the number of grid columns.
pub fn handle_key_event(key_event: KeyEvent, state: &mut TuiState, weeks: usize) -> Action {
    if key_event.kind != KeyEventKind::Press {
        return Action::None;
    }

    if state.show_help {
        if matches!(
            key_event.code,
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::F(1)
        ) {
            state.show_help = false;
        } else if key_event.code == KeyCode::Char('q') {
            return Action::Quit;
        }
        return Action::None;
    }

    let last = weeks.saturating_sub(1);
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char('r') => return Action::Reload,
        KeyCode::Char('h') | KeyCode::F(1) => state.show_help = true,
        KeyCode::Tab => state.tab_index = (state.tab_index + 1) % TABS.len(),
        KeyCode::BackTab => {
            state.tab_index = if state.tab_index == 0 {
                TABS.len() - 1
            } else {
                state.tab_index - 1
            };
        }
        KeyCode::Left | KeyCode::Char('j') => state.selected = state.selected.saturating_sub(1),
        KeyCode::Right | KeyCode::Char('k') => state.selected = (state.selected + 1).min(last),
        KeyCode::Home | KeyCode::Char('g') => state.selected = 0,
        KeyCode::End | KeyCode::Char('G') => state.selected = last,
        KeyCode::PageUp => state.selected = state.selected.saturating_sub(4),
        KeyCode::PageDown => state.selected = (state.selected + 4).min(last),
        _ => {}
    }
    state.sync_view_mode();
    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::ViewMode;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut state = TuiState::new(10);
        assert_eq!(state.selected, 9);

        handle_key_event(press(KeyCode::Right), &mut state, 10);
        assert_eq!(state.selected, 9);
        handle_key_event(press(KeyCode::PageUp), &mut state, 10);
        assert_eq!(state.selected, 5);
        handle_key_event(press(KeyCode::Home), &mut state, 10);
        handle_key_event(press(KeyCode::Left), &mut state, 10);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn tabs_cycle_both_ways() {
        let mut state = TuiState::new(3);
        handle_key_event(press(KeyCode::Tab), &mut state, 3);
        assert_eq!(state.view_mode, ViewMode::Calendar);
        handle_key_event(press(KeyCode::Tab), &mut state, 3);
        assert_eq!(state.view_mode, ViewMode::Overview);
        handle_key_event(press(KeyCode::BackTab), &mut state, 3);
        assert_eq!(state.view_mode, ViewMode::Calendar);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut state = TuiState::new(3);
        handle_key_event(press(KeyCode::Char('h')), &mut state, 3);
        assert!(state.show_help);
        assert_eq!(handle_key_event(press(KeyCode::Char('r')), &mut state, 3), Action::None);
        handle_key_event(press(KeyCode::Esc), &mut state, 3);
        assert!(!state.show_help);
        assert_eq!(handle_key_event(press(KeyCode::Char('r')), &mut state, 3), Action::Reload);
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut state, 3), Action::Quit);
    }
}
