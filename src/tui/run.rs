use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Terminal;
use tracing::debug;

use super::events::{handle_key_event, Action};
use super::state::{Dashboard, TuiState, ViewMode, TABS};
use super::views::{draw_calendar_view, draw_help_overlay, draw_overview};
use crate::app::App;
use crate::streak::streak_message;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run(app: &mut App) -> anyhow::Result<()> {
    // Fetch before taking over the terminal so the spinner stays visible
    let load = app.load_streak(true);
    let announced = load.announced;
    let mut data = Dashboard::new(&app.settings().username, app.settings().today, load);

    let mut state = TuiState::new(data.weeks());
    if announced {
        state.set_status(streak_message(data.streak.current_streak));
    }

    let _restore = enter_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, app, &mut data, &mut state);
    terminal.show_cursor()?;
    result
}

/// Runs its closure when dropped, whichever way the enclosing scope exits.
struct OnDrop<F: FnMut()>(F);

impl<F: FnMut()> Drop for OnDrop<F> {
    fn drop(&mut self) {
        (self.0)()
    }
}

fn enter_terminal() -> io::Result<OnDrop<fn()>> {
    enable_raw_mode()?;
    let restore = OnDrop(restore_terminal as fn());
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(restore)
}

fn restore_terminal() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn event_loop(
    terminal: &mut Term,
    app: &mut App,
    data: &mut Dashboard,
    state: &mut TuiState,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.size();

            if state.show_help {
                draw_help_overlay(f, size);
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(size);

            let tabs = Tabs::new(TABS.to_vec())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("ghstreak | {}", data.username)),
                )
                .highlight_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .select(state.tab_index);
            f.render_widget(tabs, chunks[0]);

            match state.view_mode {
                ViewMode::Overview => draw_overview(f, chunks[1], data, state),
                ViewMode::Calendar => draw_calendar_view(f, chunks[1], data, state),
            }
        })?;

        if !poll(Duration::from_millis(200))? {
            continue;
        }

        if let Event::Key(key_event) = read()? {
            match handle_key_event(key_event, state, data.weeks()) {
                Action::Quit => break,
                Action::Reload => {
                    debug!("reloading calendar");
                    let load = app.load_streak(false);
                    let username = data.username.clone();
                    *data = Dashboard::new(&username, data.today, load);
                    state.selected = state.selected.min(data.weeks().saturating_sub(1));
                    state.set_status(format!("Reloaded ({})", data.source.kind()));
                }
                Action::None => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup_that_fails(restored: &Cell<bool>) -> io::Result<()> {
        let _restore = OnDrop(|| restored.set(true));
        Err(io::Error::new(io::ErrorKind::Other, "no terminal"))
    }

    #[test]
    fn restore_runs_when_setup_bails_early() {
        let restored = Cell::new(false);
        assert!(setup_that_fails(&restored).is_err());
        assert!(restored.get());
    }

    #[test]
    fn restore_runs_once_on_normal_exit() {
        let calls = Cell::new(0);
        {
            let _restore = OnDrop(|| calls.set(calls.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }
}
