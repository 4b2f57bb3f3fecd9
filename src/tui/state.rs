use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::app::StreakLoad;
use crate::calendar::CalendarGrid;
use crate::model::{CalendarSource, StreakResult};

/// Everything the views render, rebuilt on each reload.
pub struct Dashboard {
    pub username: String,
    pub today: NaiveDate,
    pub source: CalendarSource,
    pub streak: StreakResult,
    pub grid: CalendarGrid,
}

impl Dashboard {
    pub fn new(username: &str, today: NaiveDate, load: StreakLoad) -> Self {
        let grid = CalendarGrid::build(load.source.calendar());
        Self {
            username: username.to_string(),
            today,
            source: load.source,
            streak: load.streak,
            grid,
        }
    }

    pub fn weeks(&self) -> usize {
        self.grid.columns.len()
    }
}

pub struct TuiState {
    pub selected: usize,
    pub view_mode: ViewMode,
    pub tab_index: usize,
    pub show_help: bool,
    pub status_message: Option<(String, Instant)>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ViewMode {
    Overview,
    Calendar,
}

pub const TABS: [&str; 2] = ["Overview", "Calendar"];

const STATUS_TTL: Duration = Duration::from_secs(4);

impl TuiState {
    /// Starts on the most recent week.
    pub fn new(weeks: usize) -> Self {
        Self {
            selected: weeks.saturating_sub(1),
            ..Self::default()
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn current_status(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, at)| at.elapsed() < STATUS_TTL)
            .map(|(msg, _)| msg.as_str())
    }

    pub fn sync_view_mode(&mut self) {
        self.view_mode = match self.tab_index {
            1 => ViewMode::Calendar,
            _ => ViewMode::Overview,
        };
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            selected: 0,
            view_mode: ViewMode::Overview,
            tab_index: 0,
            show_help: false,
            status_message: None,
        }
    }
}
