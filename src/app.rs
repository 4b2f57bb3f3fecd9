use crate::cache::Cache;
use crate::config::Settings;
use crate::github::GithubClient;
use crate::model::{CalendarSource, StreakResult};
use crate::notify::StreakNotifier;
use crate::source::{resolve_calendar, SourceOptions};
use crate::streak::{calculate_streak, streak_message};
use chrono::Utc;
use tracing::{info, warn};

/// Top-level controller shared by every command.
pub struct App {
    settings: Settings,
    client: GithubClient,
    cache: Option<Cache>,
    notifier: StreakNotifier,
}

impl App {
    pub fn new(settings: Settings) -> crate::error::Result<Self> {
        let client = GithubClient::new(&settings)?;

        // A broken cache only costs extra API calls
        let cache = match Cache::new(&settings.cache_dir) {
            Ok(cache) => Some(cache),
            Err(e) => {
                warn!(dir = %settings.cache_dir.display(), error = %e, "cache disabled");
                None
            }
        };

        Ok(Self {
            settings,
            client,
            cache,
            notifier: StreakNotifier::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn client(&self) -> &GithubClient {
        &self.client
    }

    pub fn cache_mut(&mut self) -> Option<&mut Cache> {
        self.cache.as_mut()
    }

    pub fn load_calendar(&mut self, show_progress: bool) -> CalendarSource {
        let opts = SourceOptions {
            username: &self.settings.username,
            today: self.settings.today,
            seed: self.settings.seed,
            offline: self.settings.offline,
            max_age: self.settings.max_age,
            calendar_file: self.settings.calendar_file.as_deref(),
            now: Utc::now(),
            show_progress,
        };
        resolve_calendar(&opts, &self.client, self.cache.as_mut())
    }

    /// Load the calendar and derive the streak. Only the first load in a
    /// process is announced.
    pub fn load_streak(&mut self, show_progress: bool) -> StreakLoad {
        let source = self.load_calendar(show_progress);
        let streak = calculate_streak(source.calendar(), self.settings.today);
        let username = &self.settings.username;
        let announced = self.notifier.notify(streak.current_streak, |current| {
            info!(username = %username, current, "{}", streak_message(current));
        });
        StreakLoad {
            source,
            streak,
            announced,
        }
    }
}

pub struct StreakLoad {
    pub source: CalendarSource,
    pub streak: StreakResult,
    /// True only for the load that fired the one-time notice.
    pub announced: bool,
}
