use crate::cache::Cache;
use crate::error::Result;
use crate::fallback::simulate_calendar;
use crate::github::graphql::parse_calendar_value;
use crate::github::GithubClient;
use crate::model::{CalendarSource, ContributionCalendar};
use chrono::{DateTime, NaiveDate, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Anything that can produce a live calendar for a user.
pub trait CalendarFetch {
    fn fetch_calendar(&self, username: &str) -> Result<ContributionCalendar>;
}

impl CalendarFetch for GithubClient {
    fn fetch_calendar(&self, username: &str) -> Result<ContributionCalendar> {
        GithubClient::fetch_calendar(self, username)
    }
}

#[derive(Debug, Clone)]
pub struct SourceOptions<'a> {
    pub username: &'a str,
    pub today: NaiveDate,
    pub seed: u64,
    pub offline: bool,
    pub max_age: Duration,
    pub calendar_file: Option<&'a Path>,
    pub now: DateTime<Utc>,
    pub show_progress: bool,
}

/// Pick the calendar to display. Never fails: every error path ends in a
/// simulated calendar tagged as fallback.
pub fn resolve_calendar(
    opts: &SourceOptions<'_>,
    fetcher: &dyn CalendarFetch,
    cache: Option<&mut Cache>,
) -> CalendarSource {
    match try_resolve(opts, fetcher, cache) {
        Ok(source) => source,
        Err(reason) => {
            warn!(username = opts.username, %reason, "using simulated calendar");
            CalendarSource::Fallback {
                calendar: simulate_calendar(opts.today, opts.seed),
                reason,
            }
        }
    }
}

fn try_resolve(
    opts: &SourceOptions<'_>,
    fetcher: &dyn CalendarFetch,
    mut cache: Option<&mut Cache>,
) -> std::result::Result<CalendarSource, String> {
    if let Some(path) = opts.calendar_file {
        return load_calendar_file(path)
            .map(CalendarSource::Live)
            .map_err(|e| format!("failed to read {}: {e}", path.display()));
    }

    let cached = cache
        .as_deref()
        .and_then(|c| match c.load_calendar(opts.username) {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable cache entry");
                None
            }
        });

    if let Some((fetched_at, calendar)) = &cached {
        let age = (opts.now - *fetched_at).to_std().unwrap_or_default();
        if opts.offline || age <= opts.max_age {
            debug!(username = opts.username, age_secs = age.as_secs(), "using cached calendar");
            return Ok(CalendarSource::Cached {
                calendar: calendar.clone(),
                fetched_at: *fetched_at,
            });
        }
    }

    if opts.offline {
        return Err("offline and no cached calendar".to_string());
    }

    let calendar = fetch_with_progress(opts, fetcher).map_err(|e| e.to_string())?;
    info!(
        username = opts.username,
        total = calendar.total_contributions,
        first = ?calendar.first_date(),
        last = ?calendar.last_date(),
        "fetched live calendar"
    );

    if let Some(cache) = cache.as_deref_mut() {
        if let Err(e) = cache.store_calendar(opts.username, &calendar, opts.now) {
            warn!(error = %e, "failed to cache calendar");
        }
    }

    Ok(CalendarSource::Live(calendar))
}

fn fetch_with_progress(
    opts: &SourceOptions<'_>,
    fetcher: &dyn CalendarFetch,
) -> Result<ContributionCalendar> {
    if !opts.show_progress {
        return fetcher.fetch_calendar(opts.username);
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Fetching contributions for {}...", opts.username));
    let result = fetcher.fetch_calendar(opts.username);
    pb.finish_and_clear();
    result
}

/// A saved GraphQL response, or a calendar previously written by `calendar --json`
/// or the cache.
pub fn load_calendar_file(path: &Path) -> Result<ContributionCalendar> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    if value.get("data").is_some() || value.get("errors").is_some() {
        parse_calendar_value(value)
    } else {
        Ok(serde_json::from_value(value)?)
    }
}
