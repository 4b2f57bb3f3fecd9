use crate::app::App;
use crate::error::{Result, StreakError};
use crate::model::{ContributionCalendar, SCHEMA_VERSION};
use chrono::{DateTime, TimeZone, Utc};
use console::style;
use rusqlite::{params, Connection};
use std::path::Path;

/// Last fetched calendar per user, so repeated runs don't hit the API.
pub struct Cache {
    conn: Connection,
}

impl Cache {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref();
        std::fs::create_dir_all(cache_dir)?;
        let conn = Connection::open(cache_dir.join("cache.db"))?;
        let mut cache = Self { conn };
        cache.initialize()?;
        Ok(cache)
    }

    pub fn in_memory() -> Result<Self> {
        let mut cache = Self {
            conn: Connection::open_in_memory()?,
        };
        cache.initialize()?;
        Ok(cache)
    }

    fn initialize(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS calendars (
                username TEXT PRIMARY KEY,
                fetched_at INTEGER NOT NULL,
                total_contributions INTEGER NOT NULL,
                payload TEXT NOT NULL
            );
            ",
        )?;
        self.check_schema_version()?;
        Ok(())
    }

    fn check_schema_version(&mut self) -> Result<()> {
        let user_version: i64 = self
            .conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))?;

        if user_version == 0 {
            let set_stmt = format!("PRAGMA user_version = {SCHEMA_VERSION};");
            self.conn.execute_batch(&set_stmt)?;
        } else if user_version != SCHEMA_VERSION as i64 {
            return Err(StreakError::Cache(format!(
                "Schema version mismatch: expected {}, found {}",
                SCHEMA_VERSION, user_version
            )));
        }

        Ok(())
    }

    pub fn store_calendar(
        &mut self,
        username: &str,
        calendar: &ContributionCalendar,
        fetched_at: DateTime<Utc>,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO calendars (username, fetched_at, total_contributions, payload)
             VALUES (?, ?, ?, ?)",
            params![
                username.to_lowercase(),
                fetched_at.timestamp(),
                calendar.total_contributions as i64,
                serde_json::to_string(calendar)?
            ],
        )?;
        Ok(())
    }

    pub fn load_calendar(
        &self,
        username: &str,
    ) -> Result<Option<(DateTime<Utc>, ContributionCalendar)>> {
        let result = self.conn.query_row(
            "SELECT fetched_at, payload FROM calendars WHERE username = ?",
            params![username.to_lowercase()],
            |row| {
                let ts: i64 = row.get(0)?;
                let payload: String = row.get(1)?;
                Ok((ts, payload))
            },
        );

        let (ts, payload) = match result {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let fetched_at = Utc
            .timestamp_opt(ts, 0)
            .single()
            .ok_or_else(|| StreakError::Cache(format!("invalid timestamp {ts}")))?;
        let calendar: ContributionCalendar = serde_json::from_str(&payload)?;
        Ok(Some((fetched_at, calendar)))
    }

    /// Returns whether a snapshot was removed.
    pub fn clear(&mut self, username: &str) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM calendars WHERE username = ?",
            params![username.to_lowercase()],
        )?;
        Ok(removed > 0)
    }
}

pub fn exec_clear(app: &mut App) -> anyhow::Result<()> {
    let username = app.settings().username.clone();
    let removed = match app.cache_mut() {
        Some(cache) => cache.clear(&username)?,
        None => anyhow::bail!("cache is unavailable"),
    };

    if removed {
        println!("Cleared cached calendar for {}", style(&username).cyan());
    } else {
        println!("No cached calendar for {}", style(&username).cyan());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContributionDay, ContributionWeek};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn calendar() -> ContributionCalendar {
        ContributionCalendar {
            total_contributions: 12,
            weeks: vec![ContributionWeek {
                days: vec![ContributionDay::new(
                    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                    12,
                )],
            }],
        }
    }

    #[test]
    fn round_trips_a_snapshot_case_insensitively() {
        let mut cache = Cache::in_memory().unwrap();
        let fetched_at = Utc.timestamp_opt(1_710_000_000, 0).unwrap();
        cache.store_calendar("OctoCat", &calendar(), fetched_at).unwrap();

        let (at, loaded) = cache.load_calendar("octocat").unwrap().unwrap();
        assert_eq!(at, fetched_at);
        assert_eq!(loaded, calendar());
    }

    #[test]
    fn missing_user_is_none_and_clear_reports_removal() {
        let mut cache = Cache::in_memory().unwrap();
        assert!(cache.load_calendar("nobody").unwrap().is_none());
        assert!(!cache.clear("nobody").unwrap());

        cache.store_calendar("nobody", &calendar(), Utc::now()).unwrap();
        assert!(cache.clear("nobody").unwrap());
        assert!(cache.load_calendar("nobody").unwrap().is_none());
    }

    #[test]
    fn persists_on_disk_and_rejects_foreign_schema() {
        let dir = tempdir().unwrap();
        {
            let mut cache = Cache::new(dir.path()).unwrap();
            cache.store_calendar("a", &calendar(), Utc::now()).unwrap();
        }
        let cache = Cache::new(dir.path()).unwrap();
        assert!(cache.load_calendar("a").unwrap().is_some());
        drop(cache);

        let conn = Connection::open(dir.path().join("cache.db")).unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
        drop(conn);
        assert!(matches!(Cache::new(dir.path()), Err(StreakError::Cache(_))));
    }
}
