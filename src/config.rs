use crate::cli::CommonArgs;
use crate::error::{Result, StreakError};
use crate::util::{local_today, parse_date};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_CONFIG_FILE: &str = "ghstreak.toml";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const USER_ENV: &str = "GHSTREAK_USER";

/// On-disk configuration. Every key is optional.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FileConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct GithubConfig {
    pub username: Option<String>,
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub graphql_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct CacheConfig {
    pub dir: Option<PathBuf>,
    pub max_age: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Explicit path must exist; the default file is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path).map_err(|e| {
                StreakError::Config(format!("failed to load {}: {e}", path.display()))
            }),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Fully resolved settings: CLI flags over environment over file over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub username: String,
    pub token: Option<String>,
    pub api_url: String,
    pub graphql_url: String,
    pub timeout: Duration,
    pub cache_dir: PathBuf,
    pub max_age: Duration,
    pub offline: bool,
    pub calendar_file: Option<PathBuf>,
    pub today: NaiveDate,
    pub seed: u64,
}

impl Settings {
    pub fn resolve(common: &CommonArgs) -> Result<Self> {
        let file = FileConfig::discover(common.config.as_deref())?;
        Self::from_parts(common, file, |key| std::env::var(key).ok())
    }

    pub fn from_parts<F>(common: &CommonArgs, file: FileConfig, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = common
            .user
            .clone()
            .or_else(|| env(USER_ENV))
            .or(file.github.username)
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                StreakError::Config(format!(
                    "no GitHub username; pass --user, set {USER_ENV}, or add github.username to {DEFAULT_CONFIG_FILE}"
                ))
            })?;

        let token = common
            .token
            .clone()
            .or_else(|| env(TOKEN_ENV))
            .or(file.github.token)
            .filter(|t| !t.trim().is_empty());

        let max_age = match common.max_age.as_deref().or(file.cache.max_age.as_deref()) {
            Some(raw) => humantime::parse_duration(raw)?,
            None => Duration::from_secs(60 * 60),
        };

        let today = match common.today.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => local_today(),
        };

        let cache_dir = common
            .cache
            .clone()
            .or(file.cache.dir)
            .unwrap_or_else(default_cache_dir);

        Ok(Self {
            username,
            token,
            api_url: file
                .github
                .api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            graphql_url: file
                .github
                .graphql_url
                .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string()),
            timeout: Duration::from_secs(file.github.timeout_secs.unwrap_or(30)),
            cache_dir,
            max_age,
            offline: common.offline,
            calendar_file: common.calendar_file.clone(),
            today,
            seed: common.seed.unwrap_or_else(|| day_seed(today)),
        })
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join("ghstreak"))
        .unwrap_or_else(|| PathBuf::from(".ghstreak"))
}

/// Simulated calendars stay stable for a given day.
fn day_seed(today: NaiveDate) -> u64 {
    today.num_days_from_ce().max(0) as u64
}
