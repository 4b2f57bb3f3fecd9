use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// GitHub's display bucket for a day, relative to the user's own activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionLevel {
    #[default]
    None,
    FirstQuartile,
    SecondQuartile,
    ThirdQuartile,
    FourthQuartile,
}

impl ContributionLevel {
    pub fn index(self) -> usize {
        match self {
            ContributionLevel::None => 0,
            ContributionLevel::FirstQuartile => 1,
            ContributionLevel::SecondQuartile => 2,
            ContributionLevel::ThirdQuartile => 3,
            ContributionLevel::FourthQuartile => 4,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            0 => ContributionLevel::None,
            1 => ContributionLevel::FirstQuartile,
            2 => ContributionLevel::SecondQuartile,
            3 => ContributionLevel::ThirdQuartile,
            _ => ContributionLevel::FourthQuartile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: i64,
    #[serde(default)]
    pub level: ContributionLevel,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, count: i64) -> Self {
        Self {
            date,
            count,
            level: ContributionLevel::None,
        }
    }

    pub fn with_level(mut self, level: ContributionLevel) -> Self {
        self.level = level;
        self
    }

    /// Negative counts are malformed input and count as no contribution.
    pub fn is_active(&self) -> bool {
        self.count > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionWeek {
    pub days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeek>,
}

impl ContributionCalendar {
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.days().next().is_none()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days().map(|d| d.date).min()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days().map(|d| d.date).max()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_contributions: u64,
    pub last_contribution_date: Option<NaiveDate>,
}

pub const FALLBACK_ADVISORY: &str =
    "Could not load GitHub contributions data. Showing simulated data.";

/// Where the calendar shown to the user came from. Renderers only consume
/// `calendar()` and `advisory()`.
#[derive(Debug, Clone)]
pub enum CalendarSource {
    Live(ContributionCalendar),
    Cached {
        calendar: ContributionCalendar,
        fetched_at: DateTime<Utc>,
    },
    Fallback {
        calendar: ContributionCalendar,
        reason: String,
    },
}

impl CalendarSource {
    pub fn calendar(&self) -> &ContributionCalendar {
        match self {
            CalendarSource::Live(calendar) => calendar,
            CalendarSource::Cached { calendar, .. } => calendar,
            CalendarSource::Fallback { calendar, .. } => calendar,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CalendarSource::Live(_) => "live",
            CalendarSource::Cached { .. } => "cached",
            CalendarSource::Fallback { .. } => "fallback",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CalendarSource::Fallback { .. })
    }

    pub fn advisory(&self) -> Option<String> {
        match self {
            CalendarSource::Live(_) => None,
            CalendarSource::Cached { fetched_at, .. } => Some(format!(
                "Showing cached data fetched at {}",
                fetched_at.format("%Y-%m-%d %H:%M UTC")
            )),
            CalendarSource::Fallback { .. } => Some(FALLBACK_ADVISORY.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: String,
    pub source: String,
    pub advisory: Option<String>,
    pub today: NaiveDate,
    pub streak: StreakResult,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: String,
    pub source: String,
    pub advisory: Option<String>,
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReposOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: String,
    pub language: Option<String>,
    pub languages: Vec<String>,
    pub repositories: Vec<Repository>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub user: GithubUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32, count: i64) -> ContributionDay {
        ContributionDay::new(NaiveDate::from_ymd_opt(2024, 3, d).unwrap(), count)
    }

    #[test]
    fn calendar_bounds_ignore_week_order() {
        let calendar = ContributionCalendar {
            total_contributions: 3,
            weeks: vec![
                ContributionWeek {
                    days: vec![day(12, 1), day(11, 0)],
                },
                ContributionWeek::default(),
                ContributionWeek {
                    days: vec![day(3, 2)],
                },
            ],
        };
        assert!(!calendar.is_empty());
        assert_eq!(calendar.first_date(), Some(day(3, 0).date));
        assert_eq!(calendar.last_date(), Some(day(12, 0).date));
    }

    #[test]
    fn calendar_of_empty_weeks_is_empty() {
        let calendar = ContributionCalendar {
            total_contributions: 0,
            weeks: vec![ContributionWeek::default()],
        };
        assert!(calendar.is_empty());
        assert_eq!(calendar.first_date(), None);
    }
}
