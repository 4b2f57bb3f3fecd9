use crate::error::{Result, StreakError};
use crate::model::{ContributionCalendar, ContributionDay, ContributionLevel, ContributionWeek};
use crate::util::parse_date;
use serde::Deserialize;
use serde_json::{json, Value};

pub const CALENDAR_QUERY: &str = r#"
query ($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
            contributionLevel
          }
        }
      }
    }
  }
}
"#;

pub fn calendar_request(username: &str) -> Value {
    json!({
        "query": CALENDAR_QUERY,
        "variables": { "username": username },
    })
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCalendar {
    total_contributions: u64,
    weeks: Vec<RawWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWeek {
    contribution_days: Vec<RawDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDay {
    date: String,
    contribution_count: i64,
    #[serde(default)]
    contribution_level: ContributionLevel,
}

/// Parse a GraphQL response body into a calendar.
pub fn parse_calendar_response(body: &str) -> Result<ContributionCalendar> {
    let envelope: Envelope = serde_json::from_str(body)?;
    calendar_from_envelope(envelope)
}

pub fn parse_calendar_value(value: Value) -> Result<ContributionCalendar> {
    let envelope: Envelope = serde_json::from_value(value)?;
    calendar_from_envelope(envelope)
}

fn calendar_from_envelope(envelope: Envelope) -> Result<ContributionCalendar> {
    if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(StreakError::Api(messages.join(", ")));
    }

    let calendar = envelope
        .data
        .as_ref()
        .and_then(|d| d.get("user"))
        .and_then(|u| u.get("contributionsCollection"))
        .and_then(|c| c.get("contributionCalendar"))
        .filter(|c| !c.is_null())
        .cloned()
        .ok_or_else(|| {
            StreakError::InvalidResponse(
                "missing data.user.contributionsCollection.contributionCalendar".to_string(),
            )
        })?;

    let raw: RawCalendar = serde_json::from_value(calendar)?;
    into_calendar(raw)
}

fn into_calendar(raw: RawCalendar) -> Result<ContributionCalendar> {
    let mut weeks = Vec::with_capacity(raw.weeks.len());
    for week in raw.weeks {
        let mut days = Vec::with_capacity(week.contribution_days.len());
        for day in week.contribution_days {
            days.push(
                ContributionDay::new(parse_date(&day.date)?, day.contribution_count)
                    .with_level(day.contribution_level),
            );
        }
        weeks.push(ContributionWeek { days });
    }

    Ok(ContributionCalendar {
        total_contributions: raw.total_contributions,
        weeks,
    })
}
