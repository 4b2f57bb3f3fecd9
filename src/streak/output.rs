use crate::model::{CalendarSource, StreakOutput, StreakResult, SCHEMA_VERSION};
use crate::util::format_day;
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use console::style;

use super::streak_message;

pub fn output_json(
    streak: &StreakResult,
    source: &CalendarSource,
    username: &str,
    today: NaiveDate,
) -> Result<()> {
    let output = StreakOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: username.to_string(),
        source: source.kind().to_string(),
        advisory: source.advisory(),
        today,
        streak: *streak,
        message: streak_message(streak.current_streak).to_string(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_summary(streak: &StreakResult, source: &CalendarSource, username: &str) -> Result<()> {
    println!("{} {}", style("GitHub Streak").bold(), style(username).dim());
    println!("{}", "─".repeat(50));

    if let Some(advisory) = source.advisory() {
        println!("{} {}", style("!").yellow().bold(), style(advisory).yellow());
    }

    println!(
        "{:<18}{:<18}{}",
        "Current Streak", "Longest Streak", "Total Contributions"
    );
    println!(
        "{:<18}{:<18}{}",
        style(days_label(streak.current_streak)).cyan().bold(),
        style(days_label(streak.longest_streak)).green().bold(),
        style(streak.total_contributions).yellow().bold()
    );

    println!(
        "\nLast contribution: {}",
        style(format_day(streak.last_contribution_date)).dim()
    );
    println!("{}", style(streak_message(streak.current_streak)).italic());
    Ok(())
}

fn days_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}
