use crate::model::{CalendarOutput, CalendarSource, SCHEMA_VERSION};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use console::{style, Style};

use super::grid::{CalendarGrid, WEEKDAY_LABELS};

const CELL: &str = "■";
const LEVEL_COLORS: [u8; 5] = [238, 24, 25, 27, 33];

fn level_style(level: usize) -> Style {
    Style::new().color256(LEVEL_COLORS[level.min(LEVEL_COLORS.len() - 1)])
}

pub fn output_json(source: &CalendarSource, username: &str) -> Result<()> {
    let calendar = source.calendar();
    let output = CalendarOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: username.to_string(),
        source: source.kind().to_string(),
        advisory: source.advisory(),
        total_contributions: calendar.total_contributions,
        weeks: calendar.weeks.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(source: &CalendarSource) -> Result<()> {
    for day in source.calendar().days() {
        println!("{}", serde_json::to_string(day)?);
    }
    Ok(())
}

pub fn output_grid(source: &CalendarSource, username: &str, today: NaiveDate) -> Result<()> {
    let calendar = source.calendar();

    println!(
        "{} {}  {} contributions in the last year",
        style("GitHub Contributions").bold(),
        style(username).dim(),
        style(calendar.total_contributions).cyan()
    );
    println!("{}", "─".repeat(50));

    if let Some(advisory) = source.advisory() {
        println!("{} {}", style("!").yellow().bold(), style(advisory).yellow());
    }

    if calendar.is_empty() {
        println!("No data to display");
        return Ok(());
    }
    let grid = CalendarGrid::build(calendar);

    println!("     {}", grid.month_row(0..grid.columns.len()));

    for (row, label) in WEEKDAY_LABELS.iter().enumerate() {
        let mut line = format!("{label:>4} ");
        for column in &grid.columns {
            match &column.days[row] {
                Some(day) if day.date <= today => {
                    let cell = level_style(grid.level_of(day)).apply_to(CELL);
                    line.push_str(&format!("{cell} "));
                }
                _ => line.push_str("  "),
            }
        }
        println!("{}", line.trim_end());
    }

    let legend: String = (0..LEVEL_COLORS.len())
        .map(|level| format!("{} ", level_style(level).apply_to(CELL)))
        .collect();
    println!("\n     Less {}More", legend);

    Ok(())
}
