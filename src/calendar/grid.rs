use crate::model::{ContributionCalendar, ContributionDay, ContributionLevel};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;
use std::ops::Range;

pub const WEEKDAY_LABELS: [&str; 7] = ["", "Mon", "", "Wed", "", "Fri", ""];

/// One Sunday-to-Saturday column of the contribution grid.
#[derive(Debug, Clone)]
pub struct GridColumn {
    pub week_start: NaiveDate,
    pub days: [Option<ContributionDay>; 7],
}

impl GridColumn {
    fn empty(week_start: NaiveDate) -> Self {
        Self {
            week_start,
            days: std::array::from_fn(|_| None),
        }
    }

    pub fn total(&self) -> i64 {
        self.days.iter().flatten().map(|d| d.count.max(0)).sum()
    }

    pub fn active_days(&self) -> usize {
        self.days.iter().flatten().filter(|d| d.is_active()).count()
    }
}

/// Weeks laid out by date, independent of how the source grouped them.
#[derive(Debug, Clone, Default)]
pub struct CalendarGrid {
    pub columns: Vec<GridColumn>,
    pub max_count: i64,
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

impl CalendarGrid {
    pub fn build(calendar: &ContributionCalendar) -> Self {
        let mut by_date: BTreeMap<NaiveDate, &ContributionDay> = BTreeMap::new();
        for day in calendar.days() {
            by_date.entry(day.date).or_insert(day);
        }

        let (Some(first), Some(last)) = (
            by_date.keys().next().copied(),
            by_date.keys().next_back().copied(),
        ) else {
            return Self::default();
        };

        let mut columns = Vec::new();
        let mut start = week_start(first);
        while start <= last {
            columns.push(GridColumn::empty(start));
            start += Duration::days(7);
        }

        let origin = week_start(first);
        let mut max_count = 0;
        for (date, day) in by_date {
            let col = ((date - origin).num_days() / 7) as usize;
            let row = date.weekday().num_days_from_sunday() as usize;
            max_count = max_count.max(day.count);
            columns[col].days[row] = Some(day.clone());
        }

        Self { columns, max_count }
    }

    /// Column index and month abbreviation for each column where a new month begins.
    pub fn month_labels(&self) -> Vec<(usize, String)> {
        let mut labels = Vec::new();
        let mut previous: Option<u32> = None;
        for (i, column) in self.columns.iter().enumerate() {
            let month = column
                .days
                .iter()
                .flatten()
                .map(|d| d.date)
                .find(|d| d.day() <= 7)
                .unwrap_or(column.week_start)
                .month();
            if previous != Some(month) {
                let date = NaiveDate::from_ymd_opt(2000, month, 1).unwrap_or(column.week_start);
                labels.push((i, date.format("%b").to_string()));
                previous = Some(month);
            }
        }
        labels
    }

    /// Month names over the columns of `range` they start in, two characters
    /// per column. Labels that would overlap the previous one are dropped.
    pub fn month_row(&self, range: Range<usize>) -> String {
        let mut row = String::new();
        for (col, label) in self.month_labels() {
            if !range.contains(&col) {
                continue;
            }
            let pos = (col - range.start) * 2;
            if row.chars().count() > pos {
                continue;
            }
            while row.chars().count() < pos {
                row.push(' ');
            }
            row.push_str(&label);
        }
        row
    }

    pub fn level_of(&self, day: &ContributionDay) -> usize {
        display_level(day, self.max_count)
    }
}

/// The source's level when it has one, otherwise a quartile of the busiest day.
pub fn display_level(day: &ContributionDay, max_count: i64) -> usize {
    if day.level != ContributionLevel::None {
        return day.level.index();
    }
    if !day.is_active() || max_count <= 0 {
        return 0;
    }
    let count = i128::from(day.count.min(max_count));
    let max = i128::from(max_count);
    let quartile = (count * 4 + max - 1) / max;
    quartile.clamp(1, 4) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContributionWeek;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar(days: Vec<ContributionDay>) -> ContributionCalendar {
        ContributionCalendar {
            total_contributions: 0,
            weeks: vec![ContributionWeek { days }],
        }
    }

    #[test]
    fn lays_days_out_by_weekday() {
        // 2024-03-10 is a Sunday
        let grid = CalendarGrid::build(&calendar(vec![
            ContributionDay::new(date(2024, 3, 12), 2),
            ContributionDay::new(date(2024, 3, 10), 1),
            ContributionDay::new(date(2024, 3, 25), 8),
        ]));

        assert_eq!(grid.columns.len(), 3);
        assert_eq!(grid.columns[0].week_start, date(2024, 3, 10));
        assert_eq!(grid.columns[0].days[0].as_ref().unwrap().count, 1);
        assert_eq!(grid.columns[0].days[2].as_ref().unwrap().count, 2);
        assert!(grid.columns[1].days.iter().all(Option::is_none));
        assert_eq!(grid.columns[2].days[1].as_ref().unwrap().count, 8);
        assert_eq!(grid.max_count, 8);
        assert_eq!(grid.columns[0].total(), 3);
        assert_eq!(grid.columns[0].active_days(), 2);
    }

    #[test]
    fn empty_calendar_has_no_columns() {
        assert!(CalendarGrid::build(&calendar(vec![])).columns.is_empty());
    }

    #[test]
    fn month_labels_mark_new_months() {
        let days: Vec<ContributionDay> = (0..70)
            .map(|i| ContributionDay::new(date(2024, 2, 4) + Duration::days(i), 1))
            .collect();
        let grid = CalendarGrid::build(&calendar(days));
        let labels: Vec<String> = grid.month_labels().into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["Feb", "Mar", "Apr"]);

        // Feb at column 0, Mar at column 3, Apr at column 8
        assert_eq!(grid.month_row(0..grid.columns.len()), "Feb   Mar       Apr");
        assert_eq!(grid.month_row(3..10), "Mar       Apr");
    }

    #[test]
    fn derived_levels_follow_quartiles() {
        let d = date(2024, 1, 1);
        assert_eq!(display_level(&ContributionDay::new(d, 0), 8), 0);
        assert_eq!(display_level(&ContributionDay::new(d, 1), 8), 1);
        assert_eq!(display_level(&ContributionDay::new(d, 5), 8), 3);
        assert_eq!(display_level(&ContributionDay::new(d, 8), 8), 4);
        assert_eq!(
            display_level(
                &ContributionDay::new(d, 1).with_level(ContributionLevel::ThirdQuartile),
                8
            ),
            3
        );
    }

    #[test]
    fn huge_counts_do_not_overflow() {
        let d = date(2024, 1, 1);
        let big = i64::MAX / 2;
        assert_eq!(display_level(&ContributionDay::new(d, big), big), 4);
        assert_eq!(display_level(&ContributionDay::new(d, i64::MAX), i64::MAX), 4);
        assert_eq!(display_level(&ContributionDay::new(d, 1), i64::MAX), 1);
    }
}
