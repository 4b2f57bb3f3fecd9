use crate::model::{ContributionCalendar, ContributionDay, StreakResult};
use chrono::{Duration, NaiveDate};

/// Derive streak statistics from a calendar snapshot.
///
/// `today` anchors the current streak. Days are compared by calendar date
/// only. The input order of weeks and days does not matter; when a date
/// appears more than once the first record wins.
pub fn calculate_streak(calendar: &ContributionCalendar, today: NaiveDate) -> StreakResult {
    let days = sorted_days(calendar);

    let last_contribution_date = days.iter().find(|d| d.is_active()).map(|d| d.date);

    StreakResult {
        current_streak: current_streak(&days, today),
        longest_streak: longest_streak(&days),
        total_contributions: calendar.total_contributions,
        last_contribution_date,
    }
}

/// Most recent first, one record per date.
fn sorted_days(calendar: &ContributionCalendar) -> Vec<&ContributionDay> {
    let mut days: Vec<&ContributionDay> = calendar.days().collect();
    // stable, so duplicates keep input order
    days.sort_by(|a, b| b.date.cmp(&a.date));
    days.dedup_by_key(|d| d.date);
    days
}

fn current_streak(days: &[&ContributionDay], today: NaiveDate) -> u32 {
    let mut streak = 0u32;
    let mut expected = today;

    for day in days.iter().skip_while(|d| d.date > today) {
        if day.date != expected || !day.is_active() {
            break;
        }
        streak += 1;
        expected -= Duration::days(1);
    }

    streak
}

fn longest_streak(days: &[&ContributionDay]) -> u32 {
    let mut longest = 0u32;
    let mut running = 0u32;

    // Only inactive records break a run; absent dates are not looked at
    for day in days.iter().rev() {
        if day.is_active() {
            running += 1;
            longest = longest.max(running);
        } else {
            running = 0;
        }
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContributionWeek;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Builds a calendar ending at `end` from counts listed oldest first.
    fn calendar_ending(end: NaiveDate, counts: &[i64]) -> ContributionCalendar {
        let start = end - Duration::days(counts.len() as i64 - 1);
        let days: Vec<ContributionDay> = counts
            .iter()
            .enumerate()
            .map(|(i, &c)| ContributionDay::new(start + Duration::days(i as i64), c))
            .collect();
        let weeks = days
            .chunks(7)
            .map(|chunk| ContributionWeek {
                days: chunk.to_vec(),
            })
            .collect();
        ContributionCalendar {
            total_contributions: counts.iter().filter(|c| **c > 0).sum::<i64>() as u64,
            weeks,
        }
    }

    #[test]
    fn empty_calendar_yields_zeroes() {
        let calendar = ContributionCalendar {
            total_contributions: 0,
            weeks: vec![],
        };
        let result = calculate_streak(&calendar, date(2024, 3, 10));
        assert_eq!(
            result,
            StreakResult {
                current_streak: 0,
                longest_streak: 0,
                total_contributions: 0,
                last_contribution_date: None,
            }
        );
    }

    #[test]
    fn empty_weeks_yield_zeroes() {
        let calendar = ContributionCalendar {
            total_contributions: 0,
            weeks: vec![ContributionWeek::default(), ContributionWeek::default()],
        };
        let result = calculate_streak(&calendar, date(2024, 3, 10));
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 0);
        assert_eq!(result.last_contribution_date, None);
    }

    #[test]
    fn ten_trailing_active_days_make_current_streak_ten() {
        let today = date(2024, 3, 10);
        let mut counts = vec![1; 20];
        counts.push(0);
        counts.extend(vec![3; 10]);
        let calendar = calendar_ending(today, &counts);

        let result = calculate_streak(&calendar, today);
        assert_eq!(result.current_streak, 10);
        assert_eq!(result.longest_streak, 20);
        assert_eq!(result.last_contribution_date, Some(today));
    }

    #[test]
    fn inactive_today_breaks_current_streak() {
        let today = date(2024, 3, 10);
        let calendar = calendar_ending(today, &[5, 5, 5, 5, 0]);
        let result = calculate_streak(&calendar, today);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 4);
        assert_eq!(result.last_contribution_date, Some(date(2024, 3, 9)));
    }

    #[test]
    fn unreported_today_counts_as_a_gap() {
        let yesterday = date(2024, 3, 9);
        let calendar = calendar_ending(yesterday, &[1, 1, 1]);
        let result = calculate_streak(&calendar, date(2024, 3, 10));
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.longest_streak, 3);
    }

    #[test]
    fn longest_streak_picks_the_longer_run() {
        let today = date(2024, 6, 1);
        let mut counts = vec![0, 2, 2, 2, 0, 0];
        counts.extend(vec![1; 7]);
        counts.extend(vec![0, 0, 0]);
        let calendar = calendar_ending(today, &counts);
        assert_eq!(calculate_streak(&calendar, today).longest_streak, 7);

        // same runs, other way round
        let mut counts = vec![0];
        counts.extend(vec![1; 7]);
        counts.extend(vec![0, 0, 2, 2, 2, 0]);
        let calendar = calendar_ending(today, &counts);
        assert_eq!(calculate_streak(&calendar, today).longest_streak, 7);
    }

    #[test]
    fn negative_counts_are_treated_as_zero() {
        let today = date(2024, 3, 10);
        let calendar = calendar_ending(today, &[1, 1, -4, 1, 1]);
        let result = calculate_streak(&calendar, today);
        assert_eq!(result.current_streak, 2);
        assert_eq!(result.longest_streak, 2);
    }

    #[test]
    fn total_comes_from_the_source() {
        let today = date(2024, 3, 10);
        let mut calendar = calendar_ending(today, &[1, 2, 3]);
        calendar.total_contributions = 999;
        assert_eq!(calculate_streak(&calendar, today).total_contributions, 999);
    }

    #[test]
    fn week_order_does_not_change_the_result() {
        let today = date(2024, 3, 10);
        let counts: Vec<i64> = (0..60).map(|i| if i % 9 == 4 { 0 } else { i % 3 }).collect();
        let canonical = calendar_ending(today, &counts);

        let mut reversed = canonical.clone();
        reversed.weeks.reverse();
        for week in &mut reversed.weeks {
            week.days.reverse();
        }

        let mut shuffled = canonical.clone();
        let n = shuffled.weeks.len();
        shuffled.weeks.swap(0, n / 2);
        shuffled.weeks.swap(1, n - 1);

        let expected = calculate_streak(&canonical, today);
        assert_eq!(calculate_streak(&reversed, today), expected);
        assert_eq!(calculate_streak(&shuffled, today), expected);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let today = date(2024, 3, 10);
        let calendar = calendar_ending(today, &[0, 1, 1, 0, 1, 1, 1]);
        assert_eq!(
            calculate_streak(&calendar, today),
            calculate_streak(&calendar, today)
        );
    }

    #[test]
    fn first_duplicate_wins() {
        let today = date(2024, 3, 10);
        let calendar = ContributionCalendar {
            total_contributions: 2,
            weeks: vec![
                ContributionWeek {
                    days: vec![ContributionDay::new(today, 0)],
                },
                ContributionWeek {
                    days: vec![ContributionDay::new(today, 2)],
                },
            ],
        };
        let result = calculate_streak(&calendar, today);
        assert_eq!(result.current_streak, 0);
        assert_eq!(result.last_contribution_date, None);
    }

    #[test]
    fn future_days_are_ignored_for_current_streak() {
        let today = date(2024, 3, 10);
        let calendar = calendar_ending(date(2024, 3, 12), &[1, 1, 1, 0, 0]);
        let result = calculate_streak(&calendar, today);
        assert_eq!(result.current_streak, 3);
    }

    #[test]
    fn absent_dates_do_not_split_longest_run() {
        // 2024-03-04 has no record at all
        let days = [1, 2, 3, 5, 6, 7, 8]
            .iter()
            .map(|&d| ContributionDay::new(date(2024, 3, d), 1))
            .collect();
        let calendar = ContributionCalendar {
            total_contributions: 7,
            weeks: vec![ContributionWeek { days }],
        };
        let result = calculate_streak(&calendar, date(2024, 3, 8));
        assert_eq!(result.longest_streak, 7);
        // the current streak still stops at the missing day
        assert_eq!(result.current_streak, 4);
    }
}
