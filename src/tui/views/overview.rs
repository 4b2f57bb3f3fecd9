use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};
use ratatui::Frame;

use super::heading;
use crate::streak::streak_message;
use crate::tui::draw::streak_style;
use crate::tui::state::{Dashboard, TuiState};
use crate::util::format_day;

/// Streak cards, the last-contribution line, and a weekly activity sparkline.
pub fn draw_overview(f: &mut Frame, area: Rect, data: &Dashboard, state: &TuiState) {
    let advisory = data.source.advisory();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if advisory.is_some() { 3 } else { 0 }),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(area);

    if let Some(advisory) = advisory {
        let note = Paragraph::new(Line::from(vec![
            heading("! ", Color::Yellow),
            Span::styled(advisory, Style::default().fg(Color::Yellow)),
        ]))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Yellow)));
        f.render_widget(note, chunks[0]);
    }

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);

    let streak = &data.streak;
    let entries = [
        (
            "Current Streak",
            format!("{} days", streak.current_streak),
            streak_style(streak.current_streak, streak.longest_streak),
        ),
        (
            "Longest Streak",
            format!("{} days", streak.longest_streak),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        (
            "Total Contributions",
            streak.total_contributions.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ];

    for ((title, value, style), area) in entries.into_iter().zip(cards.iter()) {
        let card = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(value, style))])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        f.render_widget(card, *area);
    }

    let details = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Last contribution: ", Style::default().fg(Color::White)),
            Span::styled(
                format_day(streak.last_contribution_date),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("   Source: {}", data.source.kind()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            streak_message(streak.current_streak),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(details, chunks[2]);

    let weekly: Vec<u64> = data
        .grid
        .columns
        .iter()
        .map(|c| c.total() as u64)
        .collect();
    let title = match state.current_status() {
        Some(status) => format!("Weekly contributions | {status}"),
        None => "Weekly contributions | Press 'h' for help".to_string(),
    };
    let sparkline = Sparkline::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .data(&weekly)
        .style(Style::default().fg(Color::Blue));
    f.render_widget(sparkline, chunks[3]);
}
