use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::heading;
use crate::calendar::grid::WEEKDAY_LABELS;
use crate::tui::draw::level_color;
use crate::tui::layout::visible_columns;
use crate::tui::state::{Dashboard, TuiState};

const CELL: &str = "■ ";
const SELECTED_CELL: &str = "▣ ";
const LABEL_WIDTH: u16 = 5;

/// Contribution grid with the selected week highlighted, plus a side panel for that week.
pub fn draw_calendar_view(f: &mut Frame, area: Rect, data: &Dashboard, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let inner_width = chunks[0].width.saturating_sub(2 + LABEL_WIDTH);
    let range = visible_columns(data.weeks(), state.selected, (inner_width / 2) as usize);
    let grid = &data.grid;

    let month_line = format!(
        "{}{}",
        " ".repeat(LABEL_WIDTH as usize),
        grid.month_row(range.clone())
    );

    let mut lines = vec![Line::from(Span::styled(
        month_line,
        Style::default().fg(Color::Gray),
    ))];

    for (row, label) in WEEKDAY_LABELS.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{label:>4} "),
            Style::default().fg(Color::Gray),
        )];
        for col in range.clone() {
            let column = &grid.columns[col];
            let selected = col == state.selected;
            let span = match &column.days[row] {
                Some(day) if day.date <= data.today => {
                    let symbol = if selected { SELECTED_CELL } else { CELL };
                    Span::styled(symbol, Style::default().fg(level_color(grid.level_of(day))))
                }
                _ => Span::raw("  "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let mut legend = vec![Span::raw("     Less ")];
    for level in 0..5 {
        legend.push(Span::styled(CELL, Style::default().fg(level_color(level))));
    }
    legend.push(Span::raw("More"));
    lines.push(Line::from(legend));

    let title = grid_title(
        data.source.calendar().total_contributions,
        &data.username,
        state.current_status(),
    );
    let grid_widget = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(grid_widget, chunks[0]);

    draw_week_panel(f, chunks[1], data, state);
}

fn grid_title(total: u64, username: &str, status: Option<&str>) -> String {
    let mut title = format!("{total} contributions in the last year | {username}");
    if let Some(status) = status {
        title.push_str(" | ");
        title.push_str(status);
    }
    title
}

fn draw_week_panel(f: &mut Frame, area: Rect, data: &Dashboard, state: &TuiState) {
    let block = Block::default()
        .title("Selected Week")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let Some(column) = data.grid.columns.get(state.selected) else {
        f.render_widget(Paragraph::new("No data to display").block(block), area);
        return;
    };

    let week_end = column.week_start + chrono::Duration::days(6);
    let mut lines = vec![
        Line::from(heading(
            &format!(
                "{} – {}",
                column.week_start.format("%b %-d"),
                week_end.format("%b %-d, %Y")
            ),
            Color::Yellow,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Contributions: ", Style::default().fg(Color::White)),
            Span::styled(column.total().to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Active days: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}/7", column.active_days()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
    ];

    for day in column.days.iter().flatten() {
        let style = if day.is_active() {
            Style::default()
                .fg(level_color(data.grid.level_of(day)))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{}  ", day.date.format("%a %m-%d"))),
            Span::styled(day.count.max(0).to_string(), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::grid_title;
    use crate::tui::state::TuiState;

    #[test]
    fn title_carries_the_status_line() {
        assert_eq!(
            grid_title(42, "octocat", None),
            "42 contributions in the last year | octocat"
        );

        let mut state = TuiState::new(3);
        state.set_status("Reloaded (live)");
        assert_eq!(
            grid_title(42, "octocat", state.current_status()),
            "42 contributions in the last year | octocat | Reloaded (live)"
        );
    }
}
