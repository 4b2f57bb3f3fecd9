use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::heading;
use crate::tui::centered_rect;

/// Draw the modal help overlay describing navigation, views, and shortcuts.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(60, 70, area);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(heading("ghstreak - Help", Color::Yellow)),
        Line::from(""),
        Line::from(heading("Navigation:", Color::Green)),
        Line::from("  ←/→ or j/k  Select week"),
        Line::from("  g/G         Jump to first/last week"),
        Line::from("  PgUp/PgDn   Move by 4 weeks"),
        Line::from(""),
        Line::from(heading("Views:", Color::Green)),
        Line::from("  Tab         Next view (Overview/Calendar)"),
        Line::from("  Shift+Tab   Previous view"),
        Line::from(""),
        Line::from(heading("Actions:", Color::Green)),
        Line::from("  r           Reload the calendar"),
        Line::from(""),
        Line::from(heading("General:", Color::Green)),
        Line::from("  h, F1       Toggle this help"),
        Line::from("  q, Esc      Quit application"),
        Line::from(""),
        Line::from(ratatui::text::Span::styled(
            "Press 'h' or 'Esc' to close this help",
            Style::default().fg(Color::Gray),
        )),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
