use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

mod calendar;
mod help;
mod overview;

pub use calendar::draw_calendar_view;
pub use help::draw_help_overlay;
pub use overview::draw_overview;

/// Bold coloured span for section headings.
pub(crate) fn heading(text: &str, color: Color) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
