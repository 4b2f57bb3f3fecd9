use ratatui::style::{Color, Modifier, Style};

const LEVEL_COLORS: [u8; 5] = [238, 24, 25, 27, 33];

/// Grid cell colour for a contribution level (0..=4).
pub fn level_color(level: usize) -> Color {
    Color::Indexed(LEVEL_COLORS[level.min(LEVEL_COLORS.len() - 1)])
}

/// Colour for a streak length relative to the best streak so far.
pub fn streak_style(streak: u32, longest: u32) -> Style {
    if streak == 0 {
        return Style::default().fg(Color::DarkGray);
    }
    if longest == 0 {
        return Style::default().fg(Color::White);
    }

    let ratio = streak as f64 / longest as f64;
    if ratio >= 1.0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if ratio > 0.6 {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if ratio > 0.3 {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_clamp_to_palette() {
        assert_eq!(level_color(0), Color::Indexed(238));
        assert_eq!(level_color(4), Color::Indexed(33));
        assert_eq!(level_color(9), Color::Indexed(33));
    }

    #[test]
    fn record_streak_is_highlighted() {
        assert_eq!(
            streak_style(10, 10),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        );
        assert_eq!(streak_style(0, 10), Style::default().fg(Color::DarkGray));
    }
}
