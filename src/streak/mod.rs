pub mod calc;
pub mod exec;
pub mod output;

pub use calc::calculate_streak;
pub use exec::exec;
pub use output::{output_json, output_summary};

/// Encouragement line shown under the streak numbers.
pub fn streak_message(streak: u32) -> &'static str {
    match streak {
        0 => "Start your GitHub streak today!",
        1 => "You're on the board! Keep it going!",
        2..=3 => "Nice start! You're building momentum!",
        4..=7 => "Awesome! You've been coding for a week straight!",
        8..=14 => "Impressive two-week streak! You're committed!",
        15..=30 => "A month of consistent contributions! Outstanding!",
        31..=60 => "Two months strong! You're a coding machine!",
        61..=100 => "100+ days! You're in the coding elite now!",
        _ => "Legendary streak! Your commitment is inspiring!",
    }
}
