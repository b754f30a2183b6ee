//! Rendering a strength report on the terminal.

use std::fmt::{self, Display};

use console::style;
use pwmeter::strength::MAX_SCORE;
use pwmeter::{Rating, StrengthReport};

pub(crate) fn print_report(report: &StrengthReport) {
    println!();
    println!("{}", ScoreBar(report.score));
    println!("Score: {}/{}", report.score, MAX_SCORE);
    println!();
    for rule in report.violations.iter() {
        println!("{} {}", style("✗").red(), rule.violation_message());
    }
    let summary = report.rating.summary();
    match report.rating {
        Rating::Strong => println!("{} {}", style("✓").green(), style(summary).green().bold()),
        Rating::Moderate => println!("{} {}", style("!").yellow(), style(summary).yellow()),
        Rating::Weak => println!("{} {}", style("✗").red(), style(summary).red().bold()),
    }
}

/// A four-cell progress bar, one cell per point.
struct ScoreBar(u8);

impl Display for ScoreBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = self.0.min(MAX_SCORE);
        let colour = match Rating::from_score(filled) {
            Rating::Strong => console::Color::Green,
            Rating::Moderate => console::Color::Yellow,
            Rating::Weak => console::Color::Red,
        };
        let mut cells = String::new();
        for _ in 0..filled {
            cells.push('█');
        }
        for _ in filled..MAX_SCORE {
            cells.push('░');
        }
        write!(f, "[{}]", style(cells).fg(colour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bar_cells() {
        console::set_colors_enabled(false);
        assert_eq!(ScoreBar(0).to_string(), "[░░░░]");
        assert_eq!(ScoreBar(3).to_string(), "[███░]");
        assert_eq!(ScoreBar(4).to_string(), "[████]");
    }
}
