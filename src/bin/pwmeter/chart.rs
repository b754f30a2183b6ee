//! Horizontal bar chart of the days left on each expiry reminder.

use std::io::{self, Write};

use console::style;
use unicode_width::UnicodeWidthStr;

use crate::table::Padded;

/// Longest bar, in cells. Charts with bigger values are scaled down to fit.
const MAX_BAR: i64 = 40;

pub(crate) fn display_chart(rows: &[(&str, i64)], mut output: impl Write) -> io::Result<()> {
    let name_width = rows.iter().map(|(name, _)| name.width()).max().unwrap_or(0);
    let longest = rows.iter().map(|&(_, days)| days).max().unwrap_or(0);

    for &(name, days) in rows {
        write!(output, "{}  ", Padded(name, name_width))?;
        if days < 0 {
            writeln!(output, "{}", style("expired").red().bold())?;
            continue;
        }
        let bar = "█".repeat(bar_cells(days, longest));
        let label = match days {
            1 => "1 day".to_owned(),
            n => format!("{n} days"),
        };
        let styled_bar = match days {
            0..=7 => style(bar).red(),
            8..=30 => style(bar).yellow(),
            _ => style(bar).green(),
        };
        if days == 0 {
            writeln!(output, "{}", label)?;
        } else {
            writeln!(output, "{} {}", styled_bar, label)?;
        }
    }
    Ok(())
}

fn bar_cells(days: i64, longest: i64) -> usize {
    if days <= 0 {
        0
    } else if longest <= MAX_BAR {
        days as usize
    } else {
        // Round up so that any time left still shows as a sliver.
        ((days * MAX_BAR + longest - 1) / longest) as usize
    }
}
