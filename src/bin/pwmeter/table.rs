use std::fmt::{self, Display};
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

pub fn display_table<ItemType: TableDisplay>(
    rows: &[ItemType],
    mut output: impl Write,
) -> io::Result<()> {
    let column_count = ItemType::columns();
    let mut column_widths = (0..column_count)
        .map(|column_index| ItemType::column_name(column_index).width())
        .collect::<Vec<_>>();

    for row in rows {
        for (column_index, width) in column_widths.iter_mut().enumerate() {
            *width = std::cmp::max(row.item(column_index).width(), *width);
        }
    }

    output_row(&mut output, column_count, |column_index| {
        Padded(ItemType::column_name(column_index), column_widths[column_index])
    })?;
    output_row(&mut output, column_count, |column_index| {
        Divider(column_widths[column_index])
    })?;
    for row in rows {
        output_row(&mut output, column_count, |column_index| {
            Padded(row.item(column_index), column_widths[column_index])
        })?;
    }

    Ok(())
}

pub trait TableDisplay {
    fn columns() -> usize;
    fn column_name(column_index: usize) -> &'static str;
    fn item(&self, column_index: usize) -> &str;
}

fn output_row<F, D>(
    mut output: impl Write,
    column_count: usize,
    get_column_display: F,
) -> io::Result<()>
where
    D: Display,
    F: Fn(usize) -> D,
{
    for column_index in 0..column_count {
        if column_index > 0 {
            write!(&mut output, "  ")?;
        }
        write!(&mut output, "{}", get_column_display(column_index))?;
    }
    writeln!(&mut output)?;
    Ok(())
}

struct Divider(usize);

impl Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            write!(f, "─")?;
        }
        Ok(())
    }
}

/// Left-aligned text, padded out to a display width.
pub(crate) struct Padded<'a>(pub &'a str, pub usize);

impl Display for Padded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.1.saturating_sub(self.0.width());
        write!(f, "{}", self.0)?;
        for _ in 0..padding {
            write!(f, " ")?;
        }
        Ok(())
    }
}

/// One row of the password history table.
pub(crate) struct HistoryRow {
    number: String,
    password: String,
    score: String,
    timestamp: String,
}

impl HistoryRow {
    pub(crate) fn new(number: usize, record: &pwmeter::PasswordRecord) -> HistoryRow {
        HistoryRow {
            number: number.to_string(),
            password: record.password.as_str().to_owned(),
            score: format!("{}/{}", record.score, pwmeter::strength::MAX_SCORE),
            timestamp: record.timestamp_display(),
        }
    }
}

impl TableDisplay for HistoryRow {
    fn columns() -> usize {
        4
    }

    fn column_name(column_index: usize) -> &'static str {
        match column_index {
            0 => "#",
            1 => "Password",
            2 => "Score",
            3 => "Timestamp",
            _ => panic!(),
        }
    }

    fn item(&self, column_index: usize) -> &str {
        match column_index {
            0 => &self.number,
            1 => &self.password,
            2 => &self.score,
            3 => &self.timestamp,
            _ => panic!(),
        }
    }
}

pub(crate) struct ReminderRow {
    name: String,
    expiry_date: String,
    days_remaining: String,
    set_date: String,
}

impl ReminderRow {
    pub(crate) fn new(reminder: &pwmeter::ExpiryReminder, today: chrono::NaiveDate) -> ReminderRow {
        ReminderRow {
            name: reminder.name.clone(),
            expiry_date: reminder.expiry_date.to_string(),
            days_remaining: reminder.days_remaining(today).to_string(),
            set_date: reminder.set_date_display(),
        }
    }
}

impl TableDisplay for ReminderRow {
    fn columns() -> usize {
        4
    }

    fn column_name(column_index: usize) -> &'static str {
        match column_index {
            0 => "Password for",
            1 => "Expires",
            2 => "Days left",
            3 => "Set on",
            _ => panic!(),
        }
    }

    fn item(&self, column_index: usize) -> &str {
        match column_index {
            0 => &self.name,
            1 => &self.expiry_date,
            2 => &self.days_remaining,
            3 => &self.set_date,
            _ => panic!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pwmeter::History;

    #[test]
    fn history_table_lines_up() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let mut history = History::new();
        history.record("Abcdef1!".into(), 4, at);
        history.record("ab".into(), 0, at);
        let rows = history
            .entries()
            .iter()
            .enumerate()
            .map(|(i, r)| HistoryRow::new(i + 1, r))
            .collect::<Vec<_>>();

        let mut out = Vec::new();
        display_table(&rows, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "#  Password  Score  Timestamp          ");
        assert_eq!(lines[1], "─  ────────  ─────  ───────────────────");
        assert_eq!(lines[2], "1  Abcdef1!  4/4    2025-01-02 03:04:05");
        assert_eq!(lines[3], "2  ab        0/4    2025-01-02 03:04:05");
    }

    #[test]
    fn wide_characters_are_measured_by_display_width() {
        assert_eq!(Padded("日本", 6).to_string(), "日本  ");
        assert_eq!(Padded("toolong", 3).to_string(), "toolong");
    }
}
