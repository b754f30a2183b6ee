//! Password expiry reminders and how long each one has left.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{MeterError, MeterErrorRepr};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpiryReminder {
    pub name: String,
    pub expiry_date: NaiveDate,
    pub set_date: NaiveDateTime,
}

impl ExpiryReminder {
    /// Whole days from `today` until expiry. Zero on the day itself, negative once it has passed.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    pub fn set_date_display(&self) -> String {
        self.set_date.format(crate::TIMESTAMP_FORMAT).to_string()
    }
}

#[derive(Debug, Default)]
pub struct ExpiryTracker {
    reminders: Vec<ExpiryReminder>,
}

impl ExpiryTracker {
    pub fn new() -> ExpiryTracker {
        ExpiryTracker::default()
    }

    pub fn add(
        &mut self,
        name: &str,
        expiry_date: NaiveDate,
        set_date: NaiveDateTime,
    ) -> Result<&ExpiryReminder, MeterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MeterErrorRepr::EmptyReminderName.into());
        }
        self.reminders.push(ExpiryReminder {
            name: name.to_owned(),
            expiry_date,
            set_date,
        });
        log::info!("expiry: reminder {:?} set for {}", name, expiry_date);
        Ok(&self.reminders[self.reminders.len() - 1])
    }

    pub fn reminders(&self) -> &[ExpiryReminder] {
        &self.reminders
    }

    /// `(name, days remaining)` for every reminder, in the order they were added.
    pub fn days_remaining(&self, today: NaiveDate) -> Vec<(&str, i64)> {
        self.reminders
            .iter()
            .map(|r| (r.name.as_str(), r.days_remaining(today)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_remaining_view() {
        let set = date(2025, 6, 1).and_hms_opt(8, 30, 0).unwrap();
        let mut tracker = ExpiryTracker::new();
        tracker.add("email", date(2025, 6, 11), set).unwrap();
        tracker.add("bank", date(2025, 6, 1), set).unwrap();
        tracker.add("  vpn  ", date(2025, 5, 30), set).unwrap();

        assert_eq!(
            tracker.days_remaining(date(2025, 6, 1)),
            vec![("email", 10), ("bank", 0), ("vpn", -2)]
        );
        assert_eq!(tracker.reminders()[0].set_date_display(), "2025-06-01 08:30:00");
    }

    #[test]
    fn crosses_month_and_leap_day() {
        let set = date(2024, 2, 1).and_hms_opt(0, 0, 0).unwrap();
        let reminder = ExpiryReminder {
            name: "work".to_owned(),
            expiry_date: date(2024, 3, 1),
            set_date: set,
        };
        assert_eq!(reminder.days_remaining(date(2024, 2, 1)), 29);
    }

    #[test]
    fn blank_names_are_refused() {
        let set = date(2025, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        let mut tracker = ExpiryTracker::new();
        assert!(tracker.add("   ", date(2025, 2, 1), set).is_err());
        assert!(tracker.is_empty());
    }
}
