//! One interactive session: its password history, its expiry reminders, and the flows that
//! feed them.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::{CryptoRng, Rng};

use crate::denylist::{is_common_password, is_duplicate_password};
use crate::export::{self, HistoryFormat};
use crate::{
    check_password_strength, password_generation, Clock, ExpiryReminder, ExpiryTracker, History,
    MeterError, Secret, StrengthReport,
};

/// Why a password was turned away without being scored.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("This password is too common and insecure. Please choose a different one.")]
    Common,
    #[error("This password has already been used recently. Please choose a different one.")]
    Duplicate,
}

#[derive(Debug, Default)]
pub struct Session {
    history: History,
    reminders: ExpiryTracker,
    clock: Clock,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn with_clock(clock: Clock) -> Session {
        Session {
            clock,
            ..Session::default()
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn reminders(&self) -> &ExpiryTracker {
        &self.reminders
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Refuse common and recently used passwords, otherwise score the password and record it.
    pub fn check(&mut self, password: &str) -> Result<StrengthReport, Rejection> {
        if is_common_password(password) {
            log::info!("session: rejected a common password");
            return Err(Rejection::Common);
        }
        if is_duplicate_password(password, &self.history) {
            log::info!("session: rejected a recently used password");
            return Err(Rejection::Duplicate);
        }
        let report = check_password_strength(password);
        self.history.record(Secret::from(password), report.score, self.clock.now());
        Ok(report)
    }

    /// Generate a password (at least [`password_generation::MIN_LENGTH`] long) and record it with
    /// the score it actually earns. Random draws can miss a character class, so the report may
    /// well be less than strong.
    pub fn generate<R>(&mut self, rng: &mut R, len: usize) -> (Secret, StrengthReport)
    where
        R: Rng + CryptoRng,
    {
        let password = password_generation::generate_strong_password(rng, len);
        let report = check_password_strength(password.as_str());
        self.history.record(password.clone(), report.score, self.clock.now());
        (password, report)
    }

    pub fn add_reminder(
        &mut self,
        name: &str,
        expiry_date: NaiveDate,
    ) -> Result<&ExpiryReminder, MeterError> {
        let now = self.clock.now();
        self.reminders.add(name, expiry_date, now)
    }

    /// Days left on each reminder, as of the session clock's today.
    pub fn days_remaining(&self) -> Vec<(&str, i64)> {
        self.reminders.days_remaining(self.clock.today())
    }

    /// Write every password in the history, one per line, to `dir`. Returns the file written.
    pub fn export_passwords(&self, dir: &Path) -> Result<PathBuf, MeterError> {
        let path = dir.join(export::PASSWORDS_FILE_NAME);
        export::write_atomically(&path, |w| self.history.write_passwords(w))?;
        Ok(path)
    }

    pub fn export_history(&self, dir: &Path, format: HistoryFormat) -> Result<PathBuf, MeterError> {
        let path = dir.join(format.file_name());
        export::write_atomically(&path, |w| match format {
            HistoryFormat::Csv => self.history.write_csv(w),
            HistoryFormat::Json => self.history.write_json(w),
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rating;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn session() -> Session {
        let at = NaiveDate::from_ymd_opt(2025, 7, 4)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        Session::with_clock(Clock::fixed_at(at))
    }

    #[test]
    fn check_records_scored_passwords() {
        let mut session = session();
        let report = session.check("Abcdef1!").unwrap();
        assert_eq!(report.score, 4);

        let record = &session.history().entries()[0];
        assert_eq!(record.password.as_str(), "Abcdef1!");
        assert_eq!(record.score, 4);
        assert_eq!(record.timestamp_display(), "2025-07-04 15:00:00");
    }

    #[test]
    fn common_passwords_are_not_scored_or_recorded() {
        let mut session = session();
        assert_eq!(session.check("QWERTY"), Err(Rejection::Common));
        assert!(session.history().is_empty());
    }

    #[test]
    fn repeats_are_rejected() {
        let mut session = session();
        session.check("weak").unwrap();
        assert_eq!(session.check("weak"), Err(Rejection::Duplicate));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn common_wins_over_duplicate() {
        let mut session = session();
        assert_eq!(session.check("admin"), Err(Rejection::Common));
        assert_eq!(session.check("admin"), Err(Rejection::Common));
    }

    #[test]
    fn generated_passwords_join_the_history() {
        let mut session = session();
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let (password, report) = session.generate(&mut rng, 4);
        assert_eq!(password.as_str().chars().count(), 8);
        assert_eq!(report, check_password_strength(password.as_str()));

        let record = &session.history().entries()[0];
        assert_eq!(record.password, password);
        assert_eq!(record.score, report.score);

        // Generated passwords count towards the duplicate window too.
        assert_eq!(session.check(password.as_str()), Err(Rejection::Duplicate));
    }

    #[test]
    fn generated_passwords_are_rated_honestly() {
        let mut session = session();
        let mut rng = ChaCha20Rng::seed_from_u64(17);
        let mut ratings = Vec::new();
        for _ in 0..200 {
            let (password, report) = session.generate(&mut rng, 8);
            assert_eq!(report.rating, Rating::from_score(report.score));
            assert_eq!(report.score, check_password_strength(password.as_str()).score);
            ratings.push(report.rating);
        }
        // Eight characters from 70 is often short of a digit or a symbol.
        assert!(ratings.iter().any(|r| *r != Rating::Strong));
    }

    #[test]
    fn reminders_use_the_session_clock() {
        let mut session = session();
        session
            .add_reminder("email", NaiveDate::from_ymd_opt(2025, 7, 14).unwrap())
            .unwrap();
        assert_eq!(session.days_remaining(), vec![("email", 10)]);
        assert_eq!(
            session.reminders().reminders()[0].set_date_display(),
            "2025-07-04 15:00:00"
        );
    }
}
