//! Password strength scoring, generation, and a session-scoped history of checked passwords.

use std::fmt;
use std::io;

use serde::Serialize;

pub mod clock;
pub mod denylist;
pub mod expiry;
pub mod export;
pub mod history;
pub mod password_generation;
pub mod session;
pub mod strength;

pub use clock::Clock;
pub use expiry::{ExpiryReminder, ExpiryTracker};
pub use history::{History, PasswordRecord};
pub use session::{Rejection, Session};
pub use strength::{check_password_strength, Rating, Rule, StrengthReport};

/// Format used for every timestamp the session records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct MeterError(MeterErrorRepr);

impl From<MeterErrorRepr> for MeterError {
    fn from(err: MeterErrorRepr) -> MeterError {
        MeterError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum MeterErrorRepr {
    #[error("I/O error: {0}")]
    Io(io::Error),
    #[error("failed to serialize the password history into JSON: {0}")]
    Serialization(serde_json::Error),
    #[error("a reminder needs a non-empty name")]
    EmptyReminderName,
}

/// A password, kept out of `Debug` output (and therefore out of the logs).
#[derive(Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Secret {
        Secret(s.to_owned())
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_debug_does_not_show_the_password() {
        let secret = Secret::from("hunter2");
        let debugged = format!("{:?}", secret);
        assert!(!debugged.contains("hunter2"));
        assert_eq!(secret.to_string(), "hunter2");
    }
}
