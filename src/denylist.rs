//! Passwords that are refused before they are ever scored.

use crate::history::History;

/// Well-known passwords, compared case-insensitively.
pub static COMMON_PASSWORDS: [&str; 8] = [
    "password", "123456", "qwerty", "admin", "letmein", "12345678", "123123", "111111",
];

/// How many of the most recent history entries a new password must differ from.
pub const RECENT_WINDOW: usize = 10;

pub fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.contains(&lowered.as_str())
}

/// Exact match against the last [`RECENT_WINDOW`] passwords in the history.
pub fn is_duplicate_password(password: &str, history: &History) -> bool {
    history
        .recent(RECENT_WINDOW)
        .iter()
        .any(|record| record.password.as_str() == password)
}
