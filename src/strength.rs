//! Heuristic password strength scoring.
//!
//! A password earns one point for each [`Rule`] it satisfies, for a score between 0 and 4.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Symbols that satisfy [`Rule::Symbol`]. The generator draws from the same set.
pub const SYMBOLS: &str = "!@#$%^&*";

/// Shortest password that satisfies [`Rule::Length`].
pub const MIN_LENGTH: usize = 8;

pub const MAX_SCORE: u8 = 4;

/// Any Unicode decimal digit, not just `0-9`.
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    Length,
    MixedCase,
    Digit,
    Symbol,
}

impl Rule {
    /// Every rule, in the order feedback is reported.
    pub const ALL: [Rule; 4] = [Rule::Length, Rule::MixedCase, Rule::Digit, Rule::Symbol];

    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            Rule::Length => password.chars().count() >= MIN_LENGTH,
            Rule::MixedCase => {
                password.chars().any(|c| c.is_ascii_uppercase())
                    && password.chars().any(|c| c.is_ascii_lowercase())
            }
            Rule::Digit => DIGIT_RE.is_match(password),
            Rule::Symbol => password.chars().any(|c| SYMBOLS.contains(c)),
        }
    }

    /// What to tell the user when the rule isn't met.
    pub fn violation_message(self) -> &'static str {
        match self {
            Rule::Length => "Password should be at least 8 characters long.",
            Rule::MixedCase => "Include both uppercase and lowercase letters.",
            Rule::Digit => "Add at least one number (0-9).",
            Rule::Symbol => "Include at least one special character (!@#$%^&*).",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rating {
    Weak,
    Moderate,
    Strong,
}

impl Rating {
    pub fn from_score(score: u8) -> Rating {
        match score {
            4 => Rating::Strong,
            3 => Rating::Moderate,
            _ => Rating::Weak,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Rating::Strong => "Strong Password!",
            Rating::Moderate => "Moderate Password - Consider adding more security features.",
            Rating::Weak => "Weak Password - Improve it using the suggestions above.",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Weak => f.write_str("weak"),
            Rating::Moderate => f.write_str("moderate"),
            Rating::Strong => f.write_str("strong"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrengthReport {
    pub score: u8,
    /// Failed rules, in [`Rule::ALL`] order.
    pub violations: Vec<Rule>,
    pub rating: Rating,
}

impl StrengthReport {
    /// One message per failed rule, followed by the rating summary.
    pub fn feedback(&self) -> Vec<&'static str> {
        self.violations
            .iter()
            .map(|rule| rule.violation_message())
            .chain(std::iter::once(self.rating.summary()))
            .collect()
    }
}

/// Score a password. Never fails: empty or otherwise odd input just scores low.
pub fn check_password_strength(password: &str) -> StrengthReport {
    let violations = Rule::ALL
        .iter()
        .copied()
        .filter(|rule| !rule.is_satisfied_by(password))
        .collect::<Vec<_>>();
    let score = MAX_SCORE - violations.len() as u8;
    StrengthReport {
        score,
        violations,
        rating: Rating::from_score(score),
    }
}
