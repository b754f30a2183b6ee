//! The append-only log of passwords checked or generated during a session.

use std::borrow::Cow;
use std::io::{self, Write};

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::{MeterError, MeterErrorRepr, Secret};

#[derive(Clone, Debug, Serialize)]
pub struct PasswordRecord {
    pub password: Secret,
    pub score: u8,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
}

impl PasswordRecord {
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(crate::TIMESTAMP_FORMAT).to_string()
    }
}

/// Records are only ever appended; nothing is edited or evicted.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<PasswordRecord>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn record(
        &mut self,
        password: Secret,
        score: u8,
        timestamp: NaiveDateTime,
    ) -> &PasswordRecord {
        self.records.push(PasswordRecord {
            password,
            score,
            timestamp,
        });
        log::debug!("history: appended record #{} (score {})", self.records.len(), score);
        &self.records[self.records.len() - 1]
    }

    pub fn entries(&self) -> &[PasswordRecord] {
        &self.records
    }

    /// The last `n` records, oldest first. Shorter when the history is.
    pub fn recent(&self, n: usize) -> &[PasswordRecord] {
        &self.records[self.records.len().saturating_sub(n)..]
    }

    pub fn passwords(&self) -> impl Iterator<Item = &Secret> {
        self.records.iter().map(|r| &r.password)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Comma-separated, with a `password,score,timestamp` header and no index column.
    pub fn write_csv(&self, mut output: impl Write) -> Result<(), MeterError> {
        write_csv_rows(&self.records, &mut output).map_err(MeterErrorRepr::Io)?;
        Ok(())
    }

    pub fn write_json(&self, mut output: impl Write) -> Result<(), MeterError> {
        serde_json::to_writer_pretty(&mut output, &self.records)
            .map_err(MeterErrorRepr::Serialization)?;
        writeln!(output).map_err(MeterErrorRepr::Io)?;
        Ok(())
    }

    /// Just the passwords, one per line.
    pub fn write_passwords(&self, mut output: impl Write) -> Result<(), MeterError> {
        for password in self.passwords() {
            writeln!(output, "{}", password.as_str()).map_err(MeterErrorRepr::Io)?;
        }
        Ok(())
    }
}

fn write_csv_rows(records: &[PasswordRecord], output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "password,score,timestamp")?;
    for record in records {
        writeln!(
            output,
            "{},{},{}",
            csv_field(record.password.as_str()),
            record.score,
            csv_field(&record.timestamp_display()),
        )?;
    }
    Ok(())
}

/// Quote a field only if it needs it, doubling any quotes inside.
fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains(&[',', '"', '\r', '\n'][..]) {
        Cow::from(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::from(field)
    }
}

fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(crate::TIMESTAMP_FORMAT))
}
