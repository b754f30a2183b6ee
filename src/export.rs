//! Writing session data out to files.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{MeterError, MeterErrorRepr};

pub static PASSWORDS_FILE_NAME: &str = "generated_passwords.txt";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HistoryFormat {
    Csv,
    Json,
}

impl HistoryFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            HistoryFormat::Csv => "password_history.csv",
            HistoryFormat::Json => "password_history.json",
        }
    }
}

/// Write `path` by way of a sibling `<name>.writing` file that is renamed into place once
/// `write` has finished, so a failed export never leaves a half-written file behind.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<(), MeterError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), MeterError>,
{
    let temp_path = writing_path(path)?;
    let file = File::create(&temp_path).map_err(MeterErrorRepr::Io)?;
    let mut writer = BufWriter::new(file);

    let result = write(&mut writer).and_then(|()| {
        writer.flush().map_err(MeterErrorRepr::Io)?;
        Ok(())
    });
    drop(writer);
    if let Err(err) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(MeterErrorRepr::Io(err).into());
    }
    log::info!("export: wrote {}", path.display());
    Ok(())
}

fn writing_path(path: &Path) -> Result<PathBuf, MeterError> {
    let mut file_name = path
        .file_name()
        .ok_or_else(|| {
            MeterErrorRepr::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} does not name a file", path.display()),
            ))
        })?
        .to_os_string();
    file_name.push(".writing");
    Ok(path.with_file_name(file_name))
}
