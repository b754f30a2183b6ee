use anyhow::Context;
use chrono::NaiveDate;

use crate::ProgError;

pub(crate) fn read_password() -> Result<pwmeter::Secret, ProgError> {
    let password =
        rpassword::prompt_password("Password: ").context("failed to read password from TTY")?;
    Ok(pwmeter::Secret::from(password))
}

pub(crate) fn read_length(default: usize) -> Result<usize, ProgError> {
    let length = dialoguer::Input::<String>::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(format!(
            "Password length ({}-{})",
            pwmeter::password_generation::MIN_LENGTH,
            pwmeter::password_generation::MAX_LENGTH
        ))
        .default(default.to_string())
        .validate_with(|input: &String| crate::parse_length(input.trim()).map(|_| ()))
        .interact_text()
        .context("failed to prompt you, somehow")?;
    Ok(crate::parse_length(length.trim()).map_err(anyhow::Error::msg)?)
}

pub(crate) fn read_expiry_date() -> Result<NaiveDate, ProgError> {
    let input = dialoguer::Input::<String>::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt("Expiry date (YYYY-MM-DD)")
        .interact_text()
        .context("failed to prompt you, somehow")?;
    parse_date(&input)
}

pub(crate) fn read_reminder_name() -> Result<String, ProgError> {
    let name = dialoguer::Input::<String>::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt("What is this password for?")
        .interact_text()
        .context("failed to prompt you, somehow")?;
    Ok(name)
}

pub(crate) fn confirm(prompt: &str, default: bool) -> Result<bool, ProgError> {
    let answer = dialoguer::Confirm::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .context("failed to prompt you, somehow")?;
    Ok(answer)
}

fn parse_date(input: &str) -> Result<NaiveDate, ProgError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ProgError::InvalidDate(input.trim().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(
            parse_date(" 2025-12-31 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
        assert!(matches!(parse_date("2025-02-30"), Err(ProgError::InvalidDate(_))));
        assert!(matches!(
            parse_date("31/12/2025"),
            Err(ProgError::InvalidDate(s)) if s == "31/12/2025"
        ));
    }
}
