//! The interactive session: a menu loop over one `pwmeter::Session`.

use std::io;
use std::path::Path;

use anyhow::Context;
use console::style;
use pwmeter::export::HistoryFormat;
use pwmeter::password_generation::DEFAULT_LENGTH;
use pwmeter::Session;

use crate::table::{display_table, HistoryRow, ReminderRow};
use crate::{prompt, ProgError};

#[derive(Clone, Copy)]
enum MenuItem {
    Check,
    Generate,
    History,
    ExportPasswords,
    Expiry,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 6] = [
        MenuItem::Check,
        MenuItem::Generate,
        MenuItem::History,
        MenuItem::ExportPasswords,
        MenuItem::Expiry,
        MenuItem::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::Check => "Check password strength",
            MenuItem::Generate => "Generate password",
            MenuItem::History => "Password history",
            MenuItem::ExportPasswords => "Export passwords",
            MenuItem::Expiry => "Expiry dashboard",
            MenuItem::Quit => "Quit",
        }
    }
}

pub(crate) fn run_session(export_dir: &Path) -> Result<(), ProgError> {
    println!("{}", style("Password Strength Meter").bold());
    println!(
        "Check the strength of your password, generate strong passwords, and keep track of them \
         for this session."
    );

    let mut session = Session::new();
    let labels = MenuItem::ALL.map(MenuItem::label);
    loop {
        println!();
        let selection = dialoguer::Select::with_theme(&dialoguer::theme::ColorfulTheme::default())
            .with_prompt("Choose an option")
            .items(&labels[..])
            .default(0)
            .interact_opt()
            .context("failed to query your selection")?;
        let item = match selection {
            Some(index) => MenuItem::ALL[index],
            None => MenuItem::Quit,
        };

        // Rejections and empty exports are reported and the session carries on; anything else
        // ends it.
        let result = match item {
            MenuItem::Check => check_strength(&mut session),
            MenuItem::Generate => generate_password(&mut session),
            MenuItem::History => show_history(&session, export_dir),
            MenuItem::ExportPasswords => export_passwords(&session, export_dir),
            MenuItem::Expiry => expiry_dashboard(&mut session),
            MenuItem::Quit => break,
        };
        match result {
            Ok(()) => (),
            Err(
                err @ (ProgError::Rejected(_)
                | ProgError::NothingToExport
                | ProgError::InvalidDate(_)
                | ProgError::Meter(_)),
            ) => eprintln!("{}", style(err).red()),
            Err(err) => return Err(err),
        }
    }

    if !session.history().is_empty() {
        eprintln!("Session over; {} password(s) forgotten.", session.history().len());
    }
    Ok(())
}

fn check_strength(session: &mut Session) -> Result<(), ProgError> {
    let password = prompt::read_password()?;
    let report = session.check(password.as_str())?;
    crate::report::print_report(&report);
    Ok(())
}

fn generate_password(session: &mut Session) -> Result<(), ProgError> {
    let length = prompt::read_length(DEFAULT_LENGTH)?;
    let mut rng = rand::thread_rng();
    let (password, report) = session.generate(&mut rng, length);
    println!("Here's your new password: {}", style(password.as_str()).bold());
    crate::report::print_report(&report);
    Ok(())
}

fn show_history(session: &Session, export_dir: &Path) -> Result<(), ProgError> {
    let history = session.history();
    if history.is_empty() {
        println!("No passwords checked or generated yet.");
        return Ok(());
    }

    let rows = history
        .entries()
        .iter()
        .enumerate()
        .map(|(i, record)| HistoryRow::new(i + 1, record))
        .collect::<Vec<_>>();
    display_table(&rows, io::stdout().lock()).context("failed to output table")?;
    println!();

    let formats = ["Don't export", "Export as CSV", "Export as JSON"];
    let choice = dialoguer::Select::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt("Download the history?")
        .items(&formats[..])
        .default(0)
        .interact_opt()
        .context("failed to query your selection")?;
    let format = match choice {
        Some(1) => HistoryFormat::Csv,
        Some(2) => HistoryFormat::Json,
        _ => return Ok(()),
    };
    let path = session.export_history(export_dir, format)?;
    println!("{} Password history exported to {}", style("✓").green(), path.display());
    Ok(())
}

fn export_passwords(session: &Session, export_dir: &Path) -> Result<(), ProgError> {
    if session.history().is_empty() {
        return Err(ProgError::NothingToExport);
    }
    eprintln!(
        "{}",
        style("The exported file holds every password from this session in plain text.").yellow()
    );
    if !prompt::confirm("Export anyway?", false)? {
        return Ok(());
    }
    let path = session.export_passwords(export_dir)?;
    println!("{} Passwords exported to {}", style("✓").green(), path.display());
    Ok(())
}

fn expiry_dashboard(session: &mut Session) -> Result<(), ProgError> {
    if prompt::confirm("Add a reminder?", session.reminders().is_empty())? {
        let name = prompt::read_reminder_name()?;
        let expiry_date = prompt::read_expiry_date()?;
        let reminder = session.add_reminder(&name, expiry_date)?;
        println!(
            "{} Reminder set for {:?}, expiring {}",
            style("✓").green(),
            reminder.name,
            reminder.expiry_date
        );
    }

    if session.reminders().is_empty() {
        println!("No reminders set yet.");
        return Ok(());
    }

    let today = session.today();
    let rows = session
        .reminders()
        .reminders()
        .iter()
        .map(|r| ReminderRow::new(r, today))
        .collect::<Vec<_>>();
    println!();
    display_table(&rows, io::stdout().lock()).context("failed to output table")?;
    println!();
    println!("{}", style("Days until expiry").bold());
    crate::chart::display_chart(&session.days_remaining(), io::stdout().lock())
        .context("failed to output chart")?;
    Ok(())
}
