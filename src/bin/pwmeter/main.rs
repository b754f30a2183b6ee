use std::path::PathBuf;
use std::process;

use clap::Parser;

use pwmeter::password_generation::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

mod chart;
mod menu;
mod prompt;
mod report;
mod table;

#[derive(Parser)]
#[command(about = "Check password strength, generate passwords, and track expiry reminders.")]
struct Args {
    /// Directory that exported files are written to.
    #[arg(long, global = true, env = "PWMETER_EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,
    /// Disable colours.
    #[arg(long, global = true, env = "PWMETER_PLAIN")]
    plain: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Start an interactive session (the default). History and reminders last until you quit.
    Session,
    /// Score a single password.
    Check {
        /// The password to check. Prompted for (without echo) if not given.
        #[arg(long)]
        password: Option<String>,
    },
    /// Print freshly generated passwords.
    #[command(alias = "gen")]
    Generate {
        #[arg(long, default_value_t = DEFAULT_LENGTH, value_parser = parse_length)]
        length: usize,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    if args.plain {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    log::debug!("exports go to {}", args.export_dir.display());

    match args.command.unwrap_or(Command::Session) {
        Command::Session => menu::run_session(&args.export_dir)?,
        Command::Check { password } => check_once(password)?,
        Command::Generate { length, count } => {
            let mut rng = rand::thread_rng();
            for _ in 0..count {
                let password =
                    pwmeter::password_generation::generate_strong_password(&mut rng, length);
                println!("{}", password);
            }
        }
    }

    Ok(())
}

fn check_once(password: Option<String>) -> Result<(), ProgError> {
    let password = match password {
        Some(p) => pwmeter::Secret::from(p),
        None => prompt::read_password()?,
    };
    if pwmeter::denylist::is_common_password(password.as_str()) {
        return Err(ProgError::Rejected(pwmeter::Rejection::Common));
    }
    let report = pwmeter::check_password_strength(password.as_str());
    report::print_report(&report);
    Ok(())
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s.parse().map_err(|err| format!("{err}"))?;
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(format!("length must be between {MIN_LENGTH} and {MAX_LENGTH}"))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("{}", console::style(format!("Error: {err:?}")).red());
            process::exit(2);
        }
        Err(err) => {
            eprintln!("{}", console::style(err).red());
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("{0}")]
    Rejected(pwmeter::Rejection),
    #[error("No passwords to export.")]
    NothingToExport,
    #[error("{0:?} is not a date; expected YYYY-MM-DD.")]
    InvalidDate(String),
    #[error("{0}")]
    Meter(pwmeter::MeterError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<pwmeter::MeterError> for ProgError {
    fn from(err: pwmeter::MeterError) -> ProgError {
        ProgError::Meter(err)
    }
}

impl From<pwmeter::Rejection> for ProgError {
    fn from(err: pwmeter::Rejection) -> ProgError {
        ProgError::Rejected(err)
    }
}
