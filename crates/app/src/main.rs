mod practice;
mod render;

use std::fmt;
use std::io::{self, Write};

use interview_core::model::JobTitle;
use interview_core::{generate, question_bank};
use services::{Clock, InterviewFlow};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingJobTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingJobTitle => {
                write!(f, "a non-empty --job-title (or INTERVIEW_JOB_TITLE) is required")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  interview practice  [--job-title <title>] [--json] [--log <level>]");
    eprintln!("  interview questions --job-title <title> [--json] [--log <level>]");
    eprintln!();
    eprintln!(
        "During practice, type {} to go back and {} to stop.",
        practice::BACK_COMMAND,
        practice::QUIT_COMMAND
    );
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  INTERVIEW_JOB_TITLE, INTERVIEW_JSON=1, INTERVIEW_LOG (default: warn), RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Practice,
    Questions,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "practice" => Some(Self::Practice),
            "questions" => Some(Self::Questions),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    job_title: Option<String>,
    json: bool,
    log_level: String,
}

impl Args {
    fn from_env() -> Self {
        Self {
            job_title: std::env::var("INTERVIEW_JOB_TITLE").ok(),
            json: std::env::var("INTERVIEW_JSON")
                .is_ok_and(|value| matches!(value.trim(), "1" | "true" | "yes")),
            log_level: std::env::var("INTERVIEW_LOG").unwrap_or_else(|_| "warn".into()),
        }
    }

    /// Flags override values taken from the environment.
    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--job-title" => self.job_title = Some(require_value(args, "--job-title")?),
                "--json" => self.json = true,
                "--log" => self.log_level = require_value(args, "--log")?,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(self)
    }
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: practice when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Practice,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Practice,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };
    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let args = Args::from_env()
        .parse(&mut argv.into_iter())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    init_tracing(&args.log_level);
    info!(?cmd, "starting v{}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cmd {
        Command::Questions => {
            let title = args
                .job_title
                .as_deref()
                .map(JobTitle::parse)
                .and_then(Result::ok)
                .ok_or(ArgsError::MissingJobTitle)?;
            let questions = generate(&title);
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&questions)?)?;
            } else {
                let track = question_bank::role_track(&title);
                write!(out, "{}", render::question_list(title.as_str(), track, &questions))?;
            }
        }
        Command::Practice => {
            let mut flow = InterviewFlow::new(Clock::default());
            let stdin = io::stdin();
            let report = practice::run(
                &mut flow,
                args.job_title.as_deref(),
                &mut stdin.lock(),
                &mut out,
            )?;
            match report {
                Some(report) if args.json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
                }
                Some(report) => write!(out, "{}", render::report(&report))?,
                None => info!("session ended before completion"),
            }
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Args {
        Args {
            job_title: None,
            json: false,
            log_level: "warn".into(),
        }
    }

    fn argv(items: &[&str]) -> impl Iterator<Item = String> {
        items
            .iter()
            .map(|s| (*s).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = args()
            .parse(&mut argv(&["--job-title", "Analista de Marketing", "--json", "--log", "debug"]))
            .unwrap();
        assert_eq!(parsed.job_title.as_deref(), Some("Analista de Marketing"));
        assert!(parsed.json);
        assert_eq!(parsed.log_level, "debug");
    }

    #[test]
    fn missing_flag_value_is_reported() {
        let err = args().parse(&mut argv(&["--job-title"])).unwrap_err();
        assert!(matches!(err, ArgsError::MissingValue { flag: "--job-title" }));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = args().parse(&mut argv(&["--db"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --db");
    }

    #[test]
    fn subcommands_parse() {
        assert_eq!(Command::from_arg("practice"), Some(Command::Practice));
        assert_eq!(Command::from_arg("questions"), Some(Command::Questions));
        assert_eq!(Command::from_arg("ui"), None);
    }
}
