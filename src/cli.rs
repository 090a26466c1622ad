use std::path::PathBuf;
use std::str::FromStr;

use humantime::parse_duration;
use structopt::clap::AppSettings;
use structopt::StructOpt;
use thiserror::Error;

use crate::model::{Category, Status, TaskId};

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid time '{0}': expected hours (e.g. 1.5) or a duration (e.g. 90m)")]
    InvalidHours(String),

    #[error("unbalanced quotes in command line")]
    UnbalancedQuotes,

    #[error("{0}")]
    Usage(String),

    #[error("unknown output format '{0}', expected plain or json")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

/// One line typed into a session.
#[derive(Debug, PartialEq, StructOpt)]
#[structopt(
    name = "tasklens",
    global_settings = &[AppSettings::ColorNever, AppSettings::DisableVersion]
)]
pub enum Command {
    /// Record a new task.
    Add {
        /// The task name.
        #[structopt()]
        name: String,

        /// academic, personal, learning, work or other.
        #[structopt(short, long, default_value = "academic")]
        category: Category,

        /// pending or done.
        #[structopt(short, long, default_value = "pending")]
        status: Status,

        /// Time taken, in hours (1.5) or as a duration (1h 30m).
        #[structopt(short = "t", long, default_value = "0", parse(try_from_str = parse_hours))]
        hours: f64,
    },
    /// Mark a task as done.
    Done {
        #[structopt()]
        id: TaskId,
    },
    /// Mark a task as pending again.
    Undo {
        #[structopt()]
        id: TaskId,
    },
    /// List all tasks of this session.
    List,
    /// Show productivity insights.
    Insights,
    /// End the session. Tasks are not kept.
    #[structopt(alias = "exit")]
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Command>, CliError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let words = shlex::split(line).ok_or(CliError::UnbalancedQuotes)?;
        let args = std::iter::once("tasklens".to_string()).chain(words);
        Command::from_iter_safe(args)
            .map(Some)
            .map_err(|err| CliError::Usage(err.message))
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tasklens",
    about = "A personal task ledger with productivity insights. Nothing is saved when the session ends."
)]
pub struct CommandLineArgs {
    /// Output format: plain or json.
    #[structopt(long, default_value = "plain", possible_values = &["plain", "json"])]
    pub format: OutputFormat,

    /// Log level, overridden by TASKLENS_LOG.
    #[structopt(long, default_value = "warn", possible_values = &["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Read commands from a file instead of standard input.
    #[structopt(parse(from_os_str), short = "f", long)]
    pub script: Option<PathBuf>,

    /// Do not print the prompt.
    #[structopt(short, long)]
    pub quiet: bool,
}

/// Hours as a plain non-negative number, or any humantime duration.
pub fn parse_hours(s: &str) -> Result<f64, CliError> {
    let s = s.trim();
    if let Ok(hours) = s.parse::<f64>() {
        return if hours.is_finite() && hours >= 0.0 {
            Ok(hours)
        } else {
            Err(CliError::InvalidHours(s.to_string()))
        };
    }

    parse_duration(s)
        .map(|duration| duration.as_secs_f64() / SECONDS_PER_HOUR)
        .map_err(|_| CliError::InvalidHours(s.to_string()))
}
