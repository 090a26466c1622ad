use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{anyhow, Context};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use tasklens::cli::CommandLineArgs;
use tasklens::session::Session;

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("TASKLENS_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow!("Failed to initialize logging: {}", error))
}

fn main() -> anyhow::Result<()> {
    // Get the command-line arguments.
    let CommandLineArgs {
        format,
        log_level,
        script,
        quiet,
    } = CommandLineArgs::from_args();

    init_tracing(&log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Read from the script if one was given, otherwise interactively.
    match script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}.", path.display()))?;
            Session::new(format).run(BufReader::new(file), &mut out)
        }
        None => {
            let stdin = io::stdin();
            Session::new(format)
                .with_prompt(!quiet)
                .run(stdin.lock(), &mut out)
        }
    }
}
