use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::cli::{Command, OutputFormat};
use crate::interface::{self, Flow};
use crate::store::TaskStore;

const PROMPT: &str = "tasklens> ";

/// One user's session: its own task store and the loop that feeds it.
///
/// Sessions never share a store, and the store lives exactly as long as the
/// session.
pub struct Session {
    store: TaskStore,
    format: OutputFormat,
    prompt: bool,
    today: Box<dyn Fn() -> NaiveDate>,
}

impl Session {
    pub fn new(format: OutputFormat) -> Session {
        Session {
            store: TaskStore::new(),
            format,
            prompt: false,
            today: Box::new(|| Local::now().date_naive()),
        }
    }

    /// Print a prompt before reading each line.
    pub fn with_prompt(mut self, prompt: bool) -> Session {
        self.prompt = prompt;
        self
    }

    /// Replace the clock that dates newly added tasks.
    pub fn with_clock(mut self, today: impl Fn() -> NaiveDate + 'static) -> Session {
        self.today = Box::new(today);
        self
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Run one input line. Parse errors are reported on `out` and the
    /// session continues.
    pub fn execute(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let command = match Command::parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                debug!(%err, "rejected command line");
                writeln!(out, "{}", err).context("Failed to write error.")?;
                return Ok(Flow::Continue);
            }
        };
        let today = (self.today)();
        interface::dispatch(&mut self.store, command, today, self.format, out)
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R, out: &mut dyn Write) -> Result<()> {
        info!("session started");
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "{}", PROMPT).context("Failed to write prompt.")?;
                out.flush().context("Failed to flush prompt.")?;
            }
            let line = match lines.next() {
                Some(line) => line.context("Failed to read command.")?,
                None => break,
            };
            if self.execute(&line, out)? == Flow::Quit {
                break;
            }
        }
        info!(tasks = self.store.len(), "session ended, tasks discarded");
        Ok(())
    }
}
