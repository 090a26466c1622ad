use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::warn;

use crate::analytics::Insights;
use crate::cli::{Command, OutputFormat};
use crate::model::{Category, Status, TaskId};
use crate::store::TaskStore;
use crate::view;

/// Whether the session keeps reading commands after one has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command to the store and write what it renders.
pub fn dispatch(
    store: &mut TaskStore,
    command: Command,
    today: NaiveDate,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<Flow> {
    match command {
        Command::Add {
            name,
            category,
            status,
            hours,
        } => add_task(store, out, &name, category, today, status, hours),
        Command::Done { id } => set_status(store, out, id, true),
        Command::Undo { id } => set_status(store, out, id, false),
        Command::List => list(store, out, format),
        Command::Insights => insights(store, out, format),
        Command::Quit => return Ok(Flow::Quit),
    }?;
    Ok(Flow::Continue)
}

pub fn add_task(
    store: &mut TaskStore,
    out: &mut dyn Write,
    name: &str,
    category: Category,
    date: NaiveDate,
    status: Status,
    hours: f64,
) -> Result<()> {
    if store.add_task(name, category, date, status, hours).is_some() {
        writeln!(out, "{}", view::TASK_ADDED).context("Failed to write confirmation.")?;
    }
    Ok(())
}

pub fn set_status(store: &mut TaskStore, out: &mut dyn Write, id: TaskId, done: bool) -> Result<()> {
    if let Err(err) = store.set_status(id, done) {
        warn!(%id, "status change for unknown task");
        writeln!(out, "Error: {}", err).context("Failed to write error.")?;
    }
    Ok(())
}

pub fn list(store: &TaskStore, out: &mut dyn Write, format: OutputFormat) -> Result<()> {
    let snapshot = store.snapshot();
    let rendered = match format {
        OutputFormat::Plain => view::render_task_list(&snapshot),
        OutputFormat::Json => view::render_json(&snapshot).context("Failed to serialize tasks.")?,
    };
    out.write_all(rendered.as_bytes())
        .context("Failed to write task list.")
}

pub fn insights(store: &TaskStore, out: &mut dyn Write, format: OutputFormat) -> Result<()> {
    let snapshot = store.snapshot();
    let insights = Insights::compute(&snapshot);
    let rendered = match format {
        OutputFormat::Plain => view::render_insights(insights.as_ref()),
        OutputFormat::Json => {
            view::render_json(&insights).context("Failed to serialize insights.")?
        }
    };
    out.write_all(rendered.as_bytes())
        .context("Failed to write insights.")
}
