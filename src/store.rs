use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::model::{Category, Status, Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The caller referred to a task it cannot have observed.
    #[error("unknown task identifier: {0}")]
    UnknownTask(TaskId),
}

/// The authoritative, ordered ledger of one session's tasks.
///
/// Tasks are only ever appended and their status toggled. Nothing is written
/// anywhere: dropping the store discards every task it holds.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> TaskStore {
        TaskStore::default()
    }

    /// Append a task at the end of the ledger and return its identifier.
    ///
    /// An empty name is dropped without a trace in the ledger and `None` is
    /// returned. Category, status and time are trusted as given; the caller's
    /// input mechanism constrains them.
    pub fn add_task(
        &mut self,
        name: &str,
        category: Category,
        date: NaiveDate,
        status: Status,
        time_taken: f64,
    ) -> Option<TaskId> {
        if name.is_empty() {
            debug!("dropping task with empty name");
            return None;
        }

        let id = TaskId::new(self.tasks.len() + 1);
        self.tasks.push(Task {
            id,
            name: name.to_string(),
            category,
            date,
            status,
            time_taken,
        });
        debug!(%id, %category, %status, time_taken, "task added");
        Some(id)
    }

    /// Mark a task done or pending. Setting the status it already has is a no-op.
    pub fn set_status(&mut self, id: TaskId, done: bool) -> Result<(), StoreError> {
        let task = id
            .index()
            .and_then(|index| self.tasks.get_mut(index))
            .ok_or(StoreError::UnknownTask(id))?;
        let status = Status::from_done(done);
        if task.status != status {
            debug!(%id, from = %task.status, to = %status, "task status changed");
            task.status = status;
        }
        Ok(())
    }

    /// An independent copy of all tasks in insertion order.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        id.index().and_then(|index| self.tasks.get(index))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
