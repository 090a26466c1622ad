use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// The fixed set of categories a task can be filed under.
///
/// Variants are declared in name order so that the derived `Ord` sorts
/// categories by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Academic,
    Learning,
    Other,
    Personal,
    Work,
}

impl Category {
    /// All categories, in the order they are offered for input.
    pub const ALL: [Category; 5] = [
        Category::Academic,
        Category::Personal,
        Category::Learning,
        Category::Work,
        Category::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Academic => "Academic",
            Category::Learning => "Learning",
            Category::Other => "Other",
            Category::Personal => "Personal",
            Category::Work => "Work",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseChoiceError::new("category", s, &Category::ALL))
    }
}

/// Completion state of a task. The only field of a task that changes after
/// it has been recorded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    #[default]
    Pending,
    Done,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Pending, Status::Done];

    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Done => "Done",
        }
    }

    pub const fn from_done(done: bool) -> Status {
        if done {
            Status::Done
        } else {
            Status::Pending
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseChoiceError::new("status", s, &Status::ALL))
    }
}

/// A value outside one of the fixed choice sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseChoiceError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl ParseChoiceError {
    fn new<T: fmt::Display>(kind: &'static str, value: &str, choices: &[T]) -> Self {
        let expected = choices
            .iter()
            .map(|choice| choice.to_string().to_lowercase())
            .collect::<Vec<_>>()
            .join(", ");
        ParseChoiceError {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

/// Identity of a task: its 1-based position in the store. Tasks are never
/// removed or reordered, so a position stays valid for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(usize);

impl TaskId {
    pub const fn new(position: usize) -> TaskId {
        TaskId(position)
    }

    pub const fn position(self) -> usize {
        self.0
    }

    /// Index into the store's backing sequence, `None` for position 0.
    pub(crate) fn index(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TaskId)
    }
}

/// A single recorded unit of work.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub category: Category,
    pub date: NaiveDate,
    pub status: Status,
    /// Hours spent, never negative.
    pub time_taken: f64,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}
