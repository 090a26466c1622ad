//! Derived productivity metrics.
//!
//! Every function here is a pure function of the snapshot it is given. The
//! numeric metrics assume a non-empty snapshot; [`Insights::compute`] applies
//! that guard once so callers can skip analytics on an empty ledger.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::trace;

use crate::model::{Category, Task};

/// Points awarded for the completion ratio.
const COMPLETION_WEIGHT: f64 = 70.0;
/// Points awarded for short completed tasks, before the time penalty.
const SPEED_WEIGHT: f64 = 30.0;
/// Points lost per hour of average completed-task time.
const SPEED_PENALTY_PER_HOUR: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Mean hours over done tasks; 0 when nothing is done.
    pub avg_time_completed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub pending: usize,
    pub done: usize,
    pub completed_percent: f64,
}

/// Per category figures, only for categories that have tasks, ordered by
/// category name.
pub type CategoryEfficiency = BTreeMap<Category, CategoryStats>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductiveDay {
    pub date: NaiveDate,
    pub completed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreTier {
    High,
    Mid,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> ScoreTier {
        if score >= 80.0 {
            ScoreTier::High
        } else if score >= 50.0 {
            ScoreTier::Mid
        } else {
            ScoreTier::Low
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            ScoreTier::High => "You showed up today Champ! That's enough",
            ScoreTier::Mid => "Doing well! Try to improve your daily consistency",
            ScoreTier::Low => "Productivity low, get up again, my friend!",
        }
    }
}

pub fn compute_summary(snapshot: &[Task]) -> Summary {
    let total = snapshot.len();
    let (completed, done_hours) = snapshot
        .iter()
        .filter(|task| task.is_done())
        .fold((0usize, 0.0f64), |(count, hours), task| {
            (count + 1, hours + task.time_taken)
        });
    let avg_time_completed = if completed == 0 {
        0.0
    } else {
        done_hours / completed as f64
    };

    Summary {
        total,
        completed,
        pending: total - completed,
        avg_time_completed,
    }
}

pub fn compute_category_efficiency(snapshot: &[Task]) -> CategoryEfficiency {
    let mut counts: BTreeMap<Category, (usize, usize)> = BTreeMap::new();
    for task in snapshot {
        let (pending, done) = counts.entry(task.category).or_default();
        if task.is_done() {
            *done += 1;
        } else {
            *pending += 1;
        }
    }

    counts
        .into_iter()
        .map(|(category, (pending, done))| {
            // Every entry holds at least one task.
            let percent = done as f64 / (done + pending) as f64 * 100.0;
            let stats = CategoryStats {
                pending,
                done,
                completed_percent: round_to_tenth(percent),
            };
            (category, stats)
        })
        .collect()
}

/// The date with the most completed tasks. Ties go to the earliest date.
pub fn compute_most_productive_day(snapshot: &[Task]) -> Option<ProductiveDay> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for task in snapshot.iter().filter(|task| task.is_done()) {
        *per_day.entry(task.date).or_default() += 1;
    }

    let mut best: Option<ProductiveDay> = None;
    for (date, completed) in per_day {
        match &best {
            Some(current) if current.completed >= completed => {}
            _ => best = Some(ProductiveDay { date, completed }),
        }
    }
    best
}

/// Composite 0 to 100 score: up to 70 points for the completion ratio and up
/// to 30 for a low average time per completed task.
///
/// `total` must be greater than zero.
pub fn compute_productivity_score(completed: usize, total: usize, avg_time_completed: f64) -> f64 {
    debug_assert!(total > 0, "productivity score of an empty ledger");
    let completion = completed as f64 / total as f64 * COMPLETION_WEIGHT;
    let speed =
        (SPEED_WEIGHT - (avg_time_completed * SPEED_PENALTY_PER_HOUR).min(SPEED_WEIGHT)).max(0.0);
    completion + speed
}

/// Everything the insights view shows, computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub summary: Summary,
    pub categories: CategoryEfficiency,
    pub most_productive_day: Option<ProductiveDay>,
    pub score: f64,
    pub tier: ScoreTier,
}

impl Insights {
    /// Returns `None` for an empty snapshot, where no metric is defined.
    pub fn compute(snapshot: &[Task]) -> Option<Insights> {
        if snapshot.is_empty() {
            return None;
        }

        let summary = compute_summary(snapshot);
        let score = compute_productivity_score(
            summary.completed,
            summary.total,
            summary.avg_time_completed,
        );
        trace!(
            total = summary.total,
            completed = summary.completed,
            score,
            "insights computed"
        );

        Some(Insights {
            categories: compute_category_efficiency(snapshot),
            most_productive_day: compute_most_productive_day(snapshot),
            tier: ScoreTier::from_score(score),
            score,
            summary,
        })
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
