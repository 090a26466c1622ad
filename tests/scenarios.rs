//! End-to-end behavior of the ledger and its metrics.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tasklens::analytics::{
    compute_category_efficiency, compute_most_productive_day, compute_productivity_score,
    compute_summary, CategoryStats, Insights, ProductiveDay, ScoreTier, Summary,
};
use tasklens::cli::OutputFormat;
use tasklens::model::{Category, Status, TaskId};
use tasklens::session::Session;
use tasklens::store::{StoreError, TaskStore};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

#[test]
fn single_done_task_scores_96() {
    let mut store = TaskStore::new();
    store.add_task("Write report", Category::Work, date(4, 2), Status::Done, 2.0);

    let summary = compute_summary(&store.snapshot());
    assert_eq!(
        summary,
        Summary {
            total: 1,
            completed: 1,
            pending: 0,
            avg_time_completed: 2.0,
        }
    );

    let score = compute_productivity_score(
        summary.completed,
        summary.total,
        summary.avg_time_completed,
    );
    assert_eq!(score, 96.0);
    assert_eq!(ScoreTier::from_score(score), ScoreTier::High);
}

#[test]
fn category_efficiency_of_mixed_tasks() {
    let mut store = TaskStore::new();
    store.add_task("A", Category::Work, date(4, 2), Status::Pending, 0.0);
    store.add_task("B", Category::Work, date(4, 2), Status::Done, 1.0);
    store.add_task("C", Category::Personal, date(4, 2), Status::Done, 3.0);

    let efficiency = compute_category_efficiency(&store.snapshot());

    assert_eq!(efficiency.len(), 2);
    assert_eq!(
        efficiency[&Category::Work],
        CategoryStats {
            pending: 1,
            done: 1,
            completed_percent: 50.0,
        }
    );
    assert_eq!(
        efficiency[&Category::Personal],
        CategoryStats {
            pending: 0,
            done: 1,
            completed_percent: 100.0,
        }
    );
}

#[test]
fn busiest_completion_day_wins() {
    let mut store = TaskStore::new();
    store.add_task("one", Category::Learning, date(4, 1), Status::Done, 1.0);
    store.add_task("two", Category::Learning, date(4, 2), Status::Done, 1.0);
    store.add_task("three", Category::Learning, date(4, 2), Status::Done, 1.0);

    assert_eq!(
        compute_most_productive_day(&store.snapshot()),
        Some(ProductiveDay {
            date: date(4, 2),
            completed: 2,
        })
    );
}

#[test]
fn toggling_unknown_id_is_rejected() {
    let mut store = TaskStore::new();
    store.add_task("only", Category::Other, date(4, 1), Status::Pending, 0.0);
    let before = store.snapshot();

    let err = store.set_status(TaskId::new(7), true).unwrap_err();

    assert_eq!(err, StoreError::UnknownTask(TaskId::new(7)));
    assert_eq!(err.to_string(), "unknown task identifier: 7");
    assert_eq!(store.snapshot(), before);
}

#[test]
fn empty_name_is_not_recorded() {
    let mut store = TaskStore::new();
    store.add_task("kept", Category::Academic, date(4, 1), Status::Pending, 0.0);

    assert_eq!(store.add_task("", Category::Academic, date(4, 1), Status::Done, 1.0), None);
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn completion_percent_stays_within_bounds() {
    let mut store = TaskStore::new();
    for (i, category) in Category::ALL.iter().enumerate() {
        for j in 0..=i {
            let status = if j % 2 == 0 { Status::Done } else { Status::Pending };
            store.add_task("t", *category, date(5, 1), status, j as f64);
        }
    }

    for stats in compute_category_efficiency(&store.snapshot()).values() {
        assert!((0.0..=100.0).contains(&stats.completed_percent));
    }
}

#[test]
fn session_shows_insights_for_a_day_of_work() {
    let mut session = Session::new(OutputFormat::Plain).with_clock(|| date(3, 15));
    let mut out = Vec::new();
    session
        .run(
            "add \"Write report\" -c work -s done -t 2\n\
             add \"Read paper\" -c academic -t 30m\n\
             done 2\n\
             insights\n"
                .as_bytes(),
            &mut out,
        )
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    // Two done tasks averaging 1.25 hours: 70 + (30 - 2.5).
    assert!(out.contains("Total tasks: 2\n"));
    assert!(out.contains("Completed tasks: 2\n"));
    assert!(out.contains("Average time per completed task: 1.25 hrs\n"));
    assert!(out.contains("Most productive day: 15 Mar 2024 (2 tasks completed)\n"));
    assert!(out.contains("Productivity Score: 97.5 / 100\n"));
    assert!(out.contains("You showed up today Champ!"));

    let insights = Insights::compute(&session.store().snapshot()).unwrap();
    assert_eq!(insights.score, 97.5);
}
