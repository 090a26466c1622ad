//! Rendering of tasks and insights. Nothing in here touches the store.

use prettytable::Table;
use serde::Serialize;

use crate::analytics::{CategoryEfficiency, Insights};
use crate::model::Task;

/// Width at which long task names wrap inside the task table.
const NAME_WIDTH: usize = 40;
const DAY_FORMAT: &str = "%d %b %Y";

pub const EMPTY_HINT: &str = "No tasks yet, start by adding one!";
pub const TASK_ADDED: &str = "Task added successfully";

/// Hours the way the task list shows them: always with a decimal part.
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.1} hrs", hours)
    } else {
        format!("{} hrs", hours)
    }
}

pub fn task_table(snapshot: &[Task]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["id", "done", "task", "category", "time"]);
    for task in snapshot {
        let mark = if task.is_done() { "[x]" } else { "[ ]" };
        table.add_row(row![
            task.id,
            mark,
            textwrap::fill(&task.name, NAME_WIDTH),
            task.category,
            format_hours(task.time_taken)
        ]);
    }
    table
}

pub fn category_table(efficiency: &CategoryEfficiency) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Category", "Pending", "Done", "Completed %"]);
    for (category, stats) in efficiency {
        table.add_row(row![
            category,
            stats.pending,
            stats.done,
            format!("{:.1}", stats.completed_percent)
        ]);
    }
    table
}

pub fn render_task_list(snapshot: &[Task]) -> String {
    if snapshot.is_empty() {
        return format!("{}\n", EMPTY_HINT);
    }
    task_table(snapshot).to_string()
}

pub fn render_insights(insights: Option<&Insights>) -> String {
    let insights = match insights {
        Some(insights) => insights,
        None => return format!("{}\n", EMPTY_HINT),
    };
    let summary = &insights.summary;

    let mut out = String::new();
    out.push_str("Productivity Insights\n");
    out.push_str(&format!("Total tasks: {}\n", summary.total));
    out.push_str(&format!("Completed tasks: {}\n", summary.completed));
    out.push_str(&format!("Pending tasks: {}\n", summary.pending));
    out.push_str(&format!(
        "Average time per completed task: {:.2} hrs\n",
        summary.avg_time_completed
    ));

    out.push_str("\nCategory Efficiency\n");
    out.push_str(&category_table(&insights.categories).to_string());

    if let Some(day) = &insights.most_productive_day {
        out.push_str(&format!(
            "Most productive day: {} ({} tasks completed)\n",
            day.date.format(DAY_FORMAT),
            day.completed
        ));
    }

    out.push_str(&format!("Productivity Score: {:.1} / 100\n", insights.score));
    out.push_str(insights.tier.message());
    out.push('\n');
    out
}

/// JSON document for any view-model, followed by a newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Status, TaskId};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn task(position: usize, name: &str, category: Category, status: Status, hours: f64) -> Task {
        Task {
            id: TaskId::new(position),
            name: name.to_string(),
            category,
            date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            status,
            time_taken: hours,
        }
    }

    #[test]
    fn hours_keep_a_decimal_part() {
        assert_eq!(format_hours(2.0), "2.0 hrs");
        assert_eq!(format_hours(0.0), "0.0 hrs");
        assert_eq!(format_hours(1.25), "1.25 hrs");
    }

    #[test]
    fn empty_views_show_the_hint() {
        assert_eq!(render_task_list(&[]), format!("{}\n", EMPTY_HINT));
        assert_eq!(render_insights(None), format!("{}\n", EMPTY_HINT));
    }

    #[test]
    fn task_list_has_one_row_per_task() {
        let tasks = vec![
            task(1, "Write report", Category::Work, Status::Done, 2.0),
            task(2, "Read chapter", Category::Academic, Status::Pending, 0.5),
        ];

        let table = task_table(&tasks);
        assert_eq!(table.len(), 2);

        let rendered = render_task_list(&tasks);
        assert!(rendered.contains("Write report"));
        assert!(rendered.contains("[x]"));
        assert!(rendered.contains("[ ]"));
        assert!(rendered.contains("0.5 hrs"));
    }

    #[test]
    fn insights_show_every_section() {
        let tasks = vec![
            task(1, "Write report", Category::Work, Status::Done, 2.0),
            task(2, "Read chapter", Category::Academic, Status::Pending, 0.0),
        ];
        let insights = Insights::compute(&tasks).unwrap();

        let rendered = render_insights(Some(&insights));

        assert!(rendered.contains("Total tasks: 2\n"));
        assert!(rendered.contains("Completed tasks: 1\n"));
        assert!(rendered.contains("Pending tasks: 1\n"));
        assert!(rendered.contains("Average time per completed task: 2.00 hrs\n"));
        assert!(rendered.contains("50.0"));
        assert!(rendered.contains("Most productive day: 07 Jan 2024 (1 tasks completed)\n"));
        assert!(rendered.contains("Productivity Score: 61.0 / 100\n"));
        assert!(rendered.ends_with("Doing well! Try to improve your daily consistency\n"));
    }

    #[test]
    fn insights_without_done_tasks_skip_the_productive_day() {
        let tasks = vec![task(1, "Plan", Category::Other, Status::Pending, 1.0)];
        let insights = Insights::compute(&tasks).unwrap();

        let rendered = render_insights(Some(&insights));

        assert!(!rendered.contains("Most productive day"));
        assert!(rendered.contains("Productivity Score: 30.0 / 100\n"));
        assert!(rendered.contains("Productivity low"));
    }

    #[test]
    fn json_uses_category_names_as_keys() {
        let tasks = vec![task(1, "Write report", Category::Work, Status::Done, 2.0)];
        let insights = Insights::compute(&tasks).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&render_json(&insights).unwrap()).unwrap();

        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["categories"]["Work"]["completed_percent"], 100.0);
        assert_eq!(value["most_productive_day"]["date"], "2024-01-07");
        assert_eq!(value["score"], 96.0);
        assert_eq!(value["tier"], "High");
    }
}
