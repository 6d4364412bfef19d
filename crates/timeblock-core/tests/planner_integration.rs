//! End-to-end scheduling scenarios.
//!
//! Exercises the full pass (detection, ranking, allocation, summary)
//! through the public API with a fixed reference date.

use chrono::NaiveDate;
use timeblock_core::{FreeWindow, Scheduler, SchedulerConfig, Task};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn make_task(name: &str, hours: f64, due: Option<&str>, importance: i64, complexity: i64) -> Task {
    let mut task = Task::new(name);
    task.estimated_hours = Some(hours);
    task.due_date = due.map(|d| date(d));
    task.importance = importance;
    task.complexity = complexity;
    task
}

fn window(d: &str, hours: f64) -> FreeWindow {
    FreeWindow::new(date(d), hours)
}

fn planner(today: &str) -> Scheduler {
    Scheduler::with_config(SchedulerConfig {
        today: date(today),
        ..Default::default()
    })
}

#[test]
fn single_task_fits_before_due_date() {
    let tasks = vec![make_task("A", 3.0, Some("2025-03-12"), 1, 1)];
    let windows = vec![window("2025-03-11", 5.0)];

    let plan = planner("2025-03-10").schedule(&tasks, &windows);

    assert_eq!(plan.allocations.len(), 1);
    assert_eq!(plan.allocations[0].task_name, "A");
    assert_eq!(plan.allocations[0].date, date("2025-03-11"));
    assert_eq!(plan.allocations[0].allocated_hours, 3.0);
    assert!(plan.warnings.is_empty());
    assert!(plan.large_tasks.is_empty());
    assert_eq!(plan.total_free_hours, 5.0);
    assert_eq!(plan.total_task_hours, 3.0);
}

#[test]
fn large_undated_task_is_flagged() {
    let tasks = vec![make_task("Big", 8.0, None, 0, 0)];
    let windows = vec![window("2025-03-11", 10.0)];

    let plan = planner("2025-03-10").schedule(&tasks, &windows);

    assert_eq!(plan.large_tasks.len(), 1);
    assert_eq!(plan.large_tasks[0].name, "Big");
    assert_eq!(plan.large_tasks[0].estimated_hours, 8.0);
    assert!(plan.warnings.contains(
        &"Task 'Big' exceeds 6 hours and should probably be split unless it's a Work Block."
            .to_string()
    ));
    // Flagged tasks are still scheduled
    assert_eq!(plan.allocations.len(), 1);
    assert_eq!(plan.allocations[0].allocated_hours, 8.0);
}

#[test]
fn marked_large_task_is_not_flagged() {
    let tasks = vec![make_task("Conference day [FIXED EVENT]", 9.0, None, 0, 0)];
    let windows = vec![window("2025-03-11", 10.0)];

    let plan = planner("2025-03-10").schedule(&tasks, &windows);
    assert!(plan.large_tasks.is_empty());
    assert!(plan.warnings.is_empty());
}

#[test]
fn empty_inputs_return_fixed_warning_only() {
    let plan = planner("2025-03-10").schedule(&[], &[]);

    assert!(plan.allocations.is_empty());
    assert_eq!(
        plan.warnings,
        vec!["No tasks or free time available for scheduling.".to_string()]
    );
    assert!(plan.large_tasks.is_empty());
    assert!(plan.daily_summary.is_empty());
    assert_eq!(plan.total_free_hours, 0.0);
    assert_eq!(plan.total_task_hours, 0.0);
}

#[test]
fn overdue_task_emits_shortfall_and_no_allocations() {
    let tasks = vec![make_task("Report", 5.0, Some("2025-03-09"), 2, 1)];
    let windows = vec![window("2025-03-11", 8.0)];

    let plan = planner("2025-03-10").schedule(&tasks, &windows);

    assert!(plan.allocations.is_empty());
    assert_eq!(
        plan.warnings,
        vec![
            "HANDLE: Report (Due: 2025-03-09) needs 5h, but only 0h scheduled before due date."
                .to_string()
        ]
    );
    // Capacity untouched, summary reflects it
    assert_eq!(plan.daily_summary.len(), 1);
    assert_eq!(plan.daily_summary[0].total_available, 8.0);
    assert_eq!(plan.daily_summary[0].total_scheduled, 0.0);
}

#[test]
fn sooner_due_task_wins_scarce_capacity() {
    let tasks = vec![
        make_task("relaxed", 3.0, Some("2025-03-20"), 1, 1),
        make_task("pressing", 3.0, Some("2025-03-12"), 1, 1),
    ];
    let windows = vec![window("2025-03-11", 3.0)];

    let plan = planner("2025-03-10").schedule(&tasks, &windows);

    assert_eq!(plan.allocations.len(), 1);
    assert_eq!(plan.allocations[0].task_name, "pressing");
    // The loser still had a due date, so it reports a shortfall
    assert_eq!(
        plan.warnings,
        vec![
            "HANDLE: relaxed (Due: 2025-03-20) needs 3h, but only 0h scheduled before due date."
                .to_string()
        ]
    );
}

#[test]
fn allocation_spans_windows_and_respects_due_cutoff() {
    let tasks = vec![make_task("Thesis", 6.0, Some("2025-03-12"), 2, 2)];
    let windows = vec![
        window("2025-03-11", 2.0),
        window("2025-03-12", 2.0),
        window("2025-03-13", 10.0),
    ];

    let plan = planner("2025-03-10").schedule(&tasks, &windows);

    // Only the two windows up to the due date are usable
    assert_eq!(plan.allocations.len(), 2);
    assert!(plan
        .allocations
        .iter()
        .all(|a| a.date <= date("2025-03-12")));
    assert_eq!(
        plan.warnings,
        vec![
            "HANDLE: Thesis (Due: 2025-03-12) needs 6h, but only 4h scheduled before due date."
                .to_string()
        ]
    );

    // Post-due capacity shows up untouched in the summary
    let last = plan.daily_summary.last().unwrap();
    assert_eq!(last.date, date("2025-03-13"));
    assert_eq!(last.total_available, 10.0);
    assert_eq!(last.total_scheduled, 0.0);
}

#[test]
fn duplicate_date_windows_merge_in_summary_only() {
    let tasks = vec![make_task("A", 3.0, None, 0, 0)];
    let windows = vec![window("2025-03-11", 2.0), window("2025-03-11", 2.0)];

    let plan = planner("2025-03-10").schedule(&tasks, &windows);

    // Consumed as independent slots: 2h from the first, 1h from the second
    assert_eq!(plan.allocations.len(), 2);
    assert_eq!(plan.allocations[0].allocated_hours, 2.0);
    assert_eq!(plan.allocations[1].allocated_hours, 1.0);

    // One summary entry for the date
    assert_eq!(plan.daily_summary.len(), 1);
    assert_eq!(plan.daily_summary[0].total_available, 1.0);
    assert_eq!(plan.daily_summary[0].total_scheduled, 3.0);
}

#[test]
fn undated_task_ranks_behind_dated_tasks() {
    let tasks = vec![
        make_task("someday", 2.0, None, 0, 0),
        make_task("dated", 2.0, Some("2025-03-15"), 0, 0),
    ];
    let windows = vec![window("2025-03-11", 2.0)];

    let plan = planner("2025-03-10").schedule(&tasks, &windows);

    assert_eq!(plan.allocations.len(), 1);
    assert_eq!(plan.allocations[0].task_name, "dated");
    // Undated tasks are never subject to the shortfall check
    assert!(plan.warnings.is_empty());
}

#[test]
fn schedule_is_idempotent() {
    let tasks = vec![
        make_task("A", 4.0, Some("2025-03-12"), 2, 1),
        make_task("B", 8.0, None, 0, 3),
        make_task("C", 1.5, Some("2025-03-11"), 1, 0),
    ];
    let windows = vec![
        window("2025-03-11", 3.0),
        window("2025-03-12", 3.0),
        window("2025-03-14", 6.0),
    ];

    let planner = planner("2025-03-10");
    let first = serde_json::to_value(planner.schedule(&tasks, &windows)).unwrap();
    let second = serde_json::to_value(planner.schedule(&tasks, &windows)).unwrap();
    assert_eq!(first, second);
}
