//! Task priority ranking.
//!
//! Computes a sortable priority score per task from due-date proximity
//! and importance. Lower scores sort first: sooner due dates and higher
//! importance both lower the score, and complexity breaks ties (simpler
//! tasks first). The ranking is the sole scheduling order fed to the
//! allocator.

use chrono::NaiveDate;

use crate::task::Task;

/// Days-until-due substitute for undated tasks; pushes them to the back.
pub const UNDATED_DAYS_UNTIL_DUE: i64 = 9999;

/// Weight applied to importance when lowering the score.
pub const IMPORTANCE_WEIGHT: i64 = 5;

/// Days from `today` until the task's due date.
pub fn days_until_due(task: &Task, today: NaiveDate) -> i64 {
    match task.due_date {
        Some(due) => (due - today).num_days(),
        None => UNDATED_DAYS_UNTIL_DUE,
    }
}

/// Priority score: lower = scheduled sooner.
pub fn priority_score(task: &Task, today: NaiveDate) -> i64 {
    days_until_due(task, today) - task.importance * IMPORTANCE_WEIGHT
}

/// Return the tasks sorted ascending by (priority score, complexity).
///
/// The sort is stable, so input order is preserved on exact ties.
pub fn rank_by_priority(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    let mut ranked = tasks.to_vec();
    ranked.sort_by_key(|task| (priority_score(task, today), task.complexity));
    ranked
}
