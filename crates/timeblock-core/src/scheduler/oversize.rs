//! Large-task detection.
//!
//! Flags tasks whose estimated duration exceeds a threshold and whose
//! name carries none of the exemption markers. Tasks missing a duration
//! or a name are skipped silently; inputs arrive from loosely-typed
//! storage and gaps are not errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// A task flagged as too large to schedule atomically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LargeTask {
    pub task_id: String,
    pub name: String,
    pub estimated_hours: f64,
    pub due_date: Option<NaiveDate>,
}

/// Scan tasks in input order for oversized, unmarked entries.
///
/// Returns the flagged records and one warning string per record.
pub fn detect_large_tasks(tasks: &[Task], threshold_hours: f64) -> (Vec<LargeTask>, Vec<String>) {
    let mut large_tasks = Vec::new();
    let mut warnings = Vec::new();

    for task in tasks {
        let (Some(hours), Some(name)) = (task.estimated_hours, task.name.as_deref()) else {
            continue;
        };

        if hours > threshold_hours && !task.has_exemption_marker() {
            large_tasks.push(LargeTask {
                task_id: task.id.clone(),
                name: name.to_string(),
                estimated_hours: hours,
                due_date: task.due_date,
            });
            warnings.push(format!(
                "Task '{name}' exceeds {threshold_hours} hours and should probably be split \
                 unless it's a Work Block."
            ));
        }
    }

    (large_tasks, warnings)
}
