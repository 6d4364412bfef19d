//! Greedy allocation of tasks into capacity slots.
//!
//! Walks priority-ordered tasks against date-sorted capacity slots,
//! consuming each slot's remaining hours. Slots are shared mutable state
//! across all tasks in the order they are processed: a lower-priority
//! task only sees capacity left after the tasks before it consumed
//! theirs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::window::FreeWindow;

/// A dated capacity slot, the allocator's working copy of a window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacitySlot {
    pub date: NaiveDate,
    /// Remaining hours; decremented as tasks consume capacity
    pub available_hours: f64,
}

/// One unit of work assigned from a task to a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    pub task_id: String,
    pub task_name: String,
    pub date: NaiveDate,
    /// Hours assigned; always positive
    pub allocated_hours: f64,
}

/// Build the allocator's working slots from caller windows.
///
/// Undated windows are dropped; the rest are stable-sorted ascending by
/// date, so same-date windows keep their input order as independent
/// slots.
pub fn to_slots(windows: &[FreeWindow]) -> Vec<CapacitySlot> {
    let mut slots: Vec<CapacitySlot> = windows
        .iter()
        .filter_map(|w| {
            w.date.map(|date| CapacitySlot {
                date,
                available_hours: w.available_hours,
            })
        })
        .collect();
    slots.sort_by_key(|s| s.date);
    slots
}

/// Allocate ranked tasks into slots, consuming slot capacity.
///
/// Per task: walk slots in date order, stop once nothing remains, and
/// stop outright at the first slot past the task's due date (slots are
/// sorted, so everything after is past due too). Tasks missing a name
/// or duration are skipped. A task with a due date that still has work
/// remaining afterwards produces a shortfall warning; the reported
/// number is the hours that did fit before the cutoff.
pub fn allocate(tasks: &[Task], slots: &mut [CapacitySlot]) -> (Vec<Allocation>, Vec<String>) {
    let mut allocations = Vec::new();
    let mut warnings = Vec::new();

    for task in tasks {
        let (Some(estimated), Some(name)) = (task.estimated_hours, task.name.as_deref()) else {
            continue;
        };

        let mut remaining = estimated;
        for slot in slots.iter_mut() {
            if remaining <= 0.0 {
                break;
            }
            if let Some(due) = task.due_date {
                if slot.date > due {
                    break;
                }
            }
            if slot.available_hours > 0.0 {
                let allocated = remaining.min(slot.available_hours);
                allocations.push(Allocation {
                    task_id: task.id.clone(),
                    task_name: name.to_string(),
                    date: slot.date,
                    allocated_hours: allocated,
                });
                slot.available_hours -= allocated;
                remaining -= allocated;
            }
        }

        if let Some(due) = task.due_date {
            if remaining > 0.0 {
                warnings.push(format!(
                    "HANDLE: {name} (Due: {due}) needs {estimated}h, but only {}h scheduled \
                     before due date.",
                    estimated - remaining
                ));
            }
        }
    }

    (allocations, warnings)
}
