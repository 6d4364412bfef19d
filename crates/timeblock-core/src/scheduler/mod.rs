//! Greedy scheduler for time-boxed tasks.
//!
//! This module orchestrates the full scheduling pass over a task list and
//! a set of free-time windows:
//! - Flags oversized tasks lacking an exemption marker
//! - Ranks tasks by due-date urgency, importance, and complexity
//! - Walks ranked tasks against chronologically sorted capacity slots,
//!   consuming capacity and collecting shortfall warnings
//! - Reconciles allocated vs. remaining hours into a daily summary
//!
//! The whole pass is a pure function of its two input lists; the working
//! slot vector is the only mutable state and is private per call.

pub mod allocate;
pub mod oversize;
pub mod rank;
pub mod summary;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::window::FreeWindow;
use allocate::Allocation;
use oversize::LargeTask;
use summary::DailySummaryEntry;

/// Warning emitted when there is nothing to schedule.
pub const NO_INPUT_WARNING: &str = "No tasks or free time available for scheduling.";

/// Scheduler configuration.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Reference date for due-date urgency; injected for determinism
    pub today: NaiveDate,
    /// Duration above which an unmarked task is flagged as too large
    pub large_task_threshold_hours: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            today: chrono::Utc::now().date_naive(),
            large_task_threshold_hours: 6.0,
        }
    }
}

/// Full output of one scheduling pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// Sum of available hours over the original windows
    pub total_free_hours: f64,
    /// Sum of estimated hours over the original tasks
    pub total_task_hours: f64,
    /// Per-window work assignments in the order they were made
    pub allocations: Vec<Allocation>,
    /// Per-date remaining capacity and scheduled hours
    pub daily_summary: Vec<DailySummaryEntry>,
    /// Human-readable warnings (oversized tasks, then shortfalls)
    pub warnings: Vec<String>,
    /// Tasks flagged as too large to schedule atomically
    pub large_tasks: Vec<LargeTask>,
}

/// Greedy scheduler over tasks and free-time windows.
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// Create a new scheduler with default config.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    /// Create with custom config.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Run one scheduling pass.
    ///
    /// Empty tasks or windows short-circuit into a plan holding only the
    /// fixed degenerate-input warning. Otherwise totals are computed over
    /// the unmutated inputs before allocation consumes any capacity.
    pub fn schedule(&self, tasks: &[Task], windows: &[FreeWindow]) -> SchedulePlan {
        if tasks.is_empty() || windows.is_empty() {
            return SchedulePlan {
                warnings: vec![NO_INPUT_WARNING.to_string()],
                ..Default::default()
            };
        }

        let total_free_hours = windows.iter().map(|w| w.available_hours).sum();
        let total_task_hours = tasks.iter().filter_map(|t| t.estimated_hours).sum();

        let (large_tasks, mut warnings) =
            oversize::detect_large_tasks(tasks, self.config.large_task_threshold_hours);

        let ranked = rank::rank_by_priority(tasks, self.config.today);
        let mut slots = allocate::to_slots(windows);
        let (allocations, shortfalls) = allocate::allocate(&ranked, &mut slots);
        warnings.extend(shortfalls);

        let daily_summary = summary::daily_summary(&slots, &allocations);

        SchedulePlan {
            total_free_hours,
            total_task_hours,
            allocations,
            daily_summary,
            warnings,
            large_tasks,
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to schedule with the default config.
pub fn schedule(tasks: &[Task], windows: &[FreeWindow]) -> SchedulePlan {
    Scheduler::new().schedule(tasks, windows)
}
