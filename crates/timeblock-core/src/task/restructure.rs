//! Task restructuring transitions.
//!
//! Applies exactly one of five named approaches to a single task,
//! producing a replacement task list:
//!
//! - `planning`: insert a planning step, mark the original as pending
//! - `breakdown`: replace the original with explicit subtasks
//! - `focus`: mark as multi-session and attach session metadata
//! - `iterative`: split into an exploration task and a remainder
//! - `fixed`: mark as a fixed-duration event
//!
//! Inputs are never mutated; all validation happens before the new list
//! is built, so a failed call leaves the caller's list untouched. The
//! markers written by `planning`, `focus`, and `fixed` are the literal
//! strings the large-task detector treats as exemptions.

use serde::{Deserialize, Serialize};

use super::{
    lenient_date, new_task_id, Task, FIXED_EVENT_MARKER, MULTI_SESSION_MARKER,
    PENDING_PLANNING_MARKER, REMAINING_WORK_MARKER,
};
use crate::error::RestructureError;

/// Parameters for the `planning` approach.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningParams {
    /// Name for the planning task; defaults to "Plan breakdown of: <name>"
    #[serde(default)]
    pub task_name: Option<String>,
    /// Due date for the planning task
    #[serde(default, deserialize_with = "lenient_date::deserialize")]
    pub date: Option<chrono::NaiveDate>,
    /// Estimated hours for the planning task
    #[serde(default = "default_planning_hours")]
    pub hours: f64,
}

/// One subtask in a `breakdown` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtaskSpec {
    pub name: String,
    pub hours: f64,
}

/// Parameters for the `breakdown` approach.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownParams {
    /// Replacement subtasks; must be non-empty
    #[serde(default)]
    pub subtasks: Vec<SubtaskSpec>,
}

/// Parameters for the `focus` approach.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusParams {
    /// Length of one focus session in hours
    #[serde(default = "default_session_length")]
    pub session_length: f64,
    /// Planned number of sessions
    #[serde(default)]
    pub num_sessions: i64,
    /// Whether to rename the task
    #[serde(default = "default_true")]
    pub update_name: bool,
    /// Replacement name; defaults to "<name> [MULTI-SESSION]"
    #[serde(default)]
    pub new_name: Option<String>,
}

/// Parameters for the `iterative` approach.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterativeParams {
    /// Hours for the initial exploration task
    #[serde(default = "default_exploration_hours")]
    pub exploration_hours: f64,
}

/// Parameters for the `fixed` approach.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedParams {
    /// Whether to rename the task
    #[serde(default = "default_true")]
    pub update_name: bool,
    /// Replacement name; defaults to "<name> [FIXED EVENT]"
    #[serde(default)]
    pub new_name: Option<String>,
}

// Default functions
fn default_planning_hours() -> f64 {
    1.0
}
fn default_session_length() -> f64 {
    2.0
}
fn default_exploration_hours() -> f64 {
    2.0
}
fn default_true() -> bool {
    true
}

impl Default for PlanningParams {
    fn default() -> Self {
        Self {
            task_name: None,
            date: None,
            hours: default_planning_hours(),
        }
    }
}

impl Default for FocusParams {
    fn default() -> Self {
        Self {
            session_length: default_session_length(),
            num_sessions: 0,
            update_name: true,
            new_name: None,
        }
    }
}

impl Default for IterativeParams {
    fn default() -> Self {
        Self {
            exploration_hours: default_exploration_hours(),
        }
    }
}

impl Default for FixedParams {
    fn default() -> Self {
        Self {
            update_name: true,
            new_name: None,
        }
    }
}

/// A restructuring strategy with its parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "approach", content = "params", rename_all = "lowercase")]
pub enum Approach {
    Planning(PlanningParams),
    Breakdown(BreakdownParams),
    Focus(FocusParams),
    Iterative(IterativeParams),
    Fixed(FixedParams),
}

impl Approach {
    /// Wire name of this approach.
    pub fn name(&self) -> &'static str {
        match self {
            Approach::Planning(_) => "planning",
            Approach::Breakdown(_) => "breakdown",
            Approach::Focus(_) => "focus",
            Approach::Iterative(_) => "iterative",
            Approach::Fixed(_) => "fixed",
        }
    }

    /// Parse the wire `{approach, params}` pair.
    ///
    /// A null params document is treated as an empty object so every
    /// approach can fall back to its defaults.
    pub fn from_parts(
        name: &str,
        params: serde_json::Value,
    ) -> Result<Self, RestructureError> {
        let params = if params.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            params
        };
        let invalid = |e: serde_json::Error| RestructureError::InvalidParams {
            approach: name.to_string(),
            message: e.to_string(),
        };

        match name {
            "planning" => Ok(Approach::Planning(
                serde_json::from_value(params).map_err(invalid)?,
            )),
            "breakdown" => Ok(Approach::Breakdown(
                serde_json::from_value(params).map_err(invalid)?,
            )),
            "focus" => Ok(Approach::Focus(
                serde_json::from_value(params).map_err(invalid)?,
            )),
            "iterative" => Ok(Approach::Iterative(
                serde_json::from_value(params).map_err(invalid)?,
            )),
            "fixed" => Ok(Approach::Fixed(
                serde_json::from_value(params).map_err(invalid)?,
            )),
            other => Err(RestructureError::InvalidApproach {
                name: other.to_string(),
            }),
        }
    }
}

/// Restructure the task with the given stable id.
///
/// Returns a new task list; the input is never mutated.
pub fn restructure(
    tasks: &[Task],
    task_id: &str,
    approach: &Approach,
) -> Result<Vec<Task>, RestructureError> {
    let index = tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or_else(|| RestructureError::TaskNotFound {
            id: task_id.to_string(),
        })?;
    apply(tasks, index, approach)
}

/// Restructure the task at a positional index.
///
/// This is the wire-format adapter for callers that address tasks by
/// position; core identity is the stable id (see [`restructure`]).
pub fn restructure_at(
    tasks: &[Task],
    index: usize,
    approach: &Approach,
) -> Result<Vec<Task>, RestructureError> {
    if index >= tasks.len() {
        return Err(RestructureError::IndexOutOfRange {
            index,
            len: tasks.len(),
        });
    }
    apply(tasks, index, approach)
}

fn apply(
    tasks: &[Task],
    index: usize,
    approach: &Approach,
) -> Result<Vec<Task>, RestructureError> {
    let original = &tasks[index];
    let name = original.display_name().to_string();

    match approach {
        Approach::Planning(params) => {
            let planning_name = params
                .task_name
                .clone()
                .unwrap_or_else(|| format!("Plan breakdown of: {name}"));
            let mut planning = Task::new(planning_name);
            planning.project = Some(
                original
                    .project
                    .clone()
                    .unwrap_or_else(|| "Planning".to_string()),
            );
            planning.estimated_hours = Some(params.hours);
            planning.due_date = params.date;
            planning.importance = 4;
            planning.complexity = 2;

            let mut next = tasks.to_vec();
            next[index].name = Some(format!("{name} {PENDING_PLANNING_MARKER}"));
            next.push(planning);
            Ok(next)
        }
        Approach::Breakdown(params) => {
            if params.subtasks.is_empty() {
                return Err(RestructureError::EmptySubtasks);
            }
            let mut next = tasks.to_vec();
            next.remove(index);
            for subtask in &params.subtasks {
                let mut replacement = original.clone();
                replacement.id = new_task_id();
                replacement.name = Some(subtask.name.clone());
                replacement.estimated_hours = Some(subtask.hours);
                next.push(replacement);
            }
            Ok(next)
        }
        Approach::Focus(params) => {
            let mut next = tasks.to_vec();
            let task = &mut next[index];
            if params.update_name {
                task.name = Some(
                    params
                        .new_name
                        .clone()
                        .unwrap_or_else(|| format!("{name} {MULTI_SESSION_MARKER}")),
                );
            }
            task.focus_sessions = Some(params.num_sessions);
            task.session_length_hours = Some(params.session_length);
            Ok(next)
        }
        Approach::Iterative(params) => {
            let hours =
                original
                    .estimated_hours
                    .ok_or_else(|| RestructureError::InvalidHours {
                        reason: format!("task '{name}' has no estimated hours"),
                    })?;
            if params.exploration_hours > hours {
                return Err(RestructureError::InvalidHours {
                    reason: format!(
                        "exploration hours ({}) exceed estimated hours ({})",
                        params.exploration_hours, hours
                    ),
                });
            }
            let project = format!("Iterative: {name}");

            let mut exploration = original.clone();
            exploration.id = new_task_id();
            exploration.project = Some(project.clone());
            exploration.name = Some(format!("Initial exploration: {name}"));
            exploration.estimated_hours = Some(params.exploration_hours);

            let mut remainder = original.clone();
            remainder.id = new_task_id();
            remainder.project = Some(project);
            remainder.name = Some(format!("{name} {REMAINING_WORK_MARKER}"));
            remainder.estimated_hours = Some(hours - params.exploration_hours);

            let mut next = tasks.to_vec();
            next.remove(index);
            next.push(exploration);
            next.push(remainder);
            Ok(next)
        }
        Approach::Fixed(params) => {
            let mut next = tasks.to_vec();
            let task = &mut next[index];
            if params.update_name {
                task.name = Some(
                    params
                        .new_name
                        .clone()
                        .unwrap_or_else(|| format!("{name} {FIXED_EVENT_MARKER}")),
                );
            }
            task.event_type = Some("Fixed Duration".to_string());
            Ok(next)
        }
    }
}
