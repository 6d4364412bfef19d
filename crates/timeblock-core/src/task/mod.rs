//! Task records and name markers.
//!
//! Tasks arrive from loosely-typed external storage, so every descriptive
//! field is optional and dates deserialize leniently (an unparseable date
//! becomes `None` rather than an error). Restructuring state is carried as
//! bracketed markers embedded in the task name plus explicit optional
//! metadata fields.

pub mod restructure;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marker applied by the `focus` restructuring approach.
pub const MULTI_SESSION_MARKER: &str = "[MULTI-SESSION]";
/// Marker applied by the `fixed` restructuring approach.
pub const FIXED_EVENT_MARKER: &str = "[FIXED EVENT]";
/// Marker applied to the original task by the `planning` approach.
pub const PENDING_PLANNING_MARKER: &str = "[PENDING PLANNING]";
/// Marker applied to the follow-up task by the `iterative` approach.
/// Not an exemption marker: the remainder still counts as oversized.
pub const REMAINING_WORK_MARKER: &str = "[REMAINING WORK]";

/// Markers that exempt a task from large-task detection.
pub const EXEMPTION_MARKERS: [&str; 3] = [
    MULTI_SESSION_MARKER,
    FIXED_EVENT_MARKER,
    PENDING_PLANNING_MARKER,
];

/// A time-boxed unit of work.
///
/// Identity is a stable opaque id assigned at creation; positional
/// indexes are only a wire-format concern translated at the boundary
/// (see [`restructure::restructure_at`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Stable opaque identifier; generated when absent on deserialization
    #[serde(default = "new_task_id")]
    pub id: String,
    /// Project the task belongs to
    #[serde(default)]
    pub project: Option<String>,
    /// Task name, possibly carrying bracketed markers
    #[serde(default)]
    pub name: Option<String>,
    /// Estimated duration in hours
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    /// Due date (ISO `YYYY-MM-DD` on the wire; unparseable reads as None)
    #[serde(default, deserialize_with = "lenient_date::deserialize")]
    pub due_date: Option<NaiveDate>,
    /// Importance (higher = more urgent)
    #[serde(default)]
    pub importance: i64,
    /// Complexity (higher = harder; ranking tie-break)
    #[serde(default)]
    pub complexity: i64,
    /// Number of focus sessions, set by the `focus` approach
    #[serde(default)]
    pub focus_sessions: Option<i64>,
    /// Length of one focus session in hours, set by the `focus` approach
    #[serde(default)]
    pub session_length_hours: Option<f64>,
    /// Event type label, set by the `fixed` approach
    #[serde(default)]
    pub event_type: Option<String>,
}

/// Generate a fresh stable task id.
pub(crate) fn new_task_id() -> String {
    format!(
        "task-{}-{}",
        chrono::Utc::now().timestamp(),
        uuid::Uuid::new_v4()
    )
}

impl Task {
    /// Create a new task with default values.
    pub fn new(name: impl Into<String>) -> Self {
        Task {
            id: new_task_id(),
            project: None,
            name: Some(name.into()),
            estimated_hours: None,
            due_date: None,
            importance: 0,
            complexity: 0,
            focus_sessions: None,
            session_length_hours: None,
            event_type: None,
        }
    }

    /// Task name for display purposes, empty string when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Whether the name carries any marker exempting the task from
    /// large-task detection.
    pub fn has_exemption_marker(&self) -> bool {
        match &self.name {
            Some(name) => EXEMPTION_MARKERS.iter().any(|m| name.contains(m)),
            None => false,
        }
    }
}

/// Lenient calendar-date field (de)serialization.
///
/// Accepts `YYYY-MM-DD` strings; null, missing, or unparseable values
/// all read as `None`.
pub(crate) mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|s| s.parse::<NaiveDate>().ok()))
    }
}
