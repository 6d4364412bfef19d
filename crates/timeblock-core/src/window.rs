//! Free-time window records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::lenient_date;

/// A single slot of free time: one date with an hours budget.
///
/// Multiple windows may share a date; they stay independent capacity
/// slots during allocation and are only merged by the daily summary.
/// Undated windows are silently unusable for allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeWindow {
    /// Calendar date of the window (unparseable reads as None)
    #[serde(default, deserialize_with = "lenient_date::deserialize")]
    pub date: Option<NaiveDate>,
    /// Hours available on this window
    #[serde(default)]
    pub available_hours: f64,
}

impl FreeWindow {
    /// Create a window on a date with an hours budget.
    pub fn new(date: NaiveDate, available_hours: f64) -> Self {
        Self {
            date: Some(date),
            available_hours,
        }
    }
}
