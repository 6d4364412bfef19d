//! Daily summary reconciliation.
//!
//! Groups the allocator's post-allocation slots by date and adds up what
//! was scheduled on each day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::allocate::{Allocation, CapacitySlot};

/// Per-date utilization after allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryEntry {
    pub date: NaiveDate,
    /// Hours still free on this date after allocation
    pub total_available: f64,
    /// Hours allocated to this date
    pub total_scheduled: f64,
}

/// Build the per-date summary from post-allocation slots.
///
/// Same-date slots merge into one entry, summing their remaining hours.
/// Each allocation is then added to the first entry with a matching
/// date only, guarding against double counting.
pub fn daily_summary(slots: &[CapacitySlot], allocations: &[Allocation]) -> Vec<DailySummaryEntry> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for slot in slots {
        *by_date.entry(slot.date).or_insert(0.0) += slot.available_hours;
    }

    let mut entries: Vec<DailySummaryEntry> = by_date
        .into_iter()
        .map(|(date, total_available)| DailySummaryEntry {
            date,
            total_available,
            total_scheduled: 0.0,
        })
        .collect();

    for allocation in allocations {
        if let Some(entry) = entries.iter_mut().find(|e| e.date == allocation.date) {
            entry.total_scheduled += allocation.allocated_hours;
        }
    }

    entries
}
