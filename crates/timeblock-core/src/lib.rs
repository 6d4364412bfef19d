//! # Timeblock Core Library
//!
//! This library provides the core planning logic for Timeblock: allocating
//! time-boxed tasks into discrete free-time windows and restructuring
//! oversized tasks into manageable forms. It implements a CLI-first
//! philosophy where all operations are available via a standalone CLI
//! binary, with any service layer being a thin shell over the same core.
//!
//! ## Architecture
//!
//! - **Scheduler**: A pure, single-threaded greedy packer. Each invocation
//!   ranks tasks by due-date urgency and importance, walks them against
//!   chronologically sorted capacity slots, and reconciles the result into
//!   a day-by-day summary with human-readable warnings
//! - **Restructurer**: State transitions over a single task (planning step,
//!   subtask breakdown, multi-session split, iterative exploration, fixed
//!   event marker), always producing a new task list
//! - **Records**: Plain serde types; persistence and transport are the
//!   caller's concern
//!
//! ## Key Components
//!
//! - [`Scheduler`]: Schedule orchestration over tasks and windows
//! - [`SchedulePlan`]: Full scheduling output (allocations, summary, warnings)
//! - [`Approach`]: The five restructuring strategies
//! - [`CoreError`]: Error hierarchy for the library

pub mod error;
pub mod scheduler;
pub mod task;
pub mod window;

pub use error::{CoreError, RestructureError};
pub use scheduler::{schedule, Scheduler, SchedulerConfig, SchedulePlan};
pub use scheduler::allocate::{Allocation, CapacitySlot};
pub use scheduler::oversize::LargeTask;
pub use scheduler::summary::DailySummaryEntry;
pub use task::restructure::{restructure, restructure_at, Approach};
pub use task::Task;
pub use window::FreeWindow;
