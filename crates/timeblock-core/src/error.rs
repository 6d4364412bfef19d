//! Core error types for timeblock-core.
//!
//! This module defines the error hierarchy using thiserror. Scheduling
//! itself never fails: missing fields are skipped and degenerate inputs
//! take a warning path. Errors only arise from restructuring and from
//! (de)serializing wire parameters.

use thiserror::Error;

/// Core error type for timeblock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Restructuring validation failures
    #[error("Restructure error: {0}")]
    Restructure(#[from] RestructureError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Restructuring-specific errors.
///
/// All variants are validation failures surfaced before any mutation is
/// applied; the caller's task list is left untouched on error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RestructureError {
    /// No task with the given stable id
    #[error("Task not found: {id}")]
    TaskNotFound { id: String },

    /// Positional index past the end of the task list
    #[error("Task index {index} out of range (length: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Approach name not one of the five known strategies
    #[error("Invalid approach: {name}")]
    InvalidApproach { name: String },

    /// Breakdown requested without any subtasks
    #[error("No subtasks provided")]
    EmptySubtasks,

    /// Hour values that cannot produce a valid task split
    #[error("Invalid hours: {reason}")]
    InvalidHours { reason: String },

    /// Params document malformed for the named approach
    #[error("Invalid params for '{approach}': {message}")]
    InvalidParams { approach: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
