//! Core type definitions for countdown tasks and their results.
//!
//! This module defines the identifiers and records that flow between the
//! coordinator, the tasks, and the caller.

use std::fmt;

/// Identifier of one launched task.
///
/// Ids are assigned `0..N-1` in launch order and double as the index of the
/// task's slot in the returned result collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub usize);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptor for one countdown task.
///
/// `start` is the countdown start value and is immutable once the task
/// begins. It is signed so that the degenerate `start < 0` case (no steps,
/// zero sum) stays representable even though drivers only supply
/// non-negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec {
    pub id: TaskId,
    pub start: i64,
}

/// Result record produced exactly once per task.
///
/// For a task started at `v >= 0`, `sum` is the total of every integer from
/// `v` down to zero, i.e. `v * (v + 1) / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskResult {
    pub id: TaskId,
    pub sum: i64,
}
