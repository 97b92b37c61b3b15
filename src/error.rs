//! Error types for simulation runs.
//!
//! This module defines the errors the fan-in join can surface.

/// Errors that can occur while joining on a simulation run
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SimError {
    /// A task ended without delivering its result to the join
    TaskLost { task_id: usize },
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::TaskLost { task_id } => {
                write!(
                    f,
                    "Task #{} ended without reporting a result\n\
                     \n\
                     The task either panicked inside the runtime or was dropped before\n\
                     completing. Every surviving task was allowed to finish before this\n\
                     error was reported.",
                    task_id
                )
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;
