//! The countdown unit of work.
//!
//! A countdown task owns its descriptor and its running sum exclusively; no
//! task reads or writes another task's state. The only shared collaborators
//! are the suspension source and the observer, both behind `Arc`.

use std::sync::Arc;

use crate::observe::Observer;
use crate::suspend::Suspend;
use crate::types::{TaskId, TaskResult, TaskSpec};

#[cfg(feature = "tracing")]
use tracing::trace;

/// One countdown-and-accumulate computation.
///
/// Given a spec with `start >= 0`, `run` visits every value from `start`
/// down to zero, suspending once per visit, and returns the accumulated
/// sum, `start * (start + 1) / 2`. A negative `start` performs no steps and
/// returns a sum of zero.
///
/// Each step, in order: emit the `(id, value)` observation, suspend, add
/// `value` to the sum, decrement. The suspension is the only await point;
/// neither the arithmetic nor the return yields.
pub struct CountdownTask {
    spec: TaskSpec,
    suspend: Arc<dyn Suspend>,
    observer: Arc<dyn Observer>,
}

impl CountdownTask {
    pub fn new(spec: TaskSpec, suspend: Arc<dyn Suspend>, observer: Arc<dyn Observer>) -> Self {
        Self {
            spec,
            suspend,
            observer,
        }
    }

    /// Identifier this task reports with.
    pub fn id(&self) -> TaskId {
        self.spec.id
    }

    /// Run the countdown to completion, consuming the task.
    pub async fn run(self) -> TaskResult {
        let TaskSpec { id, start } = self.spec;
        let mut value = start;
        let mut sum: i64 = 0;

        while value >= 0 {
            self.observer.on_step(id, value);

            #[cfg(feature = "tracing")]
            trace!(task_id = id.0, value, "countdown step");

            self.suspend.pause(id, value).await;
            sum += value;
            value -= 1;
        }

        TaskResult { id, sum }
    }
}
