//! Fan-out/fan-in coordinator for countdown simulations.
//!
//! Provides [`SimRunner`] for launching a batch of countdown tasks with
//! overlapping execution and joining on all of them at once.
//!
//! Spawning is runtime-agnostic via a caller-provided spawner function.

use std::sync::Arc;

use futures::StreamExt;
use futures::channel::mpsc;
use futures::future::BoxFuture;

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, trace};

use crate::error::{SimError, SimResult};
use crate::observe::{NoopObserver, Observer};
use crate::suspend::{Suspend, UniformDelay};
use crate::task::CountdownTask;
use crate::types::{TaskId, TaskResult, TaskSpec};

/// Coordinates one fan-out/fan-in run over countdown tasks.
///
/// A `SimRunner` launches `task_count` tasks (ids `0..task_count-1`, each
/// counting down from the same `start_value`) before awaiting any result,
/// then suspends until every task has reported. The join is an
/// all-or-nothing barrier: the runner resumes exactly once, after the last
/// task finishes, and returns the results ordered by launch index no matter
/// which task completed first.
///
/// # Workflow
///
/// 1. Create a runner with [`SimRunner::new`]
/// 2. Optionally swap the suspension source or observer with
///    [`SimRunner::with_suspend`] / [`SimRunner::with_observer`]
/// 3. Execute with [`SimRunner::run`], passing a spawner for your runtime
///
/// # Examples
///
/// ```no_run
/// use simx::SimRunner;
///
/// # async {
/// let runner = SimRunner::new(3, 6);
///
/// let results = runner.run(|fut| { tokio::spawn(fut); }).await.unwrap();
///
/// assert_eq!(results.len(), 3);
/// assert!(results.iter().enumerate().all(|(i, r)| r.id.0 == i && r.sum == 21));
/// # };
/// ```
pub struct SimRunner {
    task_count: usize,
    start_value: i64,
    suspend: Arc<dyn Suspend>,
    observer: Arc<dyn Observer>,
}

impl SimRunner {
    /// Create a runner for `task_count` tasks counting down from
    /// `start_value`, with the default random suspension and no observer.
    pub fn new(task_count: usize, start_value: i64) -> Self {
        Self {
            task_count,
            start_value,
            suspend: Arc::new(UniformDelay::default()),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Replace the suspension source.
    pub fn with_suspend(mut self, suspend: Arc<dyn Suspend>) -> Self {
        self.suspend = suspend;
        self
    }

    /// Replace the progress observer.
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// Run every task to completion and return their results in launch
    /// order.
    ///
    /// All tasks are launched before any is awaited, so execution overlaps:
    /// total wall-clock time tracks the slowest single task, not the sum of
    /// all tasks. With `task_count == 0` nothing is launched and an empty
    /// collection is returned immediately.
    ///
    /// # Parameters
    ///
    /// - `spawner`: A function that spawns futures on the async runtime.
    ///   Examples:
    ///   - Tokio: `|fut| { tokio::spawn(fut); }`
    ///   - Smol: `|fut| { smol::spawn(fut).detach(); }`
    ///   - Async-std: `|fut| { async_std::task::spawn(fut); }`
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TaskLost`] if a task ended without reporting a
    /// result (it panicked inside the runtime, or the runtime dropped it).
    /// The error is reported only after every surviving task has finished;
    /// siblings are never cancelled.
    pub async fn run<S>(&self, spawner: S) -> SimResult<Vec<TaskResult>>
    where
        S: Fn(BoxFuture<'static, ()>),
    {
        if self.task_count == 0 {
            #[cfg(feature = "tracing")]
            info!("no tasks to launch");

            self.observer.on_idle();
            return Ok(Vec::new());
        }

        #[cfg(feature = "tracing")]
        info!(
            task_count = self.task_count,
            start_value = self.start_value,
            "starting simulation"
        );

        self.observer.on_begin(self.task_count);

        let (tx, mut rx) = mpsc::unbounded::<TaskResult>();

        for index in 0..self.task_count {
            let spec = TaskSpec {
                id: TaskId(index),
                start: self.start_value,
            };
            let task =
                CountdownTask::new(spec, Arc::clone(&self.suspend), Arc::clone(&self.observer));
            let tx = tx.clone();

            #[cfg(feature = "tracing")]
            debug!(task_id = index, "launching task");

            spawner(Box::pin(async move {
                let result = task.run().await;
                // Ignore send errors - the receiver only disappears if the
                // runner itself was dropped mid-run.
                let _ = tx.unbounded_send(result);
            }));
        }

        // Drop the original sender so the channel closes once every task
        // has reported and released its clone.
        drop(tx);

        // One result slot per task, written exactly once, indexed by id.
        let mut slots: Vec<Option<TaskResult>> = vec![None; self.task_count];
        let mut completed = 0usize;

        // All-or-nothing barrier: drain until the channel closes.
        while let Some(result) = rx.next().await {
            #[cfg(feature = "tracing")]
            trace!(task_id = result.id.0, sum = result.sum, "task reported");

            self.observer.on_task_complete(&result);

            let slot = &mut slots[result.id.0];
            if slot.is_none() {
                completed += 1;
            }
            *slot = Some(result);
        }

        if completed != self.task_count {
            let task_id = slots.iter().position(Option::is_none).unwrap_or(0);

            #[cfg(feature = "tracing")]
            error!(task_id, "task ended without reporting a result");

            return Err(SimError::TaskLost { task_id });
        }

        // Every slot is filled at this point, so flatten preserves one
        // result per id, in id order.
        let results: Vec<TaskResult> = slots.into_iter().flatten().collect();

        #[cfg(feature = "tracing")]
        info!(task_count = results.len(), "simulation complete");

        self.observer.on_end(&results);

        Ok(results)
    }
}

/// Launch `max_tasks` countdown tasks from `max_value` and collect their
/// results in launch order.
///
/// Convenience entry point over [`SimRunner`] with the default random
/// suspension and no observer; build a [`SimRunner`] directly to customize
/// either.
///
/// # Examples
///
/// ```no_run
/// # async {
/// let results = simx::simulate(3, 6, |fut| { tokio::spawn(fut); }).await.unwrap();
///
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].sum, 21); // 6*7/2
/// # };
/// ```
pub async fn simulate<S>(max_tasks: usize, max_value: i64, spawner: S) -> SimResult<Vec<TaskResult>>
where
    S: Fn(BoxFuture<'static, ()>),
{
    SimRunner::new(max_tasks, max_value).run(spawner).await
}
