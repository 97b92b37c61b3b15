//! Concurrent Countdown-Task Simulator
//!
//! A minimal, runtime-agnostic fan-out/fan-in coordinator over countdown
//! tasks: N independently-launched tasks each count down to zero while
//! accumulating a sum, suspending between steps to simulate
//! variable-latency work, and the coordinator returns every result in
//! launch order only after the last task has finished.
//!
//! # Features
//!
//! - **All-or-nothing join**: the coordinator resumes exactly once, after
//!   every task has reported; no partial result delivery.
//! - **Launch-order results**: results are indexed by task id, so the
//!   returned collection is ordered by launch index regardless of which
//!   task finished first.
//! - **Overlapping execution**: every task is launched before any is
//!   awaited; total wall-clock time tracks the slowest single task, not the
//!   sum of all tasks.
//! - **Runtime-agnostic**: spawning goes through a caller-provided spawner
//!   function (Tokio, async-std, smol, ...). The built-in delays sleep on
//!   the tokio timer; swap in a custom [`Suspend`] for other runtimes.
//! - **Pluggable suspension and observation**: the per-step pause and the
//!   progress stream are both trait seams, which is also how the tests
//!   count suspensions and force completion orders.
//!
//! # Quick Start
//!
//! ```no_run
//! # async {
//! // 3 tasks, each counting down from 6 with a random pause per step.
//! let results = simx::simulate(3, 6, |fut| { tokio::spawn(fut); }).await.unwrap();
//!
//! assert_eq!(results.len(), 3);
//! for (i, r) in results.iter().enumerate() {
//!     assert_eq!(r.id.0, i);
//!     assert_eq!(r.sum, 21); // 6*7/2
//! }
//! # };
//! ```
//!
//! # Core Concepts
//!
//! ## Countdown Task
//!
//! A [`CountdownTask`] visits every value from its start down to zero. Each
//! step emits one `(id, value)` observation, suspends once, then adds the
//! value to its running sum. The suspension is the only await point. A task
//! owns its sum exclusively; tasks share no mutable state.
//!
//! ## Coordinator
//!
//! A [`SimRunner`] fans out N tasks and fans back in over an id-indexed
//! slot per task. Completion order is unspecified (the random suspension
//! makes it vary run to run) but the returned `Vec<TaskResult>` is always
//! in launch order. With zero tasks the runner reports the idle outcome and
//! returns an empty collection immediately.
//!
//! ## Suspension
//!
//! A [`Suspend`] implementation supplies the per-step pause:
//! [`UniformDelay`] (random, the default), [`FixedDelay`],
//! [`StaggeredDelay`] (per-id, for deterministic completion orders), or
//! [`NoDelay`]. Tests provide their own implementations to make timing
//! deterministic.
//!
//! ## Observation
//!
//! An [`Observer`] receives the progress stream: run begin/end, one step
//! record per suspension, each task's completion, and the idle outcome.
//! Emits are atomic per record; ordering across tasks is unspecified, while
//! each task's own steps arrive in descending value order.
//!
//! # Error Handling
//!
//! Under the stated contract the computation cannot fail. The one error the
//! join surfaces is [`SimError::TaskLost`]: a task future that vanished
//! without reporting (a panic inside the runtime, or a dropped task). The
//! runner waits for all surviving tasks before reporting it and never
//! cancels siblings.
//!
//! # Optional Tracing Support
//!
//! Structured logging via the `tracing` crate sits behind the `tracing`
//! cargo feature and compiles away entirely when disabled:
//!
//! ```toml
//! [dependencies]
//! simx = { version = "0.1", features = ["tracing"] }
//! tracing-subscriber = "0.3"
//! ```
//!
//! - **INFO**: run start/completion, the idle outcome
//! - **DEBUG**: per-task launches
//! - **TRACE**: individual countdown steps and task reports
//! - **ERROR**: a lost task
//!
//! Control the level with `RUST_LOG=simx=debug` and so on.

mod error;
mod observe;
mod runner;
mod suspend;
mod task;
mod types;

// Public re-exports
pub use error::{SimError, SimResult};
pub use observe::{NoopObserver, Observer};
pub use runner::{SimRunner, simulate};
pub use suspend::{FixedDelay, NoDelay, StaggeredDelay, Suspend, UniformDelay};
pub use task::CountdownTask;
pub use types::{TaskId, TaskResult, TaskSpec};
