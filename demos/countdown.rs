//! # Countdown Simulation
//!
//! Launches a handful of countdown tasks with a random pause per step and
//! prints every progress observation plus the final, launch-ordered result
//! collection.
//!
//! ## Running This Demo
//! ```bash
//! cargo run --example countdown           # 3 tasks counting down from 6
//! cargo run --example countdown -- 5 10   # 5 tasks counting down from 10
//! ```
//!
//! ## Expected Output
//! ```text
//! BEGIN
//! 0: 6
//! 1: 6
//! 2: 6
//! 0: 5
//! 2: 5
//! ...
//! END
//! [(0, 21), (1, 21), (2, 21)]
//! ```
//!
//! The per-step lines interleave differently on every run; the final
//! collection is always ordered by task id.

use std::env;
use std::sync::Arc;

use simx::{Observer, SimRunner, TaskId, TaskResult};

/// Prints one line per observation. `println!` takes the stdout lock for
/// the whole call, so records from concurrent tasks never interleave
/// mid-line.
struct PrintObserver;

impl Observer for PrintObserver {
    fn on_begin(&self, _task_count: usize) {
        println!("BEGIN");
    }

    fn on_step(&self, id: TaskId, value: i64) {
        println!("{id}: {value}");
    }

    fn on_idle(&self) {
        println!("nothing to do");
    }

    fn on_end(&self, _results: &[TaskResult]) {
        println!("END");
    }
}

/// Missing, malformed, or negative arguments fall back to the default.
fn arg_or(index: usize, default: i64) -> i64 {
    env::args()
        .nth(index)
        .and_then(|raw| raw.parse().ok())
        .filter(|&n| n >= 0)
        .unwrap_or(default)
}

#[tokio::main]
async fn main() {
    let max_tasks = arg_or(1, 3) as usize;
    let max_value = arg_or(2, 6);

    let runner = SimRunner::new(max_tasks, max_value).with_observer(Arc::new(PrintObserver));

    let results = runner
        .run(|fut| {
            tokio::spawn(fut);
        })
        .await
        .unwrap();

    let pairs: Vec<(usize, i64)> = results.iter().map(|r| (r.id.0, r.sum)).collect();
    println!("{pairs:?}");
}
