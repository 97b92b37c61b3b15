//! # Proof of Overlapping Execution
//!
//! Demonstrates that countdown tasks genuinely overlap: 100 tasks that each
//! spend 500ms suspended complete together in roughly 500ms, not 50
//! seconds.
//!
//! ## The Proof
//!
//! If tasks ran sequentially:
//! - 100 tasks x 10 steps x 50ms = 50 seconds
//!
//! With overlapping execution:
//! - every task suspends at the same time, so the whole batch finishes in
//!   about one task's worth of suspension (~500ms)
//!
//! ## Running This Demo
//! ```bash
//! cargo run --example overlap_proof --release
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use simx::{FixedDelay, SimRunner};

#[tokio::main]
async fn main() {
    let task_count = 100;
    let start_value = 9; // 10 steps per task
    let step_delay = Duration::from_millis(50);

    println!("=== Overlap Proof ===\n");
    println!(
        "Launching {} tasks, {} steps each, {}ms per step...\n",
        task_count,
        start_value + 1,
        step_delay.as_millis()
    );

    let runner =
        SimRunner::new(task_count, start_value).with_suspend(Arc::new(FixedDelay(step_delay)));

    let start = Instant::now();
    let results = runner
        .run(|fut| {
            tokio::spawn(fut);
        })
        .await
        .unwrap();
    let elapsed = start.elapsed();

    let per_task = step_delay * (start_value + 1) as u32;
    let sequential = per_task * task_count as u32;

    assert!(results.iter().enumerate().all(|(i, r)| r.id.0 == i));

    println!(
        "Result: {} tasks x {:?} of suspension completed in {:?}",
        results.len(),
        per_task,
        elapsed
    );
    println!("Sequential execution would have taken {:?}", sequential);
    println!(
        "Speedup: {:.0}x",
        sequential.as_secs_f64() / elapsed.as_secs_f64()
    );
}
