//! Proof that tasks overlap instead of running sequentially

use std::sync::Arc;
use std::time::{Duration, Instant};

use simx::{FixedDelay, SimResult, SimRunner};

#[tokio::test]
async fn wall_clock_tracks_one_task_not_the_sum() -> SimResult<()> {
    // 50 tasks x 5 steps x 20ms = 5s of total suspension; one task's share
    // is 100ms. Overlapping execution must land near the latter.
    let task_count = 50;
    let step_delay = Duration::from_millis(20);
    let runner =
        SimRunner::new(task_count, 4).with_suspend(Arc::new(FixedDelay(step_delay)));

    let start = Instant::now();
    let results = runner.run(|fut| { tokio::spawn(fut); }).await?;
    let elapsed = start.elapsed();

    assert_eq!(results.len(), task_count);
    assert!(results.iter().all(|r| r.sum == 10)); // 4*5/2

    let per_task = step_delay * 5;
    let sequential = per_task * task_count as u32;

    println!(
        "Overlap proof: {} tasks x {:?} completed in {:?} (sequential would be {:?})",
        task_count, per_task, elapsed, sequential
    );

    // Generous overhead allowance, but nowhere near the 5s sequential sum.
    assert!(
        elapsed < Duration::from_millis(1000),
        "Tasks appear to be running sequentially! Took {:?} instead of ~{:?}",
        elapsed,
        per_task
    );
    Ok(())
}

#[tokio::test]
async fn all_tasks_launch_before_any_completes() -> SimResult<()> {
    use crate::common::support::{Event, RecordingObserver};

    let observer = RecordingObserver::new();
    let runner = SimRunner::new(6, 1)
        .with_suspend(Arc::new(FixedDelay(Duration::from_millis(30))))
        .with_observer(observer.clone());

    runner.run(|fut| { tokio::spawn(fut); }).await?;

    // Every task's first step observation precedes every completion: the
    // fan-out finishes before the first fan-in arrival.
    let events = observer.events();
    let first_completion = events
        .iter()
        .position(|e| matches!(e, Event::TaskComplete(_)))
        .expect("at least one completion");
    let mut started = std::collections::HashSet::new();
    for event in &events[..first_completion] {
        if let Event::Step(id, _) = event {
            started.insert(*id);
        }
    }
    assert_eq!(
        started.len(),
        6,
        "only {} of 6 tasks had started before the first completion",
        started.len()
    );
    Ok(())
}
