//! Tests for the no-tasks degenerate branch

use simx::{SimResult, SimRunner, TaskId, simulate};

use crate::common::support::{CountingSuspend, Event, RecordingObserver};

#[tokio::test]
async fn zero_tasks_returns_empty_collection() -> SimResult<()> {
    let results = simulate(0, 6, |fut| { tokio::spawn(fut); }).await?;
    assert!(results.is_empty());
    Ok(())
}

#[tokio::test]
async fn zero_tasks_signals_idle_and_nothing_else() -> SimResult<()> {
    let observer = RecordingObserver::new();
    let suspend = CountingSuspend::new();
    let runner = SimRunner::new(0, 42)
        .with_suspend(suspend.clone())
        .with_observer(observer.clone());

    let results = runner.run(|fut| { tokio::spawn(fut); }).await?;

    assert!(results.is_empty());
    assert_eq!(observer.events(), vec![Event::Idle]);
    assert_eq!(suspend.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn zero_value_tasks_suspend_once_each() -> SimResult<()> {
    let suspend = CountingSuspend::new();
    let runner = SimRunner::new(2, 0).with_suspend(suspend.clone());

    let results = runner.run(|fut| { tokio::spawn(fut); }).await?;

    assert_eq!(results.len(), 2);
    for (index, result) in results.iter().enumerate() {
        assert_eq!(result.id, TaskId(index));
        assert_eq!(result.sum, 0);
    }
    // One suspension per task: each visits only the value 0.
    assert_eq!(suspend.calls(), 2);
    Ok(())
}
