//! Suspension sources for countdown steps.
//!
//! Every countdown step yields control to the scheduler exactly once,
//! through a [`Suspend`] implementation. The built-in implementations sleep
//! on the tokio timer and therefore need a tokio runtime context when
//! polled; the coordinator itself does not. Custom implementations can
//! substitute any pause at all; tests use this to count suspensions and to
//! force specific completion orders.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::types::TaskId;

/// A source of per-step pauses.
///
/// `pause` is called once per countdown step with the id of the suspending
/// task and the value about to be accumulated. Implementations yield to the
/// scheduler rather than blocking the thread, so the suspension of one task
/// never stalls another.
pub trait Suspend: Send + Sync {
    fn pause(&self, id: TaskId, value: i64) -> BoxFuture<'static, ()>;
}

/// Pause for a random duration in `[min, max)`.
///
/// Simulates variable-latency external work: two tasks started together
/// drift apart run to run, so completion order is non-deterministic while
/// the returned collection stays launch-ordered.
#[derive(Debug, Clone)]
pub struct UniformDelay {
    pub min: Duration,
    pub max: Duration,
}

impl Default for UniformDelay {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(50),
            max: Duration::from_millis(200),
        }
    }
}

impl Suspend for UniformDelay {
    fn pause(&self, _id: TaskId, _value: i64) -> BoxFuture<'static, ()> {
        let span = self.max.saturating_sub(self.min);
        let delay = self.min + span.mul_f64(rand::random::<f64>());
        tokio::time::sleep(delay).boxed()
    }
}

/// Pause for the same fixed duration at every step.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Suspend for FixedDelay {
    fn pause(&self, _id: TaskId, _value: i64) -> BoxFuture<'static, ()> {
        tokio::time::sleep(self.0).boxed()
    }
}

/// Pause `base + id * step` at every step.
///
/// Higher ids wait longer per step, so completion order follows the id
/// order deterministically. A deterministic alternative to [`UniformDelay`]
/// when a run needs a known completion order.
#[derive(Debug, Clone, Copy)]
pub struct StaggeredDelay {
    pub base: Duration,
    pub step: Duration,
}

impl Suspend for StaggeredDelay {
    fn pause(&self, id: TaskId, _value: i64) -> BoxFuture<'static, ()> {
        let delay = self.base + self.step * id.0 as u32;
        tokio::time::sleep(delay).boxed()
    }
}

/// No pause at all: the returned future is immediately ready.
///
/// Still one `pause` call per step, which keeps step accounting intact for
/// benchmarks and unit tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Suspend for NoDelay {
    fn pause(&self, _id: TaskId, _value: i64) -> BoxFuture<'static, ()> {
        futures::future::ready(()).boxed()
    }
}
