//! Deferred tasks
//!
//! Behaviors never block; they hand the next step of their work to a
//! [`Scheduler`] and keep the returned [`TimerHandle`] to cancel it.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// A deferred callback
pub type Task = Box<dyn FnOnce()>;

/// Runs tasks after a delay on the UI thread
pub trait Scheduler {
    /// Run `task` once after `delay`, unless the returned handle is cancelled first
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;
}

/// Cancellation handle for one scheduled task
///
/// Clones share the same flag. Schedulers check it right before running the
/// task, so cancelling after the task already ran has no effect.
#[derive(Clone, Debug, Default)]
pub struct TimerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
