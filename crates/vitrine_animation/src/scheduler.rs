//! Animation scheduling
//!
//! [`drive`] runs a self-rescheduling tick loop on any [`Scheduler`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use vitrine_core::{Scheduler, TimerHandle};

/// Stop handle for a running animation loop
///
/// Clones share state. Stopping cancels the pending tick; a loop that ran to
/// completion reports itself as finished.
#[derive(Clone, Debug, Default)]
pub struct AnimationHandle {
    stopped: Rc<Cell<bool>>,
    finished: Rc<Cell<bool>>,
    timer: Rc<RefCell<Option<TimerHandle>>>,
}

impl AnimationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the pending tick and prevent any further ones
    pub fn stop(&self) {
        self.stopped.set(true);
        if let Some(timer) = self.timer.borrow_mut().take() {
            timer.cancel();
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Whether the loop ended on its own
    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }

    /// Neither stopped nor finished
    pub fn is_running(&self) -> bool {
        !self.is_stopped() && !self.is_finished()
    }

    fn set_timer(&self, timer: TimerHandle) {
        *self.timer.borrow_mut() = Some(timer);
    }

    fn finish(&self) {
        self.finished.set(true);
        self.timer.borrow_mut().take();
    }
}

/// Run `step` repeatedly until it returns `None` or the handle is stopped
///
/// `step` returns the delay before its next call. With `first_delay = None`
/// the first step runs synchronously.
pub fn drive<F>(
    scheduler: Rc<dyn Scheduler>,
    handle: AnimationHandle,
    first_delay: Option<Duration>,
    step: F,
) where
    F: FnMut() -> Option<Duration> + 'static,
{
    let step = Rc::new(RefCell::new(step));
    match first_delay {
        None => tick_loop(scheduler, handle, step),
        Some(delay) => schedule_tick(scheduler, handle, step, delay),
    }
}

fn tick_loop<F>(scheduler: Rc<dyn Scheduler>, handle: AnimationHandle, step: Rc<RefCell<F>>)
where
    F: FnMut() -> Option<Duration> + 'static,
{
    if handle.is_stopped() {
        return;
    }

    let next = (&mut *step.borrow_mut())();
    match next {
        Some(delay) => schedule_tick(scheduler, handle, step, delay),
        None => handle.finish(),
    }
}

fn schedule_tick<F>(
    scheduler: Rc<dyn Scheduler>,
    handle: AnimationHandle,
    step: Rc<RefCell<F>>,
    delay: Duration,
) where
    F: FnMut() -> Option<Duration> + 'static,
{
    let next_scheduler = scheduler.clone();
    let next_handle = handle.clone();
    let timer = scheduler.schedule(
        delay,
        Box::new(move || tick_loop(next_scheduler, next_handle, step)),
    );
    handle.set_timer(timer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::testing::ManualScheduler;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_drive_stops_on_none() {
        let scheduler = ManualScheduler::new();
        let handle = AnimationHandle::new();
        let ticks = Rc::new(Cell::new(0));
        let ticks_clone = ticks.clone();

        drive(Rc::new(scheduler.clone()), handle.clone(), None, move || {
            ticks_clone.set(ticks_clone.get() + 1);
            (ticks_clone.get() < 3).then(|| ms(10))
        });

        // First tick runs synchronously
        assert_eq!(ticks.get(), 1);
        scheduler.advance(ms(100));
        assert_eq!(ticks.get(), 3);
        assert!(handle.is_finished());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_drive_stop_cancels_pending_tick() {
        let scheduler = ManualScheduler::new();
        let handle = AnimationHandle::new();
        let ticks = Rc::new(Cell::new(0));
        let ticks_clone = ticks.clone();

        drive(Rc::new(scheduler.clone()), handle.clone(), Some(ms(10)), move || {
            ticks_clone.set(ticks_clone.get() + 1);
            Some(ms(10))
        });

        assert_eq!(ticks.get(), 0);
        scheduler.advance(ms(25));
        assert_eq!(ticks.get(), 2);

        handle.stop();
        scheduler.advance(ms(100));
        assert_eq!(ticks.get(), 2);
        assert!(!handle.is_running());
        assert_eq!(scheduler.pending_count(), 0);
    }
}
