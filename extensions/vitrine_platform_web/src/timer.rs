//! `setTimeout`-backed scheduler

use std::time::Duration;
use vitrine_core::{Scheduler, Task, TimerHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

pub struct TimeoutScheduler {
    window: Window,
}

impl TimeoutScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let handle = TimerHandle::new();
        let guard = handle.clone();
        let callback = Closure::once_into_js(move || {
            if !guard.is_cancelled() {
                task();
            }
        });

        let millis = delay.as_millis().min(i32::MAX as u128) as i32;
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            tracing::warn!("setTimeout failed: {:?}", err);
            handle.cancel();
        }
        handle
    }
}
