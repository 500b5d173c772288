//! Eased scroll animation

use crate::easing::Easing;
use crate::scheduler::{drive, AnimationHandle};
use std::time::Duration;
use vitrine_core::UiContext;

/// Interpolates the scroll offset from `from` to `to` over a fixed duration
#[derive(Clone, Debug)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    duration: Duration,
    frame: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration: Duration, frame: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            frame,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Progress in 0.0..=1.0
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Advance one frame; returns the new offset and whether the tween is done
    ///
    /// The last frame lands exactly on the target.
    pub fn step(&mut self) -> (f64, bool) {
        self.elapsed = (self.elapsed + self.frame).min(self.duration);
        let progress = self.progress();
        if progress >= 1.0 {
            return (self.to, true);
        }
        let eased = self.easing.apply(progress);
        (self.from + (self.to - self.from) * eased, false)
    }
}

/// Scroll the page to `to` with an eased animation
///
/// Returns a handle that stops the animation where it is.
pub fn scroll_to(ctx: &UiContext, to: f64, duration: Duration, frame: Duration, easing: Easing) -> AnimationHandle {
    let from = ctx.document().scroll_offset();
    let mut tween = ScrollTween::new(from, to, duration, frame, easing);
    tracing::debug!("scrolling from {} to {} over {:?}", from, to, duration);

    let handle = AnimationHandle::new();
    let page = ctx.clone();
    drive(ctx.scheduler().clone(), handle.clone(), None, move || {
        let (offset, done) = tween.step();
        page.document().scroll_to(offset);
        (!done).then_some(frame)
    });
    handle
}
