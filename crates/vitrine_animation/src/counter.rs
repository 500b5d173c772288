//! Count-up animations
//!
//! A counter animates its element's text from 0 to an integer target in a
//! fixed number of equal steps, starting the first time the element becomes
//! visible. Activation is one-shot: the watcher is detached on the first
//! notification and later notifications are ignored.

use crate::scheduler::{drive, AnimationHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use vitrine_core::config::CounterConfig;
use vitrine_core::{ElementId, ObserveOptions, Result, UiContext, UiError, WatchHandle};

/// Total duration and step count of a counter animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTiming {
    duration: Duration,
    steps: u32,
}

impl CounterTiming {
    pub fn new(duration: Duration, steps: u32) -> Result<Self> {
        if steps == 0 {
            return Err(UiError::InvalidSteps);
        }
        Ok(Self { duration, steps })
    }

    pub fn from_config(config: &CounterConfig) -> Result<Self> {
        Self::new(config.duration(), config.steps)
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Interval between two ticks
    pub fn step_duration(&self) -> Duration {
        self.duration / self.steps
    }
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            steps: 60,
        }
    }
}

/// Parse a counter target, ignoring surrounding whitespace
pub fn parse_target(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| UiError::InvalidCount(raw.to_string()))
}

/// One tick of a counter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTick {
    pub display: i64,
    pub finished: bool,
}

/// Accumulator for one counter, independent of any timer
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    current: f64,
    target: i64,
    increment: f64,
    steps: u32,
    steps_elapsed: u32,
}

impl CounterAnimation {
    pub fn new(target: i64, timing: CounterTiming) -> Self {
        Self {
            current: 0.0,
            target,
            increment: target as f64 / f64::from(timing.steps),
            steps: timing.steps,
            steps_elapsed: 0,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Add one increment; the final tick displays exactly the target
    ///
    /// The animation also finishes after the configured number of steps, so
    /// floating point drift in the accumulator cannot add an extra tick.
    pub fn tick(&mut self) -> CounterTick {
        self.current += self.increment;
        self.steps_elapsed += 1;

        if self.current >= self.target as f64 || self.steps_elapsed >= self.steps {
            self.current = self.target as f64;
            return CounterTick {
                display: self.target,
                finished: true,
            };
        }

        CounterTick {
            display: self.current.floor() as i64,
            finished: false,
        }
    }
}

/// Start animating `element` toward `target` right away
///
/// The first tick fires one step duration from now.
pub fn animate(ctx: &UiContext, element: &ElementId, target: i64, timing: CounterTiming) -> AnimationHandle {
    tracing::debug!("counter {} animating to {}", element, target);

    let handle = AnimationHandle::new();
    let page = ctx.clone();
    let element = element.clone();
    let step = timing.step_duration();
    let mut counter = CounterAnimation::new(target, timing);

    drive(ctx.scheduler().clone(), handle.clone(), Some(step), move || {
        let tick = counter.tick();
        page.document().set_text(&element, &tick.display.to_string());
        (!tick.finished).then_some(step)
    });

    handle
}

/// A counter waiting for (or past) its activation
#[derive(Clone, Debug)]
pub struct CounterRegistration {
    element: ElementId,
    target: i64,
    activated: Rc<Cell<bool>>,
    watch: Option<WatchHandle>,
    animation: Rc<RefCell<Option<AnimationHandle>>>,
}

impl CounterRegistration {
    pub fn element(&self) -> &ElementId {
        &self.element
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_activated(&self) -> bool {
        self.activated.get()
    }

    /// The running or completed animation, once activated
    pub fn animation(&self) -> Option<AnimationHandle> {
        self.animation.borrow().clone()
    }

    /// Detach the watcher and stop the animation if it is running
    pub fn cancel(&self) {
        if let Some(watch) = &self.watch {
            watch.unobserve();
        }
        if let Some(animation) = self.animation.borrow().as_ref() {
            animation.stop();
        }
    }
}

/// Register a counter on `element` with the raw (unparsed) target text
///
/// Returns `None` without creating any timer or watcher when the element is
/// missing or the target is not an integer. Without visibility detection the
/// animation starts immediately.
pub fn register(
    ctx: &UiContext,
    element: &ElementId,
    raw_target: &str,
    timing: CounterTiming,
    options: &ObserveOptions,
) -> Option<CounterRegistration> {
    if !ctx.document().contains(element) {
        tracing::debug!("counter {} not found, skipping", element);
        return None;
    }

    let target = match parse_target(raw_target) {
        Ok(target) => target,
        Err(err) => {
            tracing::debug!("counter {} skipped: {}", element, err);
            return None;
        }
    };

    let activated = Rc::new(Cell::new(false));
    let animation = Rc::new(RefCell::new(None));

    let Some(visibility) = ctx.visibility() else {
        tracing::debug!("visibility detection unavailable, animating counter {} now", element);
        activated.set(true);
        *animation.borrow_mut() = Some(animate(ctx, element, target, timing));
        return Some(CounterRegistration {
            element: element.clone(),
            target,
            activated,
            watch: None,
            animation,
        });
    };

    let page = ctx.clone();
    let watched = element.clone();
    let on_activate = activated.clone();
    let slot = animation.clone();
    let watch = visibility.observe(
        element,
        options,
        Box::new(move |handle| {
            handle.unobserve();
            if on_activate.replace(true) {
                return;
            }
            *slot.borrow_mut() = Some(animate(&page, &watched, target, timing));
        }),
    );

    Some(CounterRegistration {
        element: element.clone(),
        target,
        activated,
        watch: Some(watch),
        animation,
    })
}

/// Register every counter matching the configured selector
pub fn register_all(ctx: &UiContext, config: &CounterConfig) -> Vec<CounterRegistration> {
    let timing = match CounterTiming::from_config(config) {
        Ok(timing) => timing,
        Err(err) => {
            tracing::warn!("counters disabled: {}", err);
            return Vec::new();
        }
    };
    let options = config.observe_options();

    ctx.document()
        .query_all(&config.selector)
        .iter()
        .filter_map(|element| {
            let raw = ctx.document().attribute(element, &config.attribute)?;
            register(ctx, element, &raw, timing, &options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("100").unwrap(), 100);
        assert_eq!(parse_target("  42 ").unwrap(), 42);
        assert!(parse_target("12abc").is_err());
        assert!(parse_target("").is_err());
        assert!(parse_target("3.5").is_err());
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(matches!(
            CounterTiming::new(Duration::from_secs(2), 0),
            Err(UiError::InvalidSteps)
        ));
    }

    #[test]
    fn test_step_duration() {
        let timing = CounterTiming::new(Duration::from_millis(2000), 60).unwrap();
        assert_eq!(timing.step_duration(), Duration::from_nanos(33_333_333));
    }

    #[test]
    fn test_reaches_target_exactly_in_step_count() {
        let mut counter = CounterAnimation::new(100, CounterTiming::default());
        let mut displays = Vec::new();
        loop {
            let tick = counter.tick();
            displays.push(tick.display);
            if tick.finished {
                break;
            }
        }

        assert_eq!(displays.len(), 60);
        assert_eq!(*displays.last().unwrap(), 100);
        assert!(displays.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(displays[0], 1);
    }

    #[test]
    fn test_small_target_floors() {
        let mut counter = CounterAnimation::new(3, CounterTiming::default());
        assert_eq!(counter.tick().display, 0);
        for _ in 0..28 {
            counter.tick();
        }
        // 30 * 0.05 = 1.5
        assert_eq!(counter.tick().display, 1);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut counter = CounterAnimation::new(0, CounterTiming::default());
        assert_eq!(
            counter.tick(),
            CounterTick {
                display: 0,
                finished: true
            }
        );
    }
}
