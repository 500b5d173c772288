//! Viewport visibility detection

use crate::element::ElementId;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// When an element counts as visible
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObserveOptions {
    /// Fraction of the element area that must be in view (0.0 to 1.0)
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting
    #[serde(default = "default_root_margin")]
    pub root_margin: String,
}

fn default_root_margin() -> String {
    "0px".to_string()
}

impl ObserveOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: default_root_margin(),
        }
    }

    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Called each time the watched element crosses into view
///
/// The watcher's own handle is passed in so the callback can unobserve.
pub type VisibilityCallback = Box<dyn FnMut(&WatchHandle)>;

/// Reports elements entering the viewport
pub trait VisibilityObserver {
    fn observe(
        &self,
        element: &ElementId,
        options: &ObserveOptions,
        on_visible: VisibilityCallback,
    ) -> WatchHandle;
}

/// Handle to one registered watcher
///
/// Clones share state; `unobserve` runs the detach action at most once.
#[derive(Clone, Default)]
pub struct WatchHandle {
    detach: Rc<RefCell<Option<Box<dyn FnOnce()>>>>,
}

impl WatchHandle {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Rc::new(RefCell::new(Some(Box::new(detach)))),
        }
    }

    /// A handle with nothing to detach
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn unobserve(&self) {
        let detach = self.detach.borrow_mut().take();
        if let Some(detach) = detach {
            detach();
        }
    }

    pub fn is_observing(&self) -> bool {
        self.detach.borrow().is_some()
    }
}

impl fmt::Debug for WatchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchHandle")
            .field("observing", &self.is_observing())
            .finish()
    }
}
