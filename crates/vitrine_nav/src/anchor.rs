//! Smooth scrolling to in-page anchors

use std::cell::RefCell;
use vitrine_animation::scroll;
use vitrine_animation::{AnimationHandle, Easing};
use vitrine_core::config::{NavConfig, ScrollConfig};
use vitrine_core::{ElementId, UiContext};

/// Whether `href` stays on the page (`#` or `#id`)
pub fn is_in_page(href: &str) -> bool {
    href.starts_with('#')
}

/// Element addressed by an in-page link, `None` for anything but `#id`
pub fn anchor_target(href: &str) -> Option<ElementId> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(ElementId::new(href))
}

/// Scroll offset that puts `target_top` just below a fixed navbar
pub fn scroll_target(target_top: f64, nav_height: f64, adjust: f64) -> f64 {
    (target_top - nav_height + adjust).max(0.0)
}

/// Runs one scroll animation at a time
///
/// Starting a new scroll stops the one in flight.
pub struct AnchorScroller {
    scroll: ScrollConfig,
    navbar: ElementId,
    current: RefCell<Option<AnimationHandle>>,
}

impl AnchorScroller {
    pub fn new(scroll: ScrollConfig, nav: &NavConfig) -> Self {
        Self {
            scroll,
            navbar: ElementId::new(nav.navbar.as_str()),
            current: RefCell::new(None),
        }
    }

    /// Scroll to the element `href` points at
    ///
    /// Returns `false` (and leaves the page alone) when `href` is not an
    /// in-page anchor or its target does not exist, so the caller can let the
    /// browser handle the click.
    pub fn scroll_to_anchor(&self, ctx: &UiContext, href: &str) -> bool {
        let Some(target) = anchor_target(href) else {
            return false;
        };
        let document = ctx.document();
        let Some(bounds) = document.bounds(&target) else {
            tracing::debug!("anchor {} has no target, ignoring", href);
            return false;
        };

        let nav_height = document.bounds(&self.navbar).map(|b| b.height).unwrap_or(0.0);
        let to = scroll_target(bounds.top, nav_height, self.scroll.anchor_adjust_px);
        self.start(ctx, to, self.scroll.anchor_duration());
        true
    }

    /// Scroll back to the top of the page
    pub fn scroll_to_top(&self, ctx: &UiContext) {
        self.start(ctx, 0.0, self.scroll.back_to_top_duration());
    }

    /// Stop the scroll in flight, if any
    pub fn stop(&self) {
        if let Some(handle) = self.current.borrow_mut().take() {
            handle.stop();
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.current
            .borrow()
            .as_ref()
            .map(|h| h.is_running())
            .unwrap_or(false)
    }

    fn start(&self, ctx: &UiContext, to: f64, duration: std::time::Duration) {
        self.stop();
        let handle = scroll::scroll_to(ctx, to, duration, self.scroll.frame(), Easing::EaseInOutExpo);
        *self.current.borrow_mut() = Some(handle);
    }
}
