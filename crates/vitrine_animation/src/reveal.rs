//! One-shot reveal animations
//!
//! A reveal swaps a small set of inline styles from their hidden to their
//! shown values the first time an element scrolls into view. The CSS
//! transition on the element does the actual animating.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use vitrine_core::config::{SkillBarConfig, TimelineConfig};
use vitrine_core::{Document, ElementId, ObserveOptions, TimerHandle, UiContext, WatchHandle};

/// One inline style property and its two values
#[derive(Clone, Debug, PartialEq)]
pub struct StyleChange {
    pub property: String,
    pub hidden: String,
    pub shown: String,
}

impl StyleChange {
    pub fn new(property: impl Into<String>, hidden: impl Into<String>, shown: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            hidden: hidden.into(),
            shown: shown.into(),
        }
    }
}

/// When the hidden styles are applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HidePhase {
    /// As soon as the reveal is registered
    OnRegister,
    /// When the element becomes visible, right before the delay
    OnVisible,
}

/// What a reveal does to its element
#[derive(Clone, Debug, PartialEq)]
pub struct RevealSpec {
    pub styles: SmallVec<[StyleChange; 3]>,
    /// Styles applied once at registration and left alone afterwards
    pub setup: SmallVec<[(String, String); 1]>,
    pub hide: HidePhase,
    /// Delay between becoming visible and applying the shown styles
    pub delay: Duration,
    pub options: ObserveOptions,
}

impl RevealSpec {
    /// Collapse a bar to zero width when it appears, then grow it back
    ///
    /// `width` is the bar's inline width. Without one the inline width is
    /// cleared again afterwards so the stylesheet width applies.
    pub fn skill_bar(width: Option<String>, config: &SkillBarConfig) -> Self {
        Self {
            styles: SmallVec::from_iter([StyleChange::new("width", "0%", width.unwrap_or_default())]),
            setup: SmallVec::new(),
            hide: HidePhase::OnVisible,
            delay: config.delay(),
            options: ObserveOptions::new(config.threshold),
        }
    }

    /// Start transparent and shifted down, fade up into place when visible
    pub fn fade_up(config: &TimelineConfig) -> Self {
        Self {
            styles: SmallVec::from_iter([
                StyleChange::new("opacity", "0", "1"),
                StyleChange::new(
                    "transform",
                    format!("translateY({}px)", config.offset_px),
                    "translateY(0)",
                ),
            ]),
            setup: SmallVec::from_iter([("transition".to_string(), config.transition.clone())]),
            hide: HidePhase::OnRegister,
            delay: Duration::ZERO,
            options: ObserveOptions::new(config.threshold),
        }
    }

    fn apply_hidden(&self, document: &dyn Document, element: &ElementId) {
        for change in &self.styles {
            document.set_style(element, &change.property, &change.hidden);
        }
    }

    fn apply_shown(&self, document: &dyn Document, element: &ElementId) {
        for change in &self.styles {
            document.set_style(element, &change.property, &change.shown);
        }
    }
}

/// A registered reveal
#[derive(Clone, Debug)]
pub struct RevealRegistration {
    element: ElementId,
    activated: Rc<Cell<bool>>,
    watch: Option<WatchHandle>,
    timer: Rc<RefCell<Option<TimerHandle>>>,
}

impl RevealRegistration {
    pub fn element(&self) -> &ElementId {
        &self.element
    }

    pub fn is_activated(&self) -> bool {
        self.activated.get()
    }

    /// Detach the watcher and drop a pending delayed show
    pub fn cancel(&self) {
        if let Some(watch) = &self.watch {
            watch.unobserve();
        }
        if let Some(timer) = self.timer.borrow_mut().take() {
            timer.cancel();
        }
    }
}

/// Register a reveal on `element`
///
/// Missing elements are skipped. Without visibility detection the shown
/// styles are applied immediately.
pub fn register(ctx: &UiContext, element: &ElementId, spec: RevealSpec) -> Option<RevealRegistration> {
    let document = ctx.document();
    if !document.contains(element) {
        tracing::debug!("reveal target {} not found, skipping", element);
        return None;
    }

    for (property, value) in &spec.setup {
        document.set_style(element, property, value);
    }

    let activated = Rc::new(Cell::new(false));
    let timer = Rc::new(RefCell::new(None));

    let Some(visibility) = ctx.visibility() else {
        activated.set(true);
        spec.apply_shown(document, element);
        return Some(RevealRegistration {
            element: element.clone(),
            activated,
            watch: None,
            timer,
        });
    };

    if spec.hide == HidePhase::OnRegister {
        spec.apply_hidden(document, element);
    }

    let page = ctx.clone();
    let watched = element.clone();
    let on_activate = activated.clone();
    let pending = timer.clone();
    let options = spec.options.clone();
    let spec = Rc::new(spec);

    let watch = visibility.observe(
        element,
        &options,
        Box::new(move |handle| {
            handle.unobserve();
            if on_activate.replace(true) {
                return;
            }
            if spec.hide == HidePhase::OnVisible {
                spec.apply_hidden(page.document(), &watched);
            }
            if spec.delay.is_zero() {
                spec.apply_shown(page.document(), &watched);
                return;
            }

            let show_page = page.clone();
            let show_element = watched.clone();
            let show_spec = spec.clone();
            let handle = page.scheduler().schedule(
                spec.delay,
                Box::new(move || show_spec.apply_shown(show_page.document(), &show_element)),
            );
            *pending.borrow_mut() = Some(handle);
        }),
    );

    Some(RevealRegistration {
        element: element.clone(),
        activated,
        watch: Some(watch),
        timer,
    })
}

/// Register skill bar reveals, remembering each bar's current width
pub fn register_skill_bars(ctx: &UiContext, config: &SkillBarConfig) -> Vec<RevealRegistration> {
    ctx.document()
        .query_all(&config.selector)
        .iter()
        .filter_map(|bar| {
            let width = ctx.document().style(bar, "width");
            register(ctx, bar, RevealSpec::skill_bar(width, config))
        })
        .collect()
}

/// Register fade-up reveals on timeline items
pub fn register_timeline(ctx: &UiContext, config: &TimelineConfig) -> Vec<RevealRegistration> {
    ctx.document()
        .query_all(&config.selector)
        .iter()
        .filter_map(|item| register(ctx, item, RevealSpec::fade_up(config)))
        .collect()
}
