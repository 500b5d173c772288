//! In-memory page collaborators for headless tests
//!
//! - [`MemoryDocument`]: element tree flattened to a selector map, with a text history
//! - [`MemoryStore`]: preference store that can be switched into a failing state
//! - [`ManualVisibility`]: visibility observer whose notifications are fired by the test
//! - [`ManualScheduler`]: virtual clock that only advances when told to

use crate::document::Document;
use crate::element::{Bounds, ElementId};
use crate::error::{Result, UiError};
use crate::storage::PreferenceStore;
use crate::timer::{Scheduler, Task, TimerHandle};
use crate::visibility::{ObserveOptions, VisibilityCallback, VisibilityObserver, WatchHandle};
use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::{new_key_type, SlotMap};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct MemoryElement {
    text: String,
    text_history: Vec<String>,
    html: Option<String>,
    attributes: FxHashMap<String, String>,
    classes: FxHashSet<String>,
    styles: FxHashMap<String, String>,
    bounds: Option<Bounds>,
    /// Extra selectors this element answers to in `query_all`
    matches: Vec<String>,
}

/// A document backed by a flat map of elements
#[derive(Default)]
pub struct MemoryDocument {
    elements: RefCell<FxHashMap<ElementId, MemoryElement>>,
    order: RefCell<Vec<ElementId>>,
    root_attributes: RefCell<FxHashMap<String, String>>,
    scroll: Cell<f64>,
    scroll_history: RefCell<Vec<f64>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element (no-op if it already exists)
    pub fn insert(&self, element: impl Into<ElementId>) -> ElementId {
        let element = element.into();
        let mut elements = self.elements.borrow_mut();
        if !elements.contains_key(&element) {
            elements.insert(element.clone(), MemoryElement::default());
            self.order.borrow_mut().push(element.clone());
        }
        element
    }

    /// Add an element that `query_all(selector)` returns
    pub fn insert_matching(&self, element: impl Into<ElementId>, selector: &str) -> ElementId {
        let element = self.insert(element);
        if let Some(el) = self.elements.borrow_mut().get_mut(&element) {
            el.matches.push(selector.to_string());
        }
        element
    }

    pub fn set_bounds(&self, element: &ElementId, bounds: Bounds) {
        if let Some(el) = self.elements.borrow_mut().get_mut(element) {
            el.bounds = Some(bounds);
        }
    }

    pub fn remove(&self, element: &ElementId) {
        self.elements.borrow_mut().remove(element);
        self.order.borrow_mut().retain(|e| e != element);
    }

    /// Every value written with `set_text`, oldest first
    pub fn text_history(&self, element: &ElementId) -> Vec<String> {
        self.elements
            .borrow()
            .get(element)
            .map(|el| el.text_history.clone())
            .unwrap_or_default()
    }

    /// Markup last written with `set_html`
    pub fn html(&self, element: &ElementId) -> Option<String> {
        self.elements.borrow().get(element).and_then(|el| el.html.clone())
    }

    pub fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.elements
            .borrow()
            .get(element)
            .map(|el| el.classes.contains(class))
            .unwrap_or(false)
    }

    /// Every value passed to `scroll_to`, oldest first
    pub fn scroll_history(&self) -> Vec<f64> {
        self.scroll_history.borrow().clone()
    }

    /// Move the viewport without recording a `scroll_to`
    pub fn set_scroll_offset(&self, offset: f64) {
        self.scroll.set(offset);
    }
}

impl Document for MemoryDocument {
    fn contains(&self, element: &ElementId) -> bool {
        self.elements.borrow().contains_key(element)
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let elements = self.elements.borrow();
        self.order
            .borrow()
            .iter()
            .filter(|id| {
                id.selector() == selector
                    || elements
                        .get(*id)
                        .map(|el| el.matches.iter().any(|m| m == selector))
                        .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    fn text(&self, element: &ElementId) -> Option<String> {
        self.elements.borrow().get(element).map(|el| el.text.clone())
    }

    fn set_text(&self, element: &ElementId, text: &str) {
        if let Some(el) = self.elements.borrow_mut().get_mut(element) {
            el.text = text.to_string();
            el.text_history.push(text.to_string());
        }
    }

    fn set_html(&self, element: &ElementId, html: &str) {
        if let Some(el) = self.elements.borrow_mut().get_mut(element) {
            el.html = Some(html.to_string());
        }
    }

    fn attribute(&self, element: &ElementId, name: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(element)
            .and_then(|el| el.attributes.get(name).cloned())
    }

    fn set_attribute(&self, element: &ElementId, name: &str, value: &str) {
        if let Some(el) = self.elements.borrow_mut().get_mut(element) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_class(&self, element: &ElementId, class: &str, enabled: bool) {
        if let Some(el) = self.elements.borrow_mut().get_mut(element) {
            if enabled {
                el.classes.insert(class.to_string());
            } else {
                el.classes.remove(class);
            }
        }
    }

    fn style(&self, element: &ElementId, property: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(element)
            .and_then(|el| el.styles.get(property).cloned())
    }

    fn set_style(&self, element: &ElementId, property: &str, value: &str) {
        if let Some(el) = self.elements.borrow_mut().get_mut(element) {
            if value.is_empty() {
                el.styles.remove(property);
            } else {
                el.styles.insert(property.to_string(), value.to_string());
            }
        }
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.borrow().get(name).cloned()
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.root_attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll.get()
    }

    fn scroll_to(&self, offset: f64) {
        self.scroll.set(offset);
        self.scroll_history.borrow_mut().push(offset);
    }

    fn bounds(&self, element: &ElementId) -> Option<Bounds> {
        self.elements.borrow().get(element).and_then(|el| el.bounds)
    }
}

/// A preference store held in memory
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<FxHashMap<String, String>>,
    failing: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `StorageUnavailable`
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Read a value bypassing the failure switch
    pub fn peek(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.failing.get() {
            return Err(UiError::StorageUnavailable("storage disabled".to_string()));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.failing.get() {
            return Err(UiError::StorageUnavailable("storage disabled".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

new_key_type! {
    struct WatcherId;
    struct PendingId;
}

struct Watcher {
    element: ElementId,
    options: ObserveOptions,
    /// Taken out while the callback runs
    callback: Option<VisibilityCallback>,
    handle: WatchHandle,
}

/// A visibility observer driven by the test
#[derive(Clone, Default)]
pub struct ManualVisibility {
    watchers: Rc<RefCell<SlotMap<WatcherId, Watcher>>>,
}

impl ManualVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `element` as visible; returns the number of callbacks run
    pub fn reveal(&self, element: &ElementId) -> usize {
        let ids: Vec<WatcherId> = self
            .watchers
            .borrow()
            .iter()
            .filter(|(_, w)| &w.element == element)
            .map(|(id, _)| id)
            .collect();

        let mut fired = 0;
        for id in ids {
            let taken = self
                .watchers
                .borrow_mut()
                .get_mut(id)
                .and_then(|w| w.callback.take().map(|cb| (cb, w.handle.clone())));

            if let Some((mut callback, handle)) = taken {
                callback(&handle);
                fired += 1;
                if let Some(w) = self.watchers.borrow_mut().get_mut(id) {
                    w.callback = Some(callback);
                }
            }
        }
        fired
    }

    /// Number of watchers still attached to `element`
    pub fn watcher_count(&self, element: &ElementId) -> usize {
        self.watchers
            .borrow()
            .values()
            .filter(|w| &w.element == element)
            .count()
    }

    /// Options of the most recent watcher on `element`
    pub fn options(&self, element: &ElementId) -> Option<ObserveOptions> {
        self.watchers
            .borrow()
            .values()
            .filter(|w| &w.element == element)
            .last()
            .map(|w| w.options.clone())
    }
}

impl VisibilityObserver for ManualVisibility {
    fn observe(
        &self,
        element: &ElementId,
        options: &ObserveOptions,
        on_visible: VisibilityCallback,
    ) -> WatchHandle {
        let mut watchers = self.watchers.borrow_mut();
        let id = watchers.insert_with_key(|id| {
            let registry = Rc::downgrade(&self.watchers);
            let handle = WatchHandle::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().remove(id);
                }
            });
            Watcher {
                element: element.clone(),
                options: options.clone(),
                callback: Some(on_visible),
                handle,
            }
        });
        watchers[id].handle.clone()
    }
}

struct Pending {
    due: Duration,
    /// Insertion order, breaks ties between tasks due at the same instant
    seq: u64,
    task: Task,
    handle: TimerHandle,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    seq: u64,
    pending: SlotMap<PendingId, Pending>,
}

/// A deterministic scheduler driven by virtual time
///
/// Tasks run in due order (then insertion order) only from [`advance`](Self::advance)
/// and [`run_next`](Self::run_next). Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Tasks waiting to run that have not been cancelled
    pub fn pending_count(&self) -> usize {
        self.inner
            .borrow()
            .pending
            .values()
            .filter(|p| !p.handle.is_cancelled())
            .count()
    }

    /// Advance virtual time by `by`, running every task that falls due
    ///
    /// Tasks scheduled by running tasks also run if they fall due within the
    /// window. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let deadline = self.now() + by;
        let mut ran = 0;
        while self.run_due(deadline) {
            ran += 1;
        }
        self.inner.borrow_mut().now = deadline;
        ran
    }

    /// Jump to the next pending task and run it; `false` when idle
    pub fn run_next(&self) -> bool {
        self.run_due(Duration::MAX)
    }

    fn run_due(&self, deadline: Duration) -> bool {
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let id = inner
                    .pending
                    .iter()
                    .filter(|(_, p)| p.due <= deadline)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(id, _)| id);
                match id.and_then(|id| inner.pending.remove(id)) {
                    Some(pending) => {
                        inner.now = inner.now.max(pending.due);
                        pending
                    }
                    None => return false,
                }
            };

            if next.handle.is_cancelled() {
                continue;
            }
            (next.task)();
            return true;
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let handle = TimerHandle::new();
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + delay;
        let seq = inner.seq;
        inner.seq += 1;
        inner.pending.insert(Pending {
            due,
            seq,
            task,
            handle: handle.clone(),
        });
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_setters_ignore_missing_elements() {
        let doc = MemoryDocument::new();
        let ghost = ElementId::new("#ghost");
        doc.set_text(&ghost, "hello");
        doc.set_class(&ghost, "active", true);

        assert!(!doc.contains(&ghost));
        assert_eq!(doc.text(&ghost), None);
    }

    #[test]
    fn test_empty_style_removes_property() {
        let doc = MemoryDocument::new();
        let bar = doc.insert("#bar");
        doc.set_style(&bar, "width", "0%");
        doc.set_style(&bar, "width", "");

        assert_eq!(doc.style(&bar, "width"), None);
    }

    #[test]
    fn test_query_all_keeps_insertion_order() {
        let doc = MemoryDocument::new();
        doc.insert_matching("#b", ".stat");
        doc.insert("#other");
        doc.insert_matching("#a", ".stat");

        assert_eq!(
            doc.query_all(".stat"),
            vec![ElementId::new("#b"), ElementId::new("#a")]
        );
    }

    #[test]
    fn test_failing_store() {
        let store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        store.set_failing(true);

        assert!(store.get("theme").is_err());
        assert!(store.set("theme", "light").is_err());
        assert_eq!(store.peek("theme").as_deref(), Some("dark"));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_unobserve_from_inside_callback() {
        let visibility = ManualVisibility::new();
        let element = ElementId::new("#counter");
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();

        visibility.observe(
            &element,
            &ObserveOptions::new(0.5),
            Box::new(move |handle| {
                hits_clone.set(hits_clone.get() + 1);
                handle.unobserve();
            }),
        );

        assert_eq!(visibility.reveal(&element), 1);
        assert_eq!(visibility.reveal(&element), 0);
        assert_eq!(hits.get(), 1);
        assert_eq!(visibility.watcher_count(&element), 0);
    }

    #[test]
    fn test_tasks_run_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(30, "c"), (10, "a"), (20, "b"), (10, "a2")] {
            let log = log.clone();
            scheduler.schedule(ms(delay), Box::new(move || log.borrow_mut().push(label)));
        }

        assert_eq!(scheduler.advance(ms(15)), 2);
        assert_eq!(*log.borrow(), vec!["a", "a2"]);
        assert_eq!(scheduler.now(), ms(15));

        scheduler.advance(ms(100));
        assert_eq!(*log.borrow(), vec!["a", "a2", "b", "c"]);
    }

    #[test]
    fn test_cancelled_task_is_skipped() {
        let scheduler = ManualScheduler::new();
        let ran = Rc::new(Cell::new(false));
        let ran_clone = ran.clone();

        let timer = scheduler.schedule(ms(5), Box::new(move || ran_clone.set(true)));
        timer.cancel();

        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.advance(ms(10)), 0);
        assert!(!ran.get());
    }

    #[test]
    fn test_nested_scheduling_within_window() {
        let scheduler = ManualScheduler::new();
        let count = Rc::new(Cell::new(0));

        let inner_scheduler = scheduler.clone();
        let inner_count = count.clone();
        scheduler.schedule(
            ms(10),
            Box::new(move || {
                inner_count.set(inner_count.get() + 1);
                let again = inner_count.clone();
                inner_scheduler.schedule(ms(10), Box::new(move || again.set(again.get() + 1)));
            }),
        );

        scheduler.advance(ms(20));
        assert_eq!(count.get(), 2);
    }
}
