//! `IntersectionObserver` watchers

use std::cell::RefCell;
use std::rc::Rc;
use vitrine_core::{
    Capability, ElementId, ObserveOptions, VisibilityCallback, VisibilityObserver, WatchHandle,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

/// One `IntersectionObserver` per watched element
pub struct IntersectionVisibility {
    document: web_sys::Document,
}

impl IntersectionVisibility {
    /// Available only when the browser defines `IntersectionObserver`
    pub fn detect(window: &Window, document: web_sys::Document) -> Capability<Rc<dyn VisibilityObserver>> {
        let global: &JsValue = window.as_ref();
        let supported = js_sys::Reflect::has(global, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if supported {
            Capability::Available(Rc::new(Self { document }))
        } else {
            Capability::Unavailable
        }
    }
}

impl VisibilityObserver for IntersectionVisibility {
    fn observe(
        &self,
        element: &ElementId,
        options: &ObserveOptions,
        mut on_visible: VisibilityCallback,
    ) -> WatchHandle {
        let Some(target) = self.document.query_selector(element.selector()).ok().flatten() else {
            tracing::debug!("nothing to observe at {}", element);
            return WatchHandle::detached();
        };

        let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));
        let detach_slot = observer_slot.clone();
        let handle = WatchHandle::new(move || {
            if let Some(observer) = detach_slot.borrow_mut().take() {
                observer.disconnect();
            }
        });

        let callback_handle = handle.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                if visible && callback_handle.is_observing() {
                    on_visible(&callback_handle);
                }
            },
        )
        // Owned by the observer from here on; released once it disconnects
        .into_js_value();

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        match IntersectionObserver::new_with_options(callback.unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&target);
                *observer_slot.borrow_mut() = Some(observer);
                handle
            }
            Err(err) => {
                tracing::warn!("IntersectionObserver rejected options for {}: {:?}", element, err);
                WatchHandle::detached()
            }
        }
    }
}
