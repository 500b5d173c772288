//! Page event wiring

use std::cell::RefCell;
use std::rc::Rc;
use vitrine_app::Portfolio;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, Window};

/// Links handled by the smooth scroller
const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

/// Route window and element events to `portfolio`
///
/// The listeners live for the rest of the page, and so does the portfolio.
pub fn bind(
    window: &Window,
    document: &web_sys::Document,
    portfolio: Rc<RefCell<Portfolio>>,
) -> Result<(), JsValue> {
    let page = portfolio.clone();
    listen(window, "scroll", move |_| page.borrow().on_scroll())?;

    if document.ready_state() == "complete" {
        portfolio.borrow_mut().on_load();
    } else {
        let page = portfolio.clone();
        listen(window, "load", move |_| page.borrow_mut().on_load())?;
    }

    let config = portfolio.borrow().config().clone();

    if let Some(toggle) = document.query_selector(&config.theme.toggle)? {
        let page = portfolio.clone();
        listen(&toggle, "click", move |_| {
            page.borrow().on_theme_toggle();
        })?;
    }

    if let Some(button) = document.query_selector(&config.nav.back_to_top)? {
        let page = portfolio.clone();
        listen(&button, "click", move |event| {
            event.prevent_default();
            page.borrow().on_back_to_top();
        })?;
    }

    let anchors = document.query_selector_all(ANCHOR_LINKS)?;
    for index in 0..anchors.length() {
        let Some(anchor) = anchors.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let page = portfolio.clone();
        let link = anchor.clone();
        listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            if page.borrow().on_anchor_click(&href) {
                event.prevent_default();
            }
        })?;
    }

    tracing::debug!("bound {} anchor links", anchors.length());
    Ok(())
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
