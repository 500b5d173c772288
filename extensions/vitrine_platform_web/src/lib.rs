//! Vitrine Web Platform
//!
//! Implements the Vitrine page traits over `web-sys` and boots the portfolio
//! from a `wasm-bindgen` start function:
//!
//! - [`WebDocument`]: DOM queries, classes, inline styles, and window scrolling
//! - [`LocalStorage`]: `localStorage` preference store, feature detected
//! - [`TimeoutScheduler`]: `setTimeout`-backed [`Scheduler`](vitrine_core::Scheduler)
//! - [`IntersectionVisibility`]: `IntersectionObserver` watchers, feature detected
//! - [`logging`]: `tracing` output routed to the browser console
//!
//! Everything except [`logging`] only exists on `wasm32`.

pub mod logging;

#[cfg(target_arch = "wasm32")]
mod document;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod timer;
#[cfg(target_arch = "wasm32")]
mod visibility;

#[cfg(target_arch = "wasm32")]
pub use document::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
#[cfg(target_arch = "wasm32")]
pub use timer::TimeoutScheduler;
#[cfg(target_arch = "wasm32")]
pub use visibility::IntersectionVisibility;

/// Element whose text holds the page's TOML configuration
pub const CONFIG_SELECTOR: &str = "#vitrine-config";

#[cfg(target_arch = "wasm32")]
mod start {
    use crate::{events, logging, IntersectionVisibility, LocalStorage, TimeoutScheduler, WebDocument};
    use std::cell::RefCell;
    use std::rc::Rc;
    use vitrine_app::{load_config, Portfolio};
    use vitrine_core::{ElementId, UiContext};
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        logging::init(logging::default_level());

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let page = Rc::new(WebDocument::new(window.clone(), document.clone()));
        let ctx = UiContext::new(page.clone(), Rc::new(TimeoutScheduler::new(window.clone())))
            .with_storage(LocalStorage::detect(&window))
            .with_visibility(IntersectionVisibility::detect(&window, document.clone()));
        if ctx.visibility().is_none() {
            tracing::info!("IntersectionObserver unavailable, showing animations immediately");
        }

        let config = load_config(page.as_ref(), &ElementId::new(crate::CONFIG_SELECTOR));
        let portfolio = Rc::new(RefCell::new(Portfolio::init(ctx, config)));
        events::bind(&window, &document, portfolio)
    }
}
