//! DOM-backed [`Document`]

use std::cell::Cell;
use vitrine_core::{Bounds, Document, ElementId};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

/// Attribute stamped on elements returned from `query_all`
const KEY_ATTRIBUTE: &str = "data-vitrine-key";

/// The live page
///
/// Elements are addressed by CSS selector. Elements handed out by
/// [`query_all`](Document::query_all) get a `data-vitrine-key` attribute so
/// each one keeps a unique selector.
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
    next_key: Cell<u64>,
}

impl WebDocument {
    pub fn new(window: Window, document: web_sys::Document) -> Self {
        Self {
            window,
            document,
            next_key: Cell::new(0),
        }
    }

    fn find(&self, element: &ElementId) -> Option<Element> {
        match self.document.query_selector(element.selector()) {
            Ok(found) => found,
            Err(err) => {
                tracing::debug!("invalid selector {}: {:?}", element, err);
                None
            }
        }
    }

    fn find_html(&self, element: &ElementId) -> Option<HtmlElement> {
        self.find(element)?.dyn_into::<HtmlElement>().ok()
    }

    fn key_of(&self, element: &Element) -> String {
        if let Some(key) = element.get_attribute(KEY_ATTRIBUTE) {
            return key;
        }
        let key = self.next_key.get();
        self.next_key.set(key + 1);
        let key = key.to_string();
        if let Err(err) = element.set_attribute(KEY_ATTRIBUTE, &key) {
            tracing::debug!("could not key element: {:?}", err);
        }
        key
    }
}

impl Document for WebDocument {
    fn contains(&self, element: &ElementId) -> bool {
        self.find(element).is_some()
    }

    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let nodes = match self.document.query_selector_all(selector) {
            Ok(nodes) => nodes,
            Err(err) => {
                tracing::warn!("invalid selector {}: {:?}", selector, err);
                return Vec::new();
            }
        };

        (0..nodes.length())
            .filter_map(|index| nodes.item(index)?.dyn_into::<Element>().ok())
            .map(|element| {
                let key = self.key_of(&element);
                ElementId::new(format!("[{}=\"{}\"]", KEY_ATTRIBUTE, key))
            })
            .collect()
    }

    fn text(&self, element: &ElementId) -> Option<String> {
        self.find(element).map(|el| el.text_content().unwrap_or_default())
    }

    fn set_text(&self, element: &ElementId, text: &str) {
        if let Some(el) = self.find(element) {
            el.set_text_content(Some(text));
        }
    }

    fn set_html(&self, element: &ElementId, html: &str) {
        if let Some(el) = self.find(element) {
            el.set_inner_html(html);
        }
    }

    fn attribute(&self, element: &ElementId, name: &str) -> Option<String> {
        self.find(element)?.get_attribute(name)
    }

    fn set_attribute(&self, element: &ElementId, name: &str, value: &str) {
        if let Some(el) = self.find(element) {
            if let Err(err) = el.set_attribute(name, value) {
                tracing::debug!("set_attribute {} on {} failed: {:?}", name, element, err);
            }
        }
    }

    fn set_class(&self, element: &ElementId, class: &str, enabled: bool) {
        if let Some(el) = self.find(element) {
            if let Err(err) = el.class_list().toggle_with_force(class, enabled) {
                tracing::debug!("class {} on {} failed: {:?}", class, element, err);
            }
        }
    }

    fn style(&self, element: &ElementId, property: &str) -> Option<String> {
        self.find_html(element)?
            .style()
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, element: &ElementId, property: &str, value: &str) {
        let Some(el) = self.find_html(element) else {
            return;
        };
        let style = el.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            tracing::debug!("style {} on {} failed: {:?}", property, element, err);
        }
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        if let Err(err) = root.set_attribute(name, value) {
            tracing::warn!("could not set {} on the root element: {:?}", name, err);
        }
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&self, offset: f64) {
        self.window.scroll_to_with_x_and_y(0.0, offset);
    }

    fn bounds(&self, element: &ElementId) -> Option<Bounds> {
        let rect = self.find(element)?.get_bounding_client_rect();
        Some(Bounds::new(rect.top() + self.scroll_offset(), rect.height()))
    }
}
