//! Page document abstraction

use crate::element::{Bounds, ElementId};

/// The page a behavior reads from and writes to
///
/// Every setter addressing a missing element is a silent no-op, and every
/// getter returns `None` for it. Methods take `&self`: implementations hold
/// interior state the same way the browser DOM does.
pub trait Document {
    /// Whether the element is present
    fn contains(&self, element: &ElementId) -> bool;

    /// All elements matching a selector, in document order
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    fn text(&self, element: &ElementId) -> Option<String>;

    fn set_text(&self, element: &ElementId, text: &str);

    /// Replace the element's children with parsed `html`
    fn set_html(&self, element: &ElementId, html: &str);

    fn attribute(&self, element: &ElementId, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &ElementId, name: &str, value: &str);

    /// Add (`enabled = true`) or remove a class
    fn set_class(&self, element: &ElementId, class: &str, enabled: bool);

    /// Inline style value, `None` when unset
    fn style(&self, element: &ElementId, property: &str) -> Option<String>;

    /// Set an inline style; an empty `value` removes the inline property
    fn set_style(&self, element: &ElementId, property: &str, value: &str);

    /// Attribute of the document root (`<html>`)
    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_root_attribute(&self, name: &str, value: &str);

    /// Current vertical scroll offset in pixels
    fn scroll_offset(&self) -> f64;

    fn scroll_to(&self, offset: f64);

    /// Element extent in document coordinates
    fn bounds(&self, element: &ElementId) -> Option<Bounds>;
}
