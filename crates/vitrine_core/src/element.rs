//! Element addressing

use std::fmt;

/// A selector addressing one element of the page
///
/// Platform implementations resolve it to the first matching element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    /// The selector text
    pub fn selector(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

impl From<String> for ElementId {
    fn from(selector: String) -> Self {
        Self(selector)
    }
}

/// Vertical extent of an element, in document coordinates (pixels)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Distance from the top of the document
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}
