//! Vitrine Navigation
//!
//! Scroll-driven navbar styling, scroll-spy highlighting of the current
//! section, and eased scrolling to in-page anchors.

pub mod anchor;
pub mod navbar;
pub mod spy;

pub use anchor::AnchorScroller;
pub use navbar::NavbarState;
pub use spy::Section;
