//! Vitrine Application Layer
//!
//! Wires every page behavior from a [`VitrineConfig`] in page-load order and
//! routes page events to them.
//!
//! # Example
//!
//! ```ignore
//! use vitrine_app::prelude::*;
//!
//! let config = load_config(ctx.document(), &ElementId::new("#vitrine-config"));
//! let mut portfolio = Portfolio::init(ctx, config);
//!
//! // From the page's event listeners
//! portfolio.on_scroll();
//! portfolio.on_theme_toggle();
//! portfolio.on_anchor_click("#about");
//! ```

mod loader;
mod portfolio;

pub use loader::load_config;
pub use portfolio::Portfolio;

pub use vitrine_core::VitrineConfig;

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::loader::load_config;
    pub use crate::portfolio::Portfolio;

    pub use vitrine_core::{Capability, Document, ElementId, UiContext, VitrineConfig};
    pub use vitrine_theme::ThemeMode;
}
