//! Vitrine Theme Manager
//!
//! Light/dark mode for the page, persisted under a single preference key.
//!
//! # Overview
//!
//! - [`ThemeMode`]: the two visual modes and their string forms
//! - [`ThemeManager`]: reads the stored preference at load, applies it to the
//!   document root, and flips it on toggle
//! - [`ToggleAffordance`]: icon and title shown by the toggle button
//!
//! New visitors get dark mode, and that default is written back immediately.
//! When storage is unavailable the mode lives in memory for the session.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vitrine_theme::ThemeManager;
//!
//! let theme = ThemeManager::new(ctx.clone(), config.theme.clone());
//! theme.initialize();
//!
//! // On toggle click
//! let mode = theme.toggle();
//! ```

pub mod affordance;
pub mod manager;
pub mod mode;

pub use affordance::ToggleAffordance;
pub use manager::ThemeManager;
pub use mode::ThemeMode;
