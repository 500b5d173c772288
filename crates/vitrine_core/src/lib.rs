//! Vitrine Core
//!
//! Platform-independent primitives shared by every Vitrine behavior:
//!
//! - **UI context**: [`UiContext`] bundles the page collaborators a behavior needs
//! - **Page traits**: [`Document`], [`PreferenceStore`], [`VisibilityObserver`]
//! - **Timers**: [`Scheduler`] and cancellable [`TimerHandle`]s
//! - **Capabilities**: [`Capability`] for feature-detected collaborators
//! - **Configuration**: [`VitrineConfig`] loaded from TOML
//!
//! Behaviors never reach for browser globals directly. The web extension
//! implements these traits over `web-sys`; tests use the in-memory doubles in
//! [`testing`] (behind the `testing` feature).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use vitrine_core::{Capability, UiContext};
//!
//! let ctx = UiContext::new(document, scheduler)
//!     .with_storage(Capability::Available(storage))
//!     .with_visibility(Capability::Unavailable);
//! ```

pub mod capability;
pub mod config;
pub mod context;
pub mod document;
pub mod element;
pub mod error;
pub mod storage;
pub mod timer;
pub mod visibility;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use capability::Capability;
pub use config::VitrineConfig;
pub use context::UiContext;
pub use document::Document;
pub use element::{Bounds, ElementId};
pub use error::{Result, UiError};
pub use storage::PreferenceStore;
pub use timer::{Scheduler, Task, TimerHandle};
pub use visibility::{ObserveOptions, VisibilityCallback, VisibilityObserver, WatchHandle};
