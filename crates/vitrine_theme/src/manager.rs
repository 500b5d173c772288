//! Theme manager
//!
//! Owns the page's light/dark mode. The document root attribute is the
//! source of truth for the applied mode; the preference store mirrors it
//! after every change. A session copy covers pages where storage fails.

use crate::affordance::ToggleAffordance;
use crate::mode::ThemeMode;
use std::cell::{Cell, RefCell};
use vitrine_core::config::ThemeConfig;
use vitrine_core::{ElementId, UiContext};

/// Callback invoked after the applied mode changes
pub type ChangeCallback = Box<dyn Fn(ThemeMode)>;

/// Reads, applies, persists, and toggles the page theme
pub struct ThemeManager {
    ctx: UiContext,
    config: ThemeConfig,
    /// Last applied mode, used when the root attribute is missing
    session: Cell<ThemeMode>,
    on_change: RefCell<Option<ChangeCallback>>,
}

impl ThemeManager {
    pub fn new(ctx: UiContext, config: ThemeConfig) -> Self {
        Self {
            ctx,
            config,
            session: Cell::new(ThemeMode::default()),
            on_change: RefCell::new(None),
        }
    }

    /// Register a callback run after every `initialize` and `toggle`
    pub fn set_change_callback(&self, callback: impl Fn(ThemeMode) + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(callback));
    }

    /// Apply the stored mode, storing dark when nothing usable is stored
    pub fn initialize(&self) -> ThemeMode {
        let mode = match self.load() {
            Some(mode) => mode,
            None => {
                let mode = ThemeMode::default();
                tracing::debug!("no stored theme, defaulting to {}", mode);
                self.persist(mode);
                mode
            }
        };

        self.apply(mode);
        mode
    }

    /// Switch to the opposite of the applied mode and persist it
    pub fn toggle(&self) -> ThemeMode {
        let next = self.current().toggled();
        tracing::debug!("ThemeManager::toggle - switching to {}", next);
        self.apply(next);
        self.persist(next);
        next
    }

    /// The applied mode
    pub fn current(&self) -> ThemeMode {
        self.ctx
            .document()
            .root_attribute(&self.config.attribute)
            .and_then(|value| ThemeMode::parse(&value))
            .unwrap_or_else(|| self.session.get())
    }

    /// The stored mode, `None` when absent, invalid, or unreadable
    pub fn stored(&self) -> Option<ThemeMode> {
        self.load()
    }

    fn load(&self) -> Option<ThemeMode> {
        let storage = self.ctx.storage()?;
        match storage.get(&self.config.storage_key) {
            Ok(Some(value)) => {
                let mode = ThemeMode::parse(&value);
                if mode.is_none() {
                    tracing::debug!("ignoring stored theme {:?}", value);
                }
                mode
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!("theme preference unreadable, using session value: {}", err);
                None
            }
        }
    }

    fn persist(&self, mode: ThemeMode) {
        let Some(storage) = self.ctx.storage() else {
            return;
        };
        if let Err(err) = storage.set(&self.config.storage_key, mode.as_str()) {
            tracing::warn!("theme preference not saved, keeping it for this session: {}", err);
        }
    }

    fn apply(&self, mode: ThemeMode) {
        self.session.set(mode);
        self.ctx
            .document()
            .set_root_attribute(&self.config.attribute, mode.as_str());
        self.update_affordance(mode);

        if let Some(callback) = self.on_change.borrow().as_ref() {
            callback(mode);
        }
    }

    fn update_affordance(&self, mode: ThemeMode) {
        let document = self.ctx.document();
        let toggle = ElementId::new(self.config.toggle.as_str());
        if !document.contains(&toggle) {
            return;
        }

        let affordance = ToggleAffordance::for_mode(mode);
        document.set_attribute(&toggle, "title", affordance.title);
        document.set_html(&toggle, &affordance.icon_html());
    }
}
