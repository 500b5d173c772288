//! Injectable UI context
//!
//! Replaces ambient globals (`document`, `localStorage`, `IntersectionObserver`,
//! `setTimeout`) with explicit collaborators so each behavior can be driven in
//! isolation.

use crate::capability::Capability;
use crate::document::Document;
use crate::storage::PreferenceStore;
use crate::timer::Scheduler;
use crate::visibility::VisibilityObserver;
use std::rc::Rc;

/// Collaborators shared by every behavior on a page
///
/// Cheap to clone: all fields are reference counted.
#[derive(Clone)]
pub struct UiContext {
    document: Rc<dyn Document>,
    scheduler: Rc<dyn Scheduler>,
    storage: Capability<Rc<dyn PreferenceStore>>,
    visibility: Capability<Rc<dyn VisibilityObserver>>,
}

impl UiContext {
    /// Create a context with no storage and no visibility detection
    pub fn new(document: Rc<dyn Document>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            document,
            scheduler,
            storage: Capability::Unavailable,
            visibility: Capability::Unavailable,
        }
    }

    pub fn with_storage(mut self, storage: Capability<Rc<dyn PreferenceStore>>) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_visibility(mut self, visibility: Capability<Rc<dyn VisibilityObserver>>) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn document(&self) -> &dyn Document {
        self.document.as_ref()
    }

    pub fn scheduler(&self) -> &Rc<dyn Scheduler> {
        &self.scheduler
    }

    pub fn storage(&self) -> Option<&dyn PreferenceStore> {
        self.storage.get().map(|s| s.as_ref())
    }

    pub fn visibility(&self) -> Option<&dyn VisibilityObserver> {
        self.visibility.get().map(|v| v.as_ref())
    }
}
