//! `localStorage` preference store

use std::rc::Rc;
use vitrine_core::{Capability, PreferenceStore, Result, UiError};
use web_sys::{Storage, Window};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// `localStorage` when the browser exposes it
    ///
    /// Private browsing modes may throw on access or hand back `null`; both
    /// count as unavailable.
    pub fn detect(window: &Window) -> Capability<Rc<dyn PreferenceStore>> {
        match window.local_storage() {
            Ok(Some(storage)) => Capability::Available(Rc::new(Self { storage })),
            Ok(None) => {
                tracing::info!("localStorage unavailable, theme will not persist");
                Capability::Unavailable
            }
            Err(err) => {
                tracing::info!("localStorage blocked, theme will not persist: {:?}", err);
                Capability::Unavailable
            }
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| UiError::StorageUnavailable(format!("{:?}", err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| UiError::StorageUnavailable(format!("{:?}", err)))
    }
}
