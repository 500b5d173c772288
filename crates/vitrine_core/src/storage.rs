//! Persistent key-value preferences

use crate::error::Result;

/// String key-value storage that outlives a page session
///
/// Errors are [`UiError::StorageUnavailable`](crate::UiError::StorageUnavailable);
/// callers degrade to in-memory state instead of surfacing them.
pub trait PreferenceStore {
    /// `Ok(None)` when the key has never been written
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}
