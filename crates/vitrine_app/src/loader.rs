//! Configuration embedded in the page

use vitrine_core::{Document, ElementId, VitrineConfig};

/// Read the TOML configuration from the text of `source`
///
/// A missing element gives the defaults; a malformed document is logged and
/// also gives the defaults.
pub fn load_config(document: &dyn Document, source: &ElementId) -> VitrineConfig {
    let Some(text) = document.text(source) else {
        return VitrineConfig::default();
    };

    match VitrineConfig::from_toml_str(&text) {
        Ok(config) => {
            tracing::debug!("loaded configuration from {}", source);
            config
        }
        Err(err) => {
            tracing::warn!("ignoring configuration in {}: {}", source, err);
            VitrineConfig::default()
        }
    }
}
