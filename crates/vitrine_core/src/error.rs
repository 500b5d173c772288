//! Error types

use crate::element::ElementId;
use thiserror::Error;

/// Failures a behavior can run into
///
/// None of these reach the page: every component boundary turns them into a
/// log line and a degraded behavior.
#[derive(Error, Debug)]
pub enum UiError {
    /// A required element is not present in the document
    #[error("Element not found: {0}")]
    MissingElement(ElementId),

    /// A counter target that does not parse as an integer
    #[error("Invalid counter target: {0:?}")]
    InvalidCount(String),

    /// The typing animator was given an empty phrase list
    #[error("Typing animator needs at least one phrase")]
    NoPhrases,

    /// A counter configured with zero steps
    #[error("Counter step count must be at least 1")]
    InvalidSteps,

    /// The preference store rejected a read or write
    #[error("Preference storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The TOML configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for Vitrine operations
pub type Result<T> = std::result::Result<T, UiError>;
