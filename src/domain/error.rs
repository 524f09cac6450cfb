//! Error types for the neonfeed plugin.
//!
//! The engagement store itself is total and never fails. [`NeonfeedError`]
//! covers the ambient failure surface around it: loading the embedded
//! dataset, reading themes and configuration, and looking up entities that a
//! navigation request names but the dataset does not contain.

use thiserror::Error;

/// The main error type for neonfeed operations.
///
/// Variants wrapping third-party errors convert automatically through
/// `#[from]`, so loaders can use `?` directly on `serde_json` and `std::io`
/// results.
///
/// # Examples
///
/// ```
/// use neonfeed::NeonfeedError;
///
/// let err = NeonfeedError::NotFound { kind: "post", key: "42".to_string() };
/// assert_eq!(err.to_string(), "post not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum NeonfeedError {
    /// The embedded or supplied mock dataset could not be deserialized.
    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A view was asked to display an entity the dataset does not contain.
    ///
    /// Raised by identifier-based navigation (`OpenPost`, `OpenProfile`).
    /// Membership queries never raise it: unknown identifiers are simply
    /// "not a member".
    #[error("{kind} not found: {key}")]
    NotFound {
        /// Entity family that was looked up ("post", "person", ...).
        kind: &'static str,
        /// Identifier or handle that failed to resolve.
        key: String,
    },
}

/// A specialized `Result` type for neonfeed operations.
pub type Result<T> = std::result::Result<T, NeonfeedError>;
