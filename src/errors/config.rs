//! Error types for ordinal configuration.

/// Errors that can occur while validating an [`OrdinalConfig`](crate::OrdinalConfig).
///
/// # Examples
///
/// ```
/// use traced_ordinal::{ConfigError, OrdinalConfigBuilder};
///
/// let err = OrdinalConfigBuilder::new().negative_suffix("").build().unwrap_err();
/// assert!(matches!(err, ConfigError::EmptySuffix));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The negative-track suffix was empty.
    ///
    /// An empty suffix would make the negative track share the primary track's
    /// name, so the two series would overwrite each other.
    #[error("Negative track suffix must not be empty")]
    EmptySuffix,

    /// The negative-track suffix contains characters trace tools can't handle.
    #[error("Invalid negative track suffix {suffix:?}: {reason}")]
    InvalidSuffix {
        /// The rejected suffix
        suffix: String,
        /// Why it was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Create an `InvalidSuffix` error.
    pub fn invalid_suffix(suffix: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidSuffix {
            suffix: suffix.into(),
            reason: reason.into(),
        }
    }
}
