//! Configuration for traced ordinals
//!
//! This module controls how an ordinal names its tracks. The defaults match the
//! convention most trace viewers already expect, so most callers never need it.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use traced_ordinal::OrdinalConfig;
//!
//! let config = OrdinalConfig::default();
//! assert_eq!(config.negative_suffix(), "Negative");
//! ```
//!
//! # Example: Custom suffix
//!
//! ```rust
//! use traced_ordinal::OrdinalConfigBuilder;
//!
//! let config = OrdinalConfigBuilder::with_defaults()
//!     .negative_suffix("_neg")
//!     .build()
//!     .expect("valid suffix");
//! assert_eq!(config.negative_track_name("frameMiss"), "frameMiss_neg");
//! ```

use std::borrow::Cow;

use crate::errors::ConfigError;

pub mod constants;

use constants::NEGATIVE_SUFFIX;

/// Configuration for traced ordinals
///
/// Use [`OrdinalConfigBuilder`] to construct a validated instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdinalConfig {
    /// Suffix appended to the ordinal name to form the negative track name
    /// Default: `"Negative"`
    negative_suffix: Cow<'static, str>,
}

impl Default for OrdinalConfig {
    fn default() -> Self {
        Self {
            negative_suffix: Cow::Borrowed(NEGATIVE_SUFFIX),
        }
    }
}

impl OrdinalConfig {
    /// Suffix used to derive the negative track name
    pub fn negative_suffix(&self) -> &str {
        &self.negative_suffix
    }

    /// Derive the negative track name for an ordinal called `name`
    pub fn negative_track_name(&self, name: &str) -> String {
        suffixed_track_name(name, &self.negative_suffix)
    }

    pub(crate) fn suffix_cow(&self) -> Cow<'static, str> {
        self.negative_suffix.clone()
    }
}

/// `name` followed by `suffix`, allocated once at the exact length
pub(crate) fn suffixed_track_name(name: &str, suffix: &str) -> String {
    let mut track = String::with_capacity(name.len() + suffix.len());
    track.push_str(name);
    track.push_str(suffix);
    track
}

/// Builder for [`OrdinalConfig`]
///
/// # Example
///
/// ```rust
/// use traced_ordinal::OrdinalConfigBuilder;
///
/// let config = OrdinalConfigBuilder::new().build().unwrap();
/// assert_eq!(config.negative_suffix(), "Negative");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrdinalConfigBuilder {
    config: OrdinalConfig,
}

impl OrdinalConfigBuilder {
    /// Create a new builder starting from the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with default settings
    ///
    /// Same as [`new`](Self::new); kept for symmetry with call sites that read
    /// `with_defaults().<override>()`.
    pub fn with_defaults() -> Self {
        Self::new()
    }

    /// Set the negative track suffix
    pub fn negative_suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.config.negative_suffix = suffix.into();
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySuffix`] for an empty suffix and
    /// [`ConfigError::InvalidSuffix`] for one containing whitespace or control
    /// characters.
    pub fn build(self) -> Result<OrdinalConfig, ConfigError> {
        let suffix = self.config.negative_suffix.as_ref();
        if suffix.is_empty() {
            return Err(ConfigError::EmptySuffix);
        }
        if suffix.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ConfigError::invalid_suffix(
                suffix,
                "whitespace and control characters are not allowed in track names",
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suffix() {
        let config = OrdinalConfig::default();
        assert_eq!(config.negative_suffix(), NEGATIVE_SUFFIX);
        assert!(matches!(config.negative_suffix, Cow::Borrowed(_)));
    }

    #[test]
    fn test_negative_track_name() {
        let config = OrdinalConfig::default();
        assert_eq!(config.negative_track_name("X"), "XNegative");
    }

    #[test]
    fn test_builder_custom_suffix() {
        let config = OrdinalConfigBuilder::with_defaults()
            .negative_suffix(String::from(".neg"))
            .build()
            .unwrap();
        assert_eq!(config.negative_track_name("depth"), "depth.neg");
    }

    #[test]
    fn test_builder_rejects_empty_suffix() {
        let result = OrdinalConfigBuilder::new().negative_suffix("").build();
        assert_eq!(result, Err(ConfigError::EmptySuffix));
    }

    #[test]
    fn test_builder_rejects_whitespace_suffix() {
        let result = OrdinalConfigBuilder::new().negative_suffix(" Negative").build();
        assert!(matches!(result, Err(ConfigError::InvalidSuffix { .. })));

        let result = OrdinalConfigBuilder::new().negative_suffix("Neg\n").build();
        assert!(matches!(result, Err(ConfigError::InvalidSuffix { .. })));
    }
}
