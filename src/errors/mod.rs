// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the traced-ordinal library.
//!
//! The core wrapper never fails: assignment is infallible and counter emission is
//! fire-and-forget. Errors only exist at the edges of the crate, where values and
//! settings enter from the outside:
//!
//! - [`ConfigError`] - Errors from validating an [`OrdinalConfig`](crate::OrdinalConfig)
//! - [`ConversionError`] - Errors from converting foreign durations into
//!   [`Nanoseconds`](crate::Nanoseconds)
//!
//! [`TracedOrdinalError`] unifies both for callers that don't need to tell them apart.
//!
//! # Examples
//!
//! ```
//! use traced_ordinal::{Nanoseconds, OrdinalConfigBuilder, TracedOrdinalError};
//! use std::time::Duration;
//!
//! fn setup() -> Result<(), TracedOrdinalError> {
//!     let _config = OrdinalConfigBuilder::with_defaults()
//!         .negative_suffix("Neg")
//!         .build()?;
//!     let _timeout = Nanoseconds::try_from(Duration::from_millis(16))?;
//!     Ok(())
//! }
//!
//! assert!(setup().is_ok());
//! ```

mod config;
mod conversion;

pub use config::ConfigError;
pub use conversion::ConversionError;

/// Unified error type for all traced-ordinal operations.
///
/// Module-specific errors convert into this type via `From`, so `?` works across
/// configuration, conversion and export code paths.
#[derive(Debug, thiserror::Error)]
pub enum TracedOrdinalError {
    /// Error from configuration validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from converting a value into a traceable ordinal.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Error serializing recorded counter samples.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
