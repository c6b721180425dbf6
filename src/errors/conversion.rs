// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for converting foreign values into traceable ordinals.

/// Errors that can occur when converting a value into an ordinal kind.
///
/// Counter samples are exact 64-bit integers, so a conversion that would lose
/// precision is rejected rather than silently truncated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A duration does not fit in a signed 64-bit nanosecond count.
    ///
    /// This happens for spans longer than roughly 292 years.
    #[error("Duration overflow: {details}")]
    DurationOverflow {
        /// Details about the duration that overflowed
        details: String,
    },
}

impl ConversionError {
    /// Create a `DurationOverflow` error with details.
    pub fn duration_overflow(details: impl Into<String>) -> Self {
        ConversionError::DurationOverflow {
            details: details.into(),
        }
    }
}
