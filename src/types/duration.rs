// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for signed monotonic durations
//!
//! [`std::time::Duration`] is unsigned, but instrumented timing values (vsync
//! offsets, deadline slack, prediction error) routinely go negative. This module
//! provides a signed nanosecond duration that converts exactly to a counter sample.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::errors::ConversionError;

/// A signed duration measured in nanoseconds
///
/// The range is `i64` nanoseconds, roughly ±292 years. Arithmetic saturates at
/// the bounds instead of wrapping.
///
/// # Examples
///
/// ```
/// use traced_ordinal::Nanoseconds;
///
/// let period = Nanoseconds::from_micros(16_667);
/// let early = Nanoseconds::from_millis(20) - period - period;
/// assert!(early.is_negative());
/// assert_eq!(early.as_nanos(), -13_334_000);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Nanoseconds(i64);

impl Nanoseconds {
    /// Zero duration
    pub const ZERO: Self = Self(0);

    /// Largest representable duration
    pub const MAX: Self = Self(i64::MAX);

    /// Smallest (most negative) representable duration
    pub const MIN: Self = Self(i64::MIN);

    /// Create a duration from a nanosecond count
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Create a duration from microseconds, saturating on overflow
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros.saturating_mul(1_000))
    }

    /// Create a duration from milliseconds, saturating on overflow
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(1_000_000))
    }

    /// Create a duration from whole seconds, saturating on overflow
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1_000_000_000))
    }

    /// The nanosecond tick count
    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    /// Whether the duration is below zero
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value, saturating for [`Nanoseconds::MIN`]
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }
}

impl From<i64> for Nanoseconds {
    fn from(nanos: i64) -> Self {
        Self(nanos)
    }
}

impl TryFrom<std::time::Duration> for Nanoseconds {
    type Error = ConversionError;

    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        i64::try_from(value.as_nanos())
            .map(Self)
            .map_err(|_| {
                ConversionError::duration_overflow(format!("{value:?} exceeds i64 nanoseconds"))
            })
    }
}

impl TryFrom<chrono::TimeDelta> for Nanoseconds {
    type Error = ConversionError;

    fn try_from(value: chrono::TimeDelta) -> Result<Self, Self::Error> {
        value
            .num_nanoseconds()
            .map(Self)
            .ok_or_else(|| {
                ConversionError::duration_overflow(format!("{value} exceeds i64 nanoseconds"))
            })
    }
}

impl From<Nanoseconds> for chrono::TimeDelta {
    fn from(value: Nanoseconds) -> Self {
        chrono::TimeDelta::nanoseconds(value.0)
    }
}

impl Add for Nanoseconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Nanoseconds {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Nanoseconds {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.saturating_neg())
    }
}

impl fmt::Display for Nanoseconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}
