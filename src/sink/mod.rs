// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Counter sinks for traced ordinals
//!
//! A sink is the only way an ordinal talks to the outside world. It exposes a
//! cheap "is tracing enabled" check and a named-integer counter emission call:
//!
//! - [`TracingSink`]: Forwards counters as `tracing` events (default)
//! - [`MemorySink`]: Records counters in memory, can be switched on and off
//! - [`NoopSink`]: Permanently disabled
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use traced_ordinal::{MemorySink, TracedOrdinal};
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut pending = TracedOrdinal::with_sink("pendingBuffers", 0i32, Arc::clone(&sink));
//! pending.set(3);
//!
//! assert_eq!(sink.last_value("pendingBuffers"), Some(3));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

mod memory;
mod noop;
mod trace;

pub use memory::MemorySink;
pub use noop::NoopSink;
pub use trace::TracingSink;

/// One emitted counter sample
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterSample {
    /// Counter track the sample belongs to
    pub track: String,
    /// Sample value
    pub value: i64,
}

impl CounterSample {
    /// Creates a new sample
    pub fn new(track: impl Into<String>, value: i64) -> Self {
        Self {
            track: track.into(),
            value,
        }
    }
}

impl fmt::Display for CounterSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.track, self.value)
    }
}

/// Trait for counter sink backends
///
/// # Performance
///
/// [`is_enabled`](Self::is_enabled) is called on every assignment of every
/// ordinal using the sink, so it must be a cheap, branch-predictable check.
/// [`emit`](Self::emit) is only called when tracing is enabled.
///
/// # Error Handling
///
/// Emission is fire-and-forget. Implementations must not panic on backend
/// failure; they drop the sample instead.
pub trait CounterSink {
    /// Whether counter samples are currently being collected
    fn is_enabled(&self) -> bool;

    /// Records `value` on the counter track named `track`
    fn emit(&self, track: &str, value: i64);

    /// Returns a human-readable name for this sink backend
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str;
}

impl<S: CounterSink + ?Sized> CounterSink for &S {
    #[inline]
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    #[inline]
    fn emit(&self, track: &str, value: i64) {
        (**self).emit(track, value)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: CounterSink + ?Sized> CounterSink for Box<S> {
    #[inline]
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    #[inline]
    fn emit(&self, track: &str, value: i64) {
        (**self).emit(track, value)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: CounterSink + ?Sized> CounterSink for Arc<S> {
    #[inline]
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    #[inline]
    fn emit(&self, track: &str, value: i64) {
        (**self).emit(track, value)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
