// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Scalar wrapper that mirrors every assignment to counter tracks
//!
//! Many trace viewers plot a counter track as a magnitude and cannot show
//! negative samples alongside positive ones. [`TracedOrdinal`] therefore keeps
//! two tracks per value:
//!
//! - `<name>`: the value while it is non-negative, `0` while it is negative
//! - `<name>Negative`: the magnitude while the value is negative, `0` otherwise
//!
//! The negative track is only written once the value has gone negative at least
//! once. From then on both tracks are written on every assignment so they stay
//! dense for graphing tools that expect a regular sample cadence.
//!
//! # Example
//!
//! ```
//! use traced_ordinal::{CounterSample, MemorySink, TracedOrdinal};
//!
//! let sink = MemorySink::new();
//! let mut x = TracedOrdinal::with_sink("X", 5i32, &sink);
//! x.set(-3);
//! x.set(2);
//!
//! let samples: Vec<String> = sink.samples().iter().map(ToString::to_string).collect();
//! assert_eq!(samples, ["X=5", "XNegative=3", "X=0", "X=2", "XNegative=0"]);
//! ```

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::config::{suffixed_track_name, OrdinalConfig};
use crate::sink::{CounterSink, TracingSink};
use crate::types::kind::Ordinal;

/// A scalar whose every assignment is mirrored to a [`CounterSink`]
///
/// Reads go through [`get`](Self::get); writes go through [`set`](Self::set) or
/// [`update`](Self::update). Tracing never alters the stored value, and when the
/// sink is disabled an assignment costs one `is_enabled` check on top of the store.
///
/// The wrapper does no locking. `set` takes `&mut self`, so concurrent mutation
/// of one instance has to be serialised by its owner.
pub struct TracedOrdinal<T: Ordinal, S: CounterSink = TracingSink> {
    name: String,
    suffix: Cow<'static, str>,
    /// Built on the first enabled emission, never rebuilt
    negative_track: Option<String>,
    /// Latched: never goes back to false
    has_gone_negative: bool,
    value: T,
    sink: S,
}

impl<T: Ordinal> TracedOrdinal<T, TracingSink> {
    /// Creates an ordinal that reports through the `tracing` ecosystem
    ///
    /// Emits the initial value immediately if a subscriber is listening.
    pub fn new(name: impl Into<String>, initial: T) -> Self {
        Self::with_sink(name, initial, TracingSink)
    }
}

impl<T: Ordinal, S: CounterSink> TracedOrdinal<T, S> {
    /// Creates an ordinal reporting to `sink`, using the default track suffix
    pub fn with_sink(name: impl Into<String>, initial: T, sink: S) -> Self {
        Self::with_config(name, initial, sink, &OrdinalConfig::default())
    }

    /// Creates an ordinal reporting to `sink` with a custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use traced_ordinal::{MemorySink, OrdinalConfigBuilder, TracedOrdinal};
    ///
    /// let config = OrdinalConfigBuilder::new().negative_suffix("_neg").build().unwrap();
    /// let sink = MemorySink::new();
    /// let slack = TracedOrdinal::with_config("slack", -2i64, &sink, &config);
    ///
    /// assert_eq!(slack.negative_track_name(), Some("slack_neg"));
    /// assert_eq!(sink.last_value("slack_neg"), Some(2));
    /// ```
    pub fn with_config(
        name: impl Into<String>,
        initial: T,
        sink: S,
        config: &OrdinalConfig,
    ) -> Self {
        let mut ordinal = Self {
            name: name.into(),
            suffix: config.suffix_cow(),
            negative_track: None,
            has_gone_negative: Ordinal::is_negative(initial),
            value: initial,
            sink,
        };
        ordinal.trace();
        ordinal
    }

    /// The current value
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// Assigns a new value and emits it
    ///
    /// The value is stored before anything is emitted, so a following
    /// [`get`](Self::get) always observes it.
    pub fn set(&mut self, value: T) {
        self.value = value;
        if !self.has_gone_negative && Ordinal::is_negative(value) {
            debug!(ordinal = %self.name, "Ordinal went negative for the first time");
            self.has_gone_negative = true;
        }
        self.trace();
    }

    /// Replaces the value with `f(current)`, emitting once
    ///
    /// ```
    /// use traced_ordinal::{MemorySink, TracedOrdinal};
    ///
    /// let sink = MemorySink::new();
    /// let mut frames = TracedOrdinal::with_sink("frames", 0i32, &sink);
    /// frames.update(|n| n + 1);
    /// frames.update(|n| n + 1);
    ///
    /// assert_eq!(frames.get(), 2);
    /// assert_eq!(sink.samples_for("frames"), vec![0, 1, 2]);
    /// ```
    pub fn update(&mut self, f: impl FnOnce(T) -> T) {
        self.set(f(self.value));
    }

    /// Display label the tracks are derived from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether any value held so far, including the initial one, was negative
    pub fn has_gone_negative(&self) -> bool {
        self.has_gone_negative
    }

    /// Name of the negative-magnitude track
    ///
    /// `None` until the first emission with the sink enabled.
    pub fn negative_track_name(&self) -> Option<&str> {
        self.negative_track.as_deref()
    }

    /// The sink this ordinal reports to
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the wrapper and returns the value without emitting
    pub fn into_inner(self) -> T {
        self.value
    }

    #[inline]
    fn trace(&mut self) {
        if !self.sink.is_enabled() {
            return;
        }
        self.emit();
    }

    fn emit(&mut self) {
        let negative_track = self.negative_track.get_or_insert_with(|| {
            let track = suffixed_track_name(&self.name, &self.suffix);
            debug!(ordinal = %self.name, track = %track, "Created negative counter track");
            track
        });

        let sample = self.value.to_i64();
        if !Ordinal::is_negative(self.value) {
            self.sink.emit(&self.name, sample);
            if self.has_gone_negative {
                self.sink.emit(negative_track.as_str(), 0);
            }
        } else {
            self.sink.emit(negative_track.as_str(), magnitude(sample));
            self.sink.emit(&self.name, 0);
        }
    }
}

/// Absolute value of a negative sample; `i64::MIN` saturates to `i64::MAX`
#[inline]
fn magnitude(sample: i64) -> i64 {
    sample.checked_neg().unwrap_or(i64::MAX)
}

impl<T, S> fmt::Debug for TracedOrdinal<T, S>
where
    T: Ordinal + fmt::Debug,
    S: CounterSink,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedOrdinal")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("has_gone_negative", &self.has_gone_negative)
            .field("negative_track", &self.negative_track)
            .field("sink", &self.sink.name())
            .finish()
    }
}

impl<T, S> fmt::Display for TracedOrdinal<T, S>
where
    T: Ordinal + fmt::Display,
    S: CounterSink,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl<T, S> PartialEq<T> for TracedOrdinal<T, S>
where
    T: Ordinal + PartialEq,
    S: CounterSink,
{
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}
