// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory sink that records every counter sample

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::{CounterSample, CounterSink};
use crate::errors::TracedOrdinalError;

/// In-memory sink with a runtime on/off switch
///
/// Samples are appended in emission order. The sink is thread-safe, so a single
/// instance can be shared (via `Arc` or `&`) by many ordinals.
///
/// # Examples
///
/// ```
/// use traced_ordinal::{CounterSample, MemorySink, TracedOrdinal};
///
/// let sink = MemorySink::new();
/// let mut x = TracedOrdinal::with_sink("X", 5i32, &sink);
/// x.set(-3);
///
/// assert_eq!(
///     sink.samples(),
///     vec![
///         CounterSample::new("X", 5),
///         CounterSample::new("XNegative", 3),
///         CounterSample::new("X", 0),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct MemorySink {
    enabled: AtomicBool,
    samples: Mutex<Vec<CounterSample>>,
}

impl MemorySink {
    /// Creates an enabled sink with no samples
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            samples: Mutex::new(Vec::new()),
        }
    }

    /// Creates a sink that starts disabled
    pub fn disabled() -> Self {
        let sink = Self::new();
        sink.set_enabled(false);
        sink
    }

    /// Turns collection on or off
    ///
    /// Already recorded samples are kept.
    pub fn set_enabled(&self, enabled: bool) {
        debug!(enabled, "MemorySink collection toggled");
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// All recorded samples, in emission order
    pub fn samples(&self) -> Vec<CounterSample> {
        self.lock().clone()
    }

    /// Recorded values for a single track, in emission order
    pub fn samples_for(&self, track: &str) -> Vec<i64> {
        self.lock()
            .iter()
            .filter(|sample| sample.track == track)
            .map(|sample| sample.value)
            .collect()
    }

    /// Most recent value recorded on a track
    pub fn last_value(&self, track: &str) -> Option<i64> {
        self.lock()
            .iter()
            .rev()
            .find(|sample| sample.track == track)
            .map(|sample| sample.value)
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops all recorded samples
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Exports all samples as a JSON array of `{"track": .., "value": ..}` objects
    pub fn to_json(&self) -> Result<String, TracedOrdinalError> {
        Ok(serde_json::to_string(&*self.lock())?)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CounterSample>> {
        // A panic while holding the lock can't leave the Vec half-written
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterSink for MemorySink {
    #[inline]
    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn emit(&self, track: &str, value: i64) {
        self.lock().push(CounterSample::new(track, value));
    }

    fn name(&self) -> &'static str {
        "MemorySink"
    }
}
