// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for traced-ordinal integration tests
//!
//! Provides a `tracing` layer that captures counter events so tests can check
//! what [`TracingSink`](traced_ordinal::TracingSink) emitted without a real
//! trace backend.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use traced_ordinal::{CounterSample, COUNTER_FIELD, COUNTER_TARGET, VALUE_FIELD};

/// Layer recording every counter event it sees
///
/// Clones share the same buffer, so one clone can be installed in a subscriber
/// while the test keeps another to inspect samples.
///
/// # Example
///
/// ```rust,ignore
/// let capture = CounterCapture::default();
/// let subscriber = tracing_subscriber::registry().with(capture.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let _x = TracedOrdinal::new("X", 1i32);
/// });
/// assert_eq!(capture.rendered(), ["X=1"]);
/// ```
#[derive(Clone, Default)]
pub struct CounterCapture {
    samples: Arc<Mutex<Vec<CounterSample>>>,
}

impl CounterCapture {
    /// All captured samples, in emission order
    pub fn samples(&self) -> Vec<CounterSample> {
        self.samples.lock().unwrap().clone()
    }

    /// Captured samples rendered as `track=value`
    pub fn rendered(&self) -> Vec<String> {
        self.samples().iter().map(ToString::to_string).collect()
    }
}

#[derive(Default)]
struct CounterVisitor {
    track: Option<String>,
    value: Option<i64>,
}

impl Visit for CounterVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == COUNTER_FIELD {
            self.track = Some(value.to_string());
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == VALUE_FIELD {
            self.value = Some(value);
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for CounterCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != COUNTER_TARGET {
            return;
        }

        let mut visitor = CounterVisitor::default();
        event.record(&mut visitor);

        if let (Some(track), Some(value)) = (visitor.track, visitor.value) {
            self.samples
                .lock()
                .unwrap()
                .push(CounterSample::new(track, value));
        }
    }
}
