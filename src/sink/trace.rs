// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Sink that forwards counters to the `tracing` ecosystem

use tracing::Level;

use super::CounterSink;
use crate::config::constants::COUNTER_TARGET;

/// Forwards every counter sample as a `TRACE` event on [`COUNTER_TARGET`]
///
/// Each event carries two fields: `counter` (the track name) and `value` (the
/// `i64` sample). A subscriber layer that exports to Perfetto, Chrome JSON or a
/// metrics backend turns these events into counter tracks.
///
/// The sink is enabled only while the current subscriber is interested in
/// `TRACE` events on [`COUNTER_TARGET`]. `tracing` caches that interest per
/// callsite, so with no subscriber installed the check costs a couple of loads.
///
/// # Examples
///
/// ```
/// use traced_ordinal::TracedOrdinal;
///
/// // No subscriber is installed here, so nothing is emitted.
/// let mut refresh_rate = TracedOrdinal::new("refreshRate", 60i32);
/// refresh_rate.set(120);
/// assert_eq!(refresh_rate.get(), 120);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl CounterSink for TracingSink {
    #[inline]
    fn is_enabled(&self) -> bool {
        tracing::enabled!(target: COUNTER_TARGET, Level::TRACE)
    }

    #[inline]
    fn emit(&self, track: &str, value: i64) {
        tracing::event!(target: COUNTER_TARGET, Level::TRACE, counter = track, value);
    }

    fn name(&self) -> &'static str {
        "TracingSink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::{COUNTER_FIELD, VALUE_FIELD};
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    /// Field names and recorded values of every counter event, in order
    #[derive(Clone, Default)]
    struct FieldCapture {
        events: Arc<Mutex<Vec<Vec<(String, String)>>>>,
    }

    struct FieldVisitor(Vec<(String, String)>);

    impl Visit for FieldVisitor {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.push((field.name().to_string(), value.to_string()));
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.0.push((field.name().to_string(), value.to_string()));
        }

        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    impl<S: Subscriber> Layer<S> for FieldCapture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().target() != COUNTER_TARGET {
                return;
            }
            let mut visitor = FieldVisitor(Vec::new());
            event.record(&mut visitor);
            self.events.lock().unwrap().push(visitor.0);
        }
    }

    #[test]
    fn test_disabled_without_subscriber() {
        let dispatch = tracing::Dispatch::none();
        tracing::dispatcher::with_default(&dispatch, || {
            assert!(!TracingSink.is_enabled());
            TracingSink.emit("ignored", 1);
        });
    }

    #[test]
    fn test_event_fields_match_exported_names() {
        let capture = FieldCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            assert!(TracingSink.is_enabled());
            TracingSink.emit("XNegative", 3);
        });

        let events = capture.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![vec![
                (COUNTER_FIELD.to_string(), "XNegative".to_string()),
                (VALUE_FIELD.to_string(), "3".to_string()),
            ]]
        );
    }
}
