//! No-operation sink that disables counter emission entirely

use super::CounterSink;

/// A sink that is never enabled
///
/// Ordinals using this sink never build track names or emit anything; they
/// behave exactly like the plain scalar they wrap.
///
/// # Examples
///
/// ```
/// use traced_ordinal::{NoopSink, TracedOrdinal};
///
/// let mut depth = TracedOrdinal::with_sink("queueDepth", 0i64, NoopSink);
/// depth.set(-4);
/// assert_eq!(depth.get(), -4);
/// assert!(depth.negative_track_name().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl CounterSink for NoopSink {
    #[inline]
    fn is_enabled(&self) -> bool {
        false
    }

    #[inline]
    fn emit(&self, _track: &str, _value: i64) {
        // Discard
    }

    fn name(&self) -> &'static str {
        "NoopSink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_is_disabled() {
        assert!(!NoopSink.is_enabled());
        NoopSink.emit("ignored", 1);
        assert_eq!(NoopSink.name(), "NoopSink");
    }
}
