//! Well-known names and constants
//!
//! This module centralizes the fixed strings used to name counter tracks and
//! tracing targets, so subscribers and tests can refer to them by name.

/// Suffix appended to an ordinal's name to form its negative-magnitude track.
///
/// A value named `"VsyncOffset"` emits negative magnitudes on `"VsyncOffsetNegative"`.
pub const NEGATIVE_SUFFIX: &str = "Negative";

/// `tracing` target used by [`TracingSink`](crate::TracingSink) for counter events.
///
/// Subscribers that convert events into counter tracks should filter on this target.
pub const COUNTER_TARGET: &str = "traced_ordinal::counter";

/// Field name carrying the counter track name on a counter event.
pub const COUNTER_FIELD: &str = "counter";

/// Field name carrying the integer sample on a counter event.
pub const VALUE_FIELD: &str = "value";
