// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Traced ordinals: scalars that mirror every assignment to trace counter tracks.
//!
//! A [`TracedOrdinal`] wraps a boolean, signed integer, [`Nanoseconds`] duration
//! or integral enum and reports each new value to a [`CounterSink`]. Negative
//! values are split onto a parallel `<name>Negative` track so viewers that only
//! plot magnitudes still show the sign.
//!
//! ```
//! use traced_ordinal::{MemorySink, Nanoseconds, TracedOrdinal};
//!
//! let sink = MemorySink::new();
//! let mut vsync_offset = TracedOrdinal::with_sink("vsyncOffset", Nanoseconds::ZERO, &sink);
//! vsync_offset.set(Nanoseconds::from_micros(-120));
//!
//! assert_eq!(vsync_offset.get(), Nanoseconds::from_micros(-120));
//! assert_eq!(sink.last_value("vsyncOffsetNegative"), Some(120_000));
//! assert_eq!(sink.last_value("vsyncOffset"), Some(0));
//! ```

mod cancel;
mod config;
mod errors;
mod ordinal;
mod sink;
mod types;

pub use cancel::{
    CancelationMode, CancelationOptions, EventTracker, PointerIdSet, MAX_POINTER_ID,
};
pub use config::constants::{COUNTER_FIELD, COUNTER_TARGET, NEGATIVE_SUFFIX, VALUE_FIELD};
pub use config::{OrdinalConfig, OrdinalConfigBuilder};
pub use errors::{ConfigError, ConversionError, TracedOrdinalError};
pub use ordinal::TracedOrdinal;
pub use sink::{CounterSample, CounterSink, MemorySink, NoopSink, TracingSink};
pub use types::duration::Nanoseconds;
pub use types::kind::Ordinal;

#[doc(hidden)]
pub use types::kind::__private;
