// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Criteria describing which pending input events a dispatcher should cancel
//!
//! [`CancelationOptions`] is a passive filter: the dispatch subsystem builds
//! one, reads its fields while walking its pending events, and drops it. Every
//! optional filter left unset matches any value.
//!
//! # Example
//!
//! ```
//! use traced_ordinal::{CancelationMode, CancelationOptions, PointerIdSet};
//!
//! let options = CancelationOptions::new(CancelationMode::Pointer, "window lost focus", None)
//!     .with_display_id(0)
//!     .with_pointer_ids(PointerIdSet::new().with(1));
//!
//! assert!(options.matches_device(7)); // unset: any device
//! assert!(options.matches_display(0));
//! assert!(!options.matches_display(2));
//! assert!(options.matches_pointer(1));
//! assert!(!options.matches_pointer(0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

mod pointers;

pub use pointers::{PointerIdSet, MAX_POINTER_ID};

crate::ordinal_enum! {
    /// Which class of events to cancel
    ///
    /// The discriminants are stable so the mode can be traced as a counter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum CancelationMode: i32 {
        /// Cancel every pending event
        All = 0,
        /// Cancel pointer (motion) events only
        Pointer = 1,
        /// Cancel key and other non-pointer events
        NonPointer = 2,
        /// Cancel fallback key events
        Fallback = 3,
        /// Cancel hover events
        Hover = 4,
    }
}

impl fmt::Display for CancelationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CancelationMode::All => "CANCEL_ALL_EVENTS",
            CancelationMode::Pointer => "CANCEL_POINTER_EVENTS",
            CancelationMode::NonPointer => "CANCEL_NON_POINTER_EVENTS",
            CancelationMode::Fallback => "CANCEL_FALLBACK_EVENTS",
            CancelationMode::Hover => "CANCEL_HOVER_EVENTS",
        };
        f.write_str(name)
    }
}

/// External collaborator that records event lifecycles for tracing
pub trait EventTracker {
    /// Called when a dispatcher applies a cancelation
    fn record_cancelation(&self, mode: CancelationMode, reason: &str);
}

/// Specifies which events are to be canceled and why
///
/// Deliberately neither `Clone` nor `Copy`: one set of criteria belongs to one
/// cancelation pass.
pub struct CancelationOptions<'a> {
    /// The criterion used to pick events to cancel
    pub mode: CancelationMode,

    /// Descriptive reason for the cancelation
    pub reason: &'a str,

    /// Key code to cancel, or `None` for any key event
    pub key_code: Option<i32>,

    /// Device to cancel events from, or `None` for any device
    pub device_id: Option<i32>,

    /// Display to cancel events on, or `None` for any display
    pub display_id: Option<i32>,

    /// Pointers to cancel, or `None` for all pointers
    pub pointer_ids: Option<PointerIdSet>,

    /// Borrowed event tracker; `None` when tracking is off
    pub tracker: Option<&'a dyn EventTracker>,
}

impl<'a> CancelationOptions<'a> {
    /// Creates criteria with every optional filter unset
    pub fn new(
        mode: CancelationMode,
        reason: &'a str,
        tracker: Option<&'a dyn EventTracker>,
    ) -> Self {
        Self {
            mode,
            reason,
            key_code: None,
            device_id: None,
            display_id: None,
            pointer_ids: None,
            tracker,
        }
    }

    /// Restrict to one key code
    pub fn with_key_code(mut self, key_code: i32) -> Self {
        self.key_code = Some(key_code);
        self
    }

    /// Restrict to one device
    pub fn with_device_id(mut self, device_id: i32) -> Self {
        self.device_id = Some(device_id);
        self
    }

    /// Restrict to one display
    pub fn with_display_id(mut self, display_id: i32) -> Self {
        self.display_id = Some(display_id);
        self
    }

    /// Restrict to a set of pointers
    pub fn with_pointer_ids(mut self, pointer_ids: PointerIdSet) -> Self {
        self.pointer_ids = Some(pointer_ids);
        self
    }

    /// Whether a key event with `key_code` passes the key filter
    pub fn matches_key_code(&self, key_code: i32) -> bool {
        self.key_code.is_none_or(|k| k == key_code)
    }

    /// Whether an event from `device_id` passes the device filter
    pub fn matches_device(&self, device_id: i32) -> bool {
        self.device_id.is_none_or(|d| d == device_id)
    }

    /// Whether an event on `display_id` passes the display filter
    pub fn matches_display(&self, display_id: i32) -> bool {
        self.display_id.is_none_or(|d| d == display_id)
    }

    /// Whether `pointer_id` passes the pointer filter
    pub fn matches_pointer(&self, pointer_id: u32) -> bool {
        self.pointer_ids.is_none_or(|ids| ids.contains(pointer_id))
    }

    /// Forwards mode and reason to the tracker, if one is attached
    pub fn notify_tracker(&self) {
        if let Some(tracker) = self.tracker {
            tracker.record_cancelation(self.mode, self.reason);
        }
    }
}

impl fmt::Debug for CancelationOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelationOptions")
            .field("mode", &self.mode)
            .field("reason", &self.reason)
            .field("key_code", &self.key_code)
            .field("device_id", &self.device_id)
            .field("display_id", &self.display_id)
            .field("pointer_ids", &self.pointer_ids)
            .field("tracker", &self.tracker.is_some())
            .finish()
    }
}
