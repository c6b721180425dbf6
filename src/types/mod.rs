// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for the values a traced ordinal can carry.
//!
//! This module provides:
//! - The sealed [`Ordinal`](kind::Ordinal) trait describing the supported scalar kinds
//! - [`Nanoseconds`](duration::Nanoseconds), a signed duration with exact tick conversion

pub mod duration;
pub mod kind;

// Note: Public types are re-exported from lib.rs, not here
