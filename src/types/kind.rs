// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The closed set of scalar kinds a traced ordinal can wrap
//!
//! Counter samples are signed 64-bit integers, so every kind must convert to
//! `i64` exactly and report its sign. The set is closed:
//!
//! - `bool` (0 or 1, never negative)
//! - signed integers: `i8`, `i16`, `i32`, `i64`, `isize`
//! - [`Nanoseconds`] (tick count in nanoseconds)
//! - fieldless enums with an integral `#[repr]`, declared through [`ordinal_enum!`](crate::ordinal_enum)
//!
//! Anything else (unsigned 64-bit integers, floats, strings) fails to compile
//! when used as a `TracedOrdinal` type parameter.

use super::duration::Nanoseconds;

/// Implementation details shared with [`ordinal_enum!`](crate::ordinal_enum).
///
/// Not part of the public API.
#[doc(hidden)]
pub mod __private {
    /// Seals [`Ordinal`](crate::Ordinal) so only the supported kinds implement it.
    pub trait Sealed {}
}

/// A scalar kind that can be mirrored to a counter track
///
/// The trait is sealed. Enums opt in through [`ordinal_enum!`](crate::ordinal_enum).
///
/// # Examples
///
/// ```
/// use traced_ordinal::{Nanoseconds, Ordinal};
///
/// assert_eq!(true.to_i64(), 1);
/// assert_eq!((-7i16).to_i64(), -7);
/// assert!((-7i16).is_negative());
/// assert!(!0i32.is_negative());
/// assert_eq!(Nanoseconds::from_millis(2).to_i64(), 2_000_000);
/// ```
pub trait Ordinal: Copy + __private::Sealed {
    /// Exact conversion to the counter sample type
    fn to_i64(self) -> i64;

    /// Whether the value's sign is negative
    ///
    /// Zero is never negative.
    fn is_negative(self) -> bool;
}

impl __private::Sealed for bool {}

impl Ordinal for bool {
    #[inline]
    fn to_i64(self) -> i64 {
        i64::from(self)
    }

    #[inline]
    fn is_negative(self) -> bool {
        false
    }
}

macro_rules! signed_ordinal {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl __private::Sealed for $ty {}

            impl Ordinal for $ty {
                #[inline]
                fn to_i64(self) -> i64 {
                    i64::from(self)
                }

                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }
            }
        )+
    };
}

signed_ordinal!(i8, i16, i32, i64);

impl __private::Sealed for isize {}

impl Ordinal for isize {
    #[inline]
    fn to_i64(self) -> i64 {
        // isize is at most 64 bits on every supported target
        self as i64
    }

    #[inline]
    fn is_negative(self) -> bool {
        self < 0
    }
}

impl __private::Sealed for Nanoseconds {}

impl Ordinal for Nanoseconds {
    #[inline]
    fn to_i64(self) -> i64 {
        self.as_nanos()
    }

    #[inline]
    fn is_negative(self) -> bool {
        self.as_nanos() < 0
    }
}

/// Declare fieldless enums as traceable ordinals
///
/// The macro declares the enum itself and writes its `#[repr]` from the type
/// after the colon, so the discriminant type and the counter conversion are
/// always the same. The representation must convert to `i64` losslessly: `i8`,
/// `i16`, `i32`, `i64`, `u8`, `u16` or `u32`. Any other representation fails to
/// compile. The enum must derive `Clone` and `Copy`.
///
/// The counter sample is the discriminant; its sign is the discriminant's sign.
///
/// # Examples
///
/// ```
/// use traced_ordinal::{ordinal_enum, Ordinal};
///
/// ordinal_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     enum Phase: i8 {
///         Early = -1,
///         OnTime = 0,
///         Late = 1,
///     }
/// }
///
/// assert_eq!(Phase::Late.to_i64(), 1);
/// assert!(Phase::Early.is_negative());
/// assert!(!Phase::OnTime.is_negative());
/// assert_eq!(std::mem::size_of::<Phase>(), std::mem::size_of::<i8>());
/// ```
///
/// A representation wider than `i64` can hold is rejected:
///
/// ```compile_fail
/// use traced_ordinal::ordinal_enum;
///
/// ordinal_enum! {
///     #[derive(Clone, Copy)]
///     enum Huge: u64 {
///         Big = 1 << 63,
///     }
/// }
/// ```
///
/// So is an enum that isn't `Copy`:
///
/// ```compile_fail
/// use traced_ordinal::ordinal_enum;
///
/// ordinal_enum! {
///     #[derive(Debug)]
///     enum Moved: i32 {
///         A = 1,
///     }
/// }
/// ```
#[macro_export]
macro_rules! ordinal_enum {
    ($(
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $($(#[$variant_meta:meta])* $variant:ident $(= $discriminant:expr)?),+ $(,)?
        }
    )+) => {
        $(
            $(#[$meta])*
            #[repr($repr)]
            $vis enum $name {
                $($(#[$variant_meta])* $variant $(= $discriminant)?),+
            }

            impl $crate::__private::Sealed for $name {}

            impl $crate::Ordinal for $name {
                #[inline]
                fn to_i64(self) -> i64 {
                    <i64 as ::core::convert::From<$repr>>::from(self as $repr)
                }

                #[inline]
                fn is_negative(self) -> bool {
                    $crate::Ordinal::to_i64(self) < 0
                }
            }
        )+
    };
}
