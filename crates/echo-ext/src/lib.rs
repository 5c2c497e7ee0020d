// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-ext: extension traits over primitive and standard types.
//!
//! Each module adds a focused group of helpers to types the crate does not
//! own, through `*Ext` traits with blanket or macro-generated impls:
//!
//! - [`num`]: integer number theory, float helpers, scalar interpolation.
//! - [`endian`]: byte-order aware encoding of primitive numbers.
//! - [`bits`]: integers to and from per-bit boolean fields.
//! - [`text`]: string predicates, chunking, randomization, base64 and JSON.
//! - [`calendar`]: date arithmetic, durations and Unix timestamps.
//! - [`iter`] and [`slice`]: single-pass min/max and lazy adaptors.
//! - [`math`] and [`random`]: small vector types and random geometry.
//!
//! Fallible helpers return [`Result`] with [`ExtError`]; none of them panic
//! on bad input unless the method documents it.
//!
//! ```
//! use echo_ext::prelude::*;
//!
//! assert_eq!(28_u32.digital_root(), 1);
//! assert!("Race car".is_palindrome());
//! assert_eq!([4, 1, 9].iter().min_max().ok(), Some((&1, &9)));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

pub mod bits;
pub mod calendar;
pub mod endian;
pub mod error;
pub mod iter;
pub mod math;
pub mod num;
pub mod random;
pub mod slice;
pub mod text;

pub use error::{ExtError, Result};

/// Glob-importable set of every extension trait.
///
/// [`slice::SliceExt`] is left out: its borrowed `min_max*` methods share
/// names with [`iter::IterExt`], which already covers `&[T]`.
pub mod prelude {
    pub use crate::bits::{PackBits, Unpack};
    pub use crate::calendar::{DateExt, DateTimeExt, DurationExt, ToUnixTime, UnixTimeExt, YearExt};
    pub use crate::endian::{EndianBytes, Endianness, ReadEndianExt, WriteEndianExt};
    pub use crate::iter::IterExt;
    pub use crate::math::VectorExt;
    pub use crate::num::{FloatExt, IntExt};
    pub use crate::random::RandomExt;
    pub use crate::text::{CharExt, StrExt};
    #[cfg(feature = "json")]
    pub use crate::text::{FromJson, ToJson};
}
